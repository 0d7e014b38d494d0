//! Enumeration of candidate interacting pairs.
//!
//! Force evaluation only consumes the [`NeighborFinder`] contract, so a spatial
//! partitioning scheme (cell or Verlet lists) can replace [`BruteForce`] for large systems
//! without touching the interaction code.

use super::geometry::SimulationBox;
use itertools::Itertools;
use nalgebra::Point3;

pub trait NeighborFinder: Send + Sync {
    /// Returns index pairs `(i, j)` with `i < j` that may interact.
    fn candidate_pairs(
        &mut self,
        positions: &[Point3<f64>],
        sim_box: &SimulationBox,
    ) -> &[(usize, usize)];
}

/// All-pairs enumeration, O(n^2). The pair list only depends on the particle count and is
/// rebuilt when that changes.
#[derive(Debug, Clone, Default)]
pub struct BruteForce {
    pairs: Vec<(usize, usize)>,
    particle_count: usize,
}

impl BruteForce {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NeighborFinder for BruteForce {
    fn candidate_pairs(
        &mut self,
        positions: &[Point3<f64>],
        _sim_box: &SimulationBox,
    ) -> &[(usize, usize)] {
        if self.particle_count != positions.len() {
            self.pairs = (0..positions.len()).tuple_combinations().collect();
            self.particle_count = positions.len();
        }
        &self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(n: usize) -> Vec<Point3<f64>> {
        (0..n).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn brute_force_yields_every_unordered_pair_once() {
        let mut finder = BruteForce::new();
        let pairs = finder.candidate_pairs(&positions(4), &SimulationBox::Open);
        assert_eq!(
            pairs,
            &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
    }

    #[test]
    fn brute_force_pair_count_is_n_choose_two() {
        let mut finder = BruteForce::new();
        assert_eq!(
            finder
                .candidate_pairs(&positions(50), &SimulationBox::Open)
                .len(),
            50 * 49 / 2
        );
        assert!(
            finder
                .candidate_pairs(&positions(1), &SimulationBox::Open)
                .is_empty()
        );
        assert!(
            finder
                .candidate_pairs(&positions(0), &SimulationBox::Open)
                .is_empty()
        );
    }

    #[test]
    fn brute_force_includes_distant_pairs() {
        let mut finder = BruteForce::new();
        let far = vec![Point3::origin(), Point3::new(1e6, 0.0, 0.0)];
        assert_eq!(finder.candidate_pairs(&far, &SimulationBox::Open), &[(0, 1)]);
    }
}
