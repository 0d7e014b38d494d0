//! Seeded generation of initial polymer conformations.
//!
//! Chains are grown as random walks with a fixed step length. A candidate bead is
//! rejected while it lies closer than `min_distance` to any already placed bead other
//! than its own predecessor.

use super::geometry::SimulationBox;
use nalgebra::{Point3, Vector3};
use rand::Rng;
use rand_distr::{Distribution, UnitSphere};
use thiserror::Error;
use tracing::{debug, instrument};

pub const DEFAULT_MAX_TRIES: usize = 1000;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolymerError {
    #[error("Invalid chain parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("Failed to place bead {bead} of chain {chain} after {tries} attempts")]
    PlacementFailed {
        chain: usize,
        bead: usize,
        tries: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChainGenerator {
    pub n_polymers: usize,
    pub beads_per_chain: usize,
    pub bond_length: f64,
    pub min_distance: f64,
    pub max_tries: usize,
}

impl ChainGenerator {
    pub fn new(n_polymers: usize, beads_per_chain: usize, bond_length: f64) -> Self {
        Self {
            n_polymers,
            beads_per_chain,
            bond_length,
            min_distance: bond_length,
            max_tries: DEFAULT_MAX_TRIES,
        }
    }

    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn with_max_tries(mut self, max_tries: usize) -> Self {
        self.max_tries = max_tries;
        self
    }

    fn validate(&self) -> Result<(), PolymerError> {
        if !(self.bond_length.is_finite() && self.bond_length > 0.0) {
            return Err(PolymerError::InvalidParameter {
                name: "bond_length",
                reason: format!("must be positive, got {}", self.bond_length),
            });
        }
        if !(self.min_distance.is_finite() && self.min_distance >= 0.0) {
            return Err(PolymerError::InvalidParameter {
                name: "min_distance",
                reason: format!("must be non-negative, got {}", self.min_distance),
            });
        }
        if self.max_tries == 0 {
            return Err(PolymerError::InvalidParameter {
                name: "max_tries",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Generates `n_polymers` chains of `beads_per_chain` positions each.
    ///
    /// Chain starts are drawn uniformly inside a periodic box. For an open box they are
    /// drawn from a cube whose edge equals the contour length of one chain.
    #[instrument(
        level = "debug",
        skip_all,
        fields(n_polymers = self.n_polymers, beads = self.beads_per_chain)
    )]
    pub fn generate<R: Rng + ?Sized>(
        &self,
        sim_box: &SimulationBox,
        rng: &mut R,
    ) -> Result<Vec<Vec<Point3<f64>>>, PolymerError> {
        self.validate()?;

        let region = sim_box.lengths().unwrap_or_else(|| {
            Vector3::repeat(self.bond_length * self.beads_per_chain.max(1) as f64)
        });
        let mut placed: Vec<Point3<f64>> =
            Vec::with_capacity(self.n_polymers * self.beads_per_chain);
        let mut chains = Vec::with_capacity(self.n_polymers);

        for chain in 0..self.n_polymers {
            let mut beads = Vec::with_capacity(self.beads_per_chain);
            for bead in 0..self.beads_per_chain {
                let predecessor = beads.last().copied();
                let position = self
                    .place_bead(predecessor, &placed, &region, sim_box, rng)
                    .ok_or(PolymerError::PlacementFailed {
                        chain,
                        bead,
                        tries: self.max_tries,
                    })?;
                beads.push(position);
                placed.push(position);
            }
            debug!(chain, "Chain placed.");
            chains.push(beads);
        }

        Ok(chains)
    }

    fn place_bead<R: Rng + ?Sized>(
        &self,
        predecessor: Option<Point3<f64>>,
        placed: &[Point3<f64>],
        region: &Vector3<f64>,
        sim_box: &SimulationBox,
        rng: &mut R,
    ) -> Option<Point3<f64>> {
        // The predecessor is always the last placed bead of the current chain.
        let neighbors = match predecessor {
            Some(_) => &placed[..placed.len() - 1],
            None => placed,
        };

        for _ in 0..self.max_tries {
            let candidate = match predecessor {
                Some(prev) => {
                    let [x, y, z]: [f64; 3] = UnitSphere.sample(rng);
                    prev + Vector3::new(x, y, z) * self.bond_length
                }
                None => Point3::new(
                    rng.gen_range(0.0..region.x),
                    rng.gen_range(0.0..region.y),
                    rng.gen_range(0.0..region.z),
                ),
            };
            let accepted = neighbors
                .iter()
                .all(|other| sim_box.distance(&candidate, other) >= self.min_distance);
            if accepted {
                return Some(candidate);
            }
        }
        None
    }
}
