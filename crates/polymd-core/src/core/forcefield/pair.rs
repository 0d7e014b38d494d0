use super::params::{ForceCap, WcaParams};
use super::potentials::{wca_energy, wca_force};
use nalgebra::Vector3;

/// Force on the first particle of a pair and the pair energy.
///
/// The second particle receives `-force`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairContribution {
    pub force: Vector3<f64>,
    pub energy: f64,
}

impl PairContribution {
    pub fn zero() -> Self {
        Self {
            force: Vector3::zeros(),
            energy: 0.0,
        }
    }
}

/// Repulsive WCA interaction between every pair of beads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairInteraction {
    params: WcaParams,
    cutoff: f64,
}

impl PairInteraction {
    pub fn new(params: WcaParams) -> Self {
        Self {
            params,
            cutoff: params.cutoff(),
        }
    }

    pub fn params(&self) -> &WcaParams {
        &self.params
    }

    #[inline]
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Evaluates the pair for separation `r_vec = pos[a] - pos[b]`.
    ///
    /// The force magnitude is clamped to `cap` when the cap is active. The energy is
    /// always the uncapped WCA energy. Coincident particles have no defined direction and
    /// contribute nothing.
    #[inline]
    pub fn evaluate(&self, r_vec: &Vector3<f64>, cap: ForceCap) -> PairContribution {
        let dist_sq = r_vec.norm_squared();
        if dist_sq >= self.cutoff * self.cutoff || dist_sq == 0.0 {
            return PairContribution::zero();
        }
        let dist = dist_sq.sqrt();
        let magnitude = cap.clamp(wca_force(dist, self.params.epsilon(), self.params.sigma()));
        let force = (r_vec / dist) * magnitude;

        PairContribution {
            force,
            energy: wca_energy(dist, self.params.epsilon(), self.params.sigma()),
        }
    }
}
