use super::ids::ParticleId;
use nalgebra::{Point3, Vector3};

pub const DEFAULT_MASS: f64 = 1.0;

/// A single bead of the simulated system.
///
/// The force field is an accumulator: it is cleared before every force evaluation and
/// then filled with the sum of all pair and bond contributions acting on the particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Stable identifier, equal to the insertion index in the owning store.
    pub id: ParticleId,
    /// Position in simulation length units. Positions are not folded into the box.
    pub position: Point3<f64>,
    pub velocity: Vector3<f64>,
    /// Total force from the most recent evaluation.
    pub force: Vector3<f64>,
    pub mass: f64,
}

impl Particle {
    pub fn new(id: ParticleId, position: Point3<f64>, mass: f64) -> Self {
        Self {
            id,
            position,
            velocity: Vector3::zeros(),
            force: Vector3::zeros(),
            mass,
        }
    }

    #[inline]
    pub fn reset_force(&mut self) {
        self.force = Vector3::zeros();
    }

    #[inline]
    pub fn add_force(&mut self, force: &Vector3<f64>) {
        self.force += force;
    }

    /// Kinetic energy `0.5 * m * |v|^2`.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }
}
