use super::ModelError;
use super::ids::ParticleId;
use super::particle::{DEFAULT_MASS, Particle};
use nalgebra::{Point3, Vector3};

/// Owns every particle of the system in insertion order.
///
/// Identifiers are dense indices starting at 0. Particles are never removed, so an id is
/// valid for the entire lifetime of the store once it has been handed out.
#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a particle of unit mass at rest and returns its id.
    pub fn add(&mut self, position: Point3<f64>) -> ParticleId {
        self.push(position, DEFAULT_MASS)
    }

    /// Inserts a particle of the given mass, which must be finite and positive.
    pub fn add_with_mass(
        &mut self,
        position: Point3<f64>,
        mass: f64,
    ) -> Result<ParticleId, ModelError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(ModelError::InvalidMass(mass));
        }
        Ok(self.push(position, mass))
    }

    fn push(&mut self, position: Point3<f64>, mass: f64) -> ParticleId {
        let id = ParticleId(self.particles.len());
        self.particles.push(Particle::new(id, position, mass));
        id
    }

    pub fn get(&self, id: ParticleId) -> Result<&Particle, ModelError> {
        self.particles
            .get(id.index())
            .ok_or(ModelError::ParticleNotFound(id))
    }

    pub fn get_mut(&mut self, id: ParticleId) -> Result<&mut Particle, ModelError> {
        self.particles
            .get_mut(id.index())
            .ok_or(ModelError::ParticleNotFound(id))
    }

    #[inline]
    pub fn contains(&self, id: ParticleId) -> bool {
        id.index() < self.particles.len()
    }

    /// Iterates over all particles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.particles.iter().map(|p| p.position).collect()
    }

    pub fn reset_forces(&mut self) {
        for particle in &mut self.particles {
            particle.reset_force();
        }
    }

    /// Overwrites the velocity of every particle with the same value.
    pub fn set_velocities(&mut self, velocity: Vector3<f64>) {
        for particle in &mut self.particles {
            particle.velocity = velocity;
        }
    }
}
