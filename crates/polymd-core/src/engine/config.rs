use crate::core::forcefield::params::{FeneParams, WcaParams};
use crate::core::geometry::SimulationBox;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

fn invalid(name: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        name,
        reason: reason.into(),
    }
}

pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid(name, format!("must be positive, got {}", value)))
    }
}

pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(invalid(name, format!("must be non-negative, got {}", value)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    pub sim_box: SimulationBox,
    pub time_step: f64,
    /// Verlet skin. Accepted for compatibility; the all-pairs scan does not use it.
    pub skin: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThermostatConfig {
    pub kt: f64,
    pub gamma: f64,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionConfig {
    /// `None` disables excluded-volume interactions.
    pub wca: Option<WcaParams>,
    pub fene: FeneParams,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolymerConfig {
    pub n_polymers: usize,
    pub beads_per_chain: usize,
    pub bond_length: f64,
    pub min_distance: f64,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarmupConfig {
    /// Integrator steps per cap increment.
    pub warm_steps: usize,
    pub initial_cap: f64,
    pub growth_factor: f64,
    pub target_min_distance: f64,
    pub max_iterations: usize,
    /// Uncapped steps at zero temperature once the target distance is reached.
    pub equilibration_steps: usize,
    /// Steps at the configured temperature closing the warmup.
    pub thermalization_steps: usize,
}

impl Default for WarmupConfig {
    fn default() -> Self {
        Self {
            warm_steps: 10,
            initial_cap: 1.0,
            growth_factor: 1.01,
            target_min_distance: 0.95,
            max_iterations: 10_000,
            equilibration_steps: 100,
            thermalization_steps: 100,
        }
    }
}

impl WarmupConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.warm_steps == 0 {
            return Err(invalid("warmup.warm_steps", "must be at least 1"));
        }
        require_positive("warmup.initial_cap", self.initial_cap)?;
        if !(self.growth_factor.is_finite() && self.growth_factor > 1.0) {
            return Err(invalid(
                "warmup.growth_factor",
                format!("must be greater than 1, got {}", self.growth_factor),
            ));
        }
        require_non_negative("warmup.target_min_distance", self.target_min_distance)?;
        if self.max_iterations == 0 {
            return Err(invalid("warmup.max_iterations", "must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductionConfig {
    /// Number of recorded frames.
    pub t_steps: usize,
    /// Integrator steps between recorded frames.
    pub steps_per_frame: usize,
}

impl Default for ProductionConfig {
    fn default() -> Self {
        Self {
            t_steps: 1000,
            steps_per_frame: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub system: SystemConfig,
    pub thermostat: ThermostatConfig,
    pub interactions: InteractionConfig,
    pub polymer: PolymerConfig,
    pub warmup: WarmupConfig,
    pub production: ProductionConfig,
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    box_length: Option<f64>,
    time_step: Option<f64>,
    skin: Option<f64>,
    kt: Option<f64>,
    gamma: Option<f64>,
    thermostat_seed: Option<u64>,
    wca: Option<(f64, f64)>,
    fene: Option<(f64, f64)>,
    n_polymers: Option<usize>,
    beads_per_chain: Option<usize>,
    bond_length: Option<f64>,
    polymer_min_distance: Option<f64>,
    polymer_seed: Option<u64>,
    warmup: Option<WarmupConfig>,
    production: Option<ProductionConfig>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edge length of a cubic periodic box. Without it the box is open.
    pub fn box_length(mut self, length: f64) -> Self {
        self.box_length = Some(length);
        self
    }
    pub fn time_step(mut self, dt: f64) -> Self {
        self.time_step = Some(dt);
        self
    }
    pub fn skin(mut self, skin: f64) -> Self {
        self.skin = Some(skin);
        self
    }
    pub fn kt(mut self, kt: f64) -> Self {
        self.kt = Some(kt);
        self
    }
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = Some(gamma);
        self
    }
    pub fn thermostat_seed(mut self, seed: u64) -> Self {
        self.thermostat_seed = Some(seed);
        self
    }
    pub fn wca(mut self, epsilon: f64, sigma: f64) -> Self {
        self.wca = Some((epsilon, sigma));
        self
    }
    pub fn fene(mut self, k: f64, d_r_max: f64) -> Self {
        self.fene = Some((k, d_r_max));
        self
    }
    pub fn n_polymers(mut self, n: usize) -> Self {
        self.n_polymers = Some(n);
        self
    }
    pub fn beads_per_chain(mut self, n: usize) -> Self {
        self.beads_per_chain = Some(n);
        self
    }
    pub fn bond_length(mut self, length: f64) -> Self {
        self.bond_length = Some(length);
        self
    }
    pub fn polymer_min_distance(mut self, distance: f64) -> Self {
        self.polymer_min_distance = Some(distance);
        self
    }
    pub fn polymer_seed(mut self, seed: u64) -> Self {
        self.polymer_seed = Some(seed);
        self
    }
    pub fn warmup_config(mut self, config: WarmupConfig) -> Self {
        self.warmup = Some(config);
        self
    }
    pub fn production_config(mut self, config: ProductionConfig) -> Self {
        self.production = Some(config);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let sim_box = match self.box_length {
            Some(length) => SimulationBox::cubic(length)
                .map_err(|e| invalid("system.box_length", e.to_string()))?,
            None => SimulationBox::Open,
        };
        let time_step = self
            .time_step
            .ok_or(ConfigError::MissingParameter("time_step"))?;
        let system = SystemConfig {
            sim_box,
            time_step: require_positive("system.time_step", time_step)?,
            skin: require_non_negative("system.skin", self.skin.unwrap_or(0.0))?,
        };

        let kt = self.kt.ok_or(ConfigError::MissingParameter("kt"))?;
        let gamma = self.gamma.ok_or(ConfigError::MissingParameter("gamma"))?;
        let thermostat = ThermostatConfig {
            kt: require_non_negative("thermostat.kt", kt)?,
            gamma: require_positive("thermostat.gamma", gamma)?,
            seed: self
                .thermostat_seed
                .ok_or(ConfigError::MissingParameter("thermostat_seed"))?,
        };

        let wca = match self.wca {
            Some((epsilon, sigma)) => Some(
                WcaParams::new(epsilon, sigma)
                    .map_err(|e| invalid("interactions.wca", e.to_string()))?,
            ),
            None => None,
        };
        let (k, d_r_max) = self.fene.ok_or(ConfigError::MissingParameter("fene"))?;
        let fene =
            FeneParams::new(k, d_r_max).map_err(|e| invalid("interactions.fene", e.to_string()))?;
        let interactions = InteractionConfig { wca, fene };

        let bond_length = require_positive(
            "polymer.bond_length",
            self.bond_length
                .ok_or(ConfigError::MissingParameter("bond_length"))?,
        )?;
        if bond_length >= fene.d_r_max() {
            return Err(invalid(
                "polymer.bond_length",
                format!(
                    "must be shorter than the FENE maximum extension {}, got {}",
                    fene.d_r_max(),
                    bond_length
                ),
            ));
        }
        let polymer = PolymerConfig {
            n_polymers: self
                .n_polymers
                .ok_or(ConfigError::MissingParameter("n_polymers"))?,
            beads_per_chain: self
                .beads_per_chain
                .ok_or(ConfigError::MissingParameter("beads_per_chain"))?,
            bond_length,
            min_distance: require_non_negative(
                "polymer.min_distance",
                self.polymer_min_distance.unwrap_or(bond_length),
            )?,
            seed: self
                .polymer_seed
                .ok_or(ConfigError::MissingParameter("polymer_seed"))?,
        };
        if polymer.n_polymers == 0 || polymer.beads_per_chain == 0 {
            return Err(invalid(
                "polymer",
                "n_polymers and beads_per_chain must be at least 1",
            ));
        }

        let warmup = self.warmup.unwrap_or_default();
        warmup.validate()?;

        let production = self.production.unwrap_or_default();
        if production.steps_per_frame == 0 {
            return Err(invalid("production.steps_per_frame", "must be at least 1"));
        }

        Ok(SimulationConfig {
            system,
            thermostat,
            interactions,
            polymer,
            warmup,
            production,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::new()
            .box_length(100.0)
            .time_step(0.01)
            .skin(0.4)
            .kt(1.0)
            .gamma(1.0)
            .thermostat_seed(42)
            .wca(1.0, 1.0)
            .fene(10.0, 2.0)
            .n_polymers(1)
            .beads_per_chain(50)
            .bond_length(1.0)
            .polymer_seed(3210)
    }

    #[test]
    fn complete_builder_produces_config_with_defaults() {
        let config = complete_builder().build().unwrap();
        assert_eq!(config.system.time_step, 0.01);
        assert_eq!(
            config.system.sim_box.lengths().unwrap(),
            nalgebra::Vector3::repeat(100.0)
        );
        assert_eq!(config.thermostat.seed, 42);
        assert_eq!(config.interactions.wca.unwrap().sigma(), 1.0);
        assert_eq!(config.polymer.min_distance, 1.0);
        assert_eq!(config.warmup, WarmupConfig::default());
        assert_eq!(config.production, ProductionConfig::default());
    }

    #[test]
    fn missing_time_step_is_reported() {
        let result = SimulationConfigBuilder::new().kt(1.0).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("time_step")));
    }

    #[test]
    fn non_positive_time_step_is_invalid() {
        let result = complete_builder().time_step(0.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                name: "system.time_step",
                ..
            })
        ));
    }

    #[test]
    fn non_positive_gamma_is_invalid() {
        let result = complete_builder().gamma(-1.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                name: "thermostat.gamma",
                ..
            })
        ));
    }

    #[test]
    fn negative_kt_is_invalid_but_zero_is_allowed() {
        assert!(complete_builder().kt(-0.1).build().is_err());
        assert!(complete_builder().kt(0.0).build().is_ok());
    }

    #[test]
    fn non_positive_sigma_is_invalid() {
        let result = complete_builder().wca(1.0, 0.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                name: "interactions.wca",
                ..
            })
        ));
    }

    #[test]
    fn bond_length_must_fit_inside_fene_extension() {
        let result = complete_builder().bond_length(2.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                name: "polymer.bond_length",
                ..
            })
        ));
    }

    #[test]
    fn warmup_growth_factor_must_exceed_one() {
        let warmup = WarmupConfig {
            growth_factor: 1.0,
            ..Default::default()
        };
        let result = complete_builder().warmup_config(warmup).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                name: "warmup.growth_factor",
                ..
            })
        ));
    }

    #[test]
    fn without_box_length_the_box_is_open() {
        let config = SimulationConfigBuilder {
            box_length: None,
            ..complete_builder()
        }
        .build()
        .unwrap();
        assert_eq!(config.system.sim_box, SimulationBox::Open);
    }
}
