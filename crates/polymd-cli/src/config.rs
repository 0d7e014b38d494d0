pub mod defaults;

use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use polymd::engine::config as core_config;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialSystemConfig {
    periodic: Option<bool>,
    box_length: Option<f64>,
    time_step: Option<f64>,
    skin: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialThermostatConfig {
    kt: Option<f64>,
    gamma: Option<f64>,
    seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialWcaConfig {
    enabled: Option<bool>,
    epsilon: Option<f64>,
    sigma: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialFeneConfig {
    k: Option<f64>,
    d_r_max: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialInteractionsConfig {
    wca: Option<PartialWcaConfig>,
    fene: Option<PartialFeneConfig>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialPolymerConfig {
    n_polymers: Option<usize>,
    beads_per_chain: Option<usize>,
    bond_length: Option<f64>,
    seed: Option<u64>,
    min_distance: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialWarmupConfig {
    warm_steps: Option<usize>,
    initial_cap: Option<f64>,
    growth_factor: Option<f64>,
    target_min_distance: Option<f64>,
    max_iterations: Option<usize>,
    equilibration_steps: Option<usize>,
    thermalization_steps: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialProductionConfig {
    t_steps: Option<usize>,
    steps_per_frame: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialSimulationConfig {
    system: Option<PartialSystemConfig>,
    thermostat: Option<PartialThermostatConfig>,
    interactions: Option<PartialInteractionsConfig>,
    polymer: Option<PartialPolymerConfig>,
    warmup: Option<PartialWarmupConfig>,
    production: Option<PartialProductionConfig>,
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

impl PartialSimulationConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn merge_with_cli(mut self, args: &RunArgs) -> Result<core_config::SimulationConfig> {
        self.apply_set_values(&args.set_values)?;
        let defaults = DefaultsConfig::default();

        let system = self.system.take().unwrap_or_default();
        let thermostat = self.thermostat.take().unwrap_or_default();
        let mut interactions = self.interactions.take().unwrap_or_default();
        let wca = interactions.wca.take().unwrap_or_default();
        let fene = interactions.fene.take().unwrap_or_default();
        let polymer = self.polymer.take().unwrap_or_default();
        let warmup = self.warmup.take().unwrap_or_default();
        let production = self.production.take().unwrap_or_default();

        let mut builder = core_config::SimulationConfigBuilder::new()
            .time_step(system.time_step.unwrap_or(defaults.time_step))
            .skin(system.skin.unwrap_or(defaults.skin))
            .kt(args.kt.or(thermostat.kt).unwrap_or(defaults.kt))
            .gamma(thermostat.gamma.unwrap_or(defaults.gamma))
            .thermostat_seed(
                args.seed
                    .or(thermostat.seed)
                    .unwrap_or(defaults.thermostat_seed),
            )
            .fene(
                fene.k.unwrap_or(defaults.fene_k),
                fene.d_r_max.unwrap_or(defaults.fene_d_r_max),
            )
            .n_polymers(polymer.n_polymers.unwrap_or(defaults.n_polymers))
            .beads_per_chain(polymer.beads_per_chain.unwrap_or(defaults.beads_per_chain))
            .bond_length(polymer.bond_length.unwrap_or(defaults.bond_length))
            .polymer_seed(polymer.seed.unwrap_or(defaults.polymer_seed))
            .polymer_min_distance(
                polymer
                    .min_distance
                    .unwrap_or(defaults.polymer_min_distance),
            )
            .warmup_config(core_config::WarmupConfig {
                warm_steps: warmup.warm_steps.unwrap_or(defaults.warm_steps),
                initial_cap: warmup.initial_cap.unwrap_or(defaults.initial_cap),
                growth_factor: warmup.growth_factor.unwrap_or(defaults.growth_factor),
                target_min_distance: warmup
                    .target_min_distance
                    .unwrap_or(defaults.target_min_distance),
                max_iterations: warmup.max_iterations.unwrap_or(defaults.max_iterations),
                equilibration_steps: warmup
                    .equilibration_steps
                    .unwrap_or(defaults.equilibration_steps),
                thermalization_steps: warmup
                    .thermalization_steps
                    .unwrap_or(defaults.thermalization_steps),
            })
            .production_config(core_config::ProductionConfig {
                t_steps: args
                    .t_steps
                    .or(production.t_steps)
                    .unwrap_or(defaults.t_steps),
                steps_per_frame: production
                    .steps_per_frame
                    .unwrap_or(defaults.steps_per_frame),
            });

        if system.periodic.unwrap_or(defaults.periodic) {
            builder = builder.box_length(system.box_length.unwrap_or(defaults.box_length));
        } else if system.box_length.is_some() {
            return Err(CliError::Config(
                "`system.box-length` cannot be combined with `system.periodic = false`."
                    .to_string(),
            ));
        }

        if wca.enabled.unwrap_or(defaults.wca_enabled) {
            builder = builder.wca(
                wca.epsilon.unwrap_or(defaults.wca_epsilon),
                wca.sigma.unwrap_or(defaults.wca_sigma),
            );
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();

            match key {
                "system.periodic" => {
                    self.system.get_or_insert_with(Default::default).periodic =
                        Some(parse_value(key, value, "boolean")?);
                }
                "system.box-length" => {
                    self.system.get_or_insert_with(Default::default).box_length =
                        Some(parse_value(key, value, "float")?);
                }
                "system.time-step" => {
                    self.system.get_or_insert_with(Default::default).time_step =
                        Some(parse_value(key, value, "float")?);
                }
                "system.skin" => {
                    self.system.get_or_insert_with(Default::default).skin =
                        Some(parse_value(key, value, "float")?);
                }
                "thermostat.kt" => {
                    self.thermostat.get_or_insert_with(Default::default).kt =
                        Some(parse_value(key, value, "float")?);
                }
                "thermostat.gamma" => {
                    self.thermostat.get_or_insert_with(Default::default).gamma =
                        Some(parse_value(key, value, "float")?);
                }
                "thermostat.seed" => {
                    self.thermostat.get_or_insert_with(Default::default).seed =
                        Some(parse_value(key, value, "integer")?);
                }
                "interactions.wca.enabled" => {
                    self.wca().enabled = Some(parse_value(key, value, "boolean")?);
                }
                "interactions.wca.epsilon" => {
                    self.wca().epsilon = Some(parse_value(key, value, "float")?);
                }
                "interactions.wca.sigma" => {
                    self.wca().sigma = Some(parse_value(key, value, "float")?);
                }
                "interactions.fene.k" => {
                    self.fene().k = Some(parse_value(key, value, "float")?);
                }
                "interactions.fene.d-r-max" => {
                    self.fene().d_r_max = Some(parse_value(key, value, "float")?);
                }
                "polymer.n-polymers" => {
                    self.polymer.get_or_insert_with(Default::default).n_polymers =
                        Some(parse_value(key, value, "integer")?);
                }
                "polymer.beads-per-chain" => {
                    self.polymer
                        .get_or_insert_with(Default::default)
                        .beads_per_chain = Some(parse_value(key, value, "integer")?);
                }
                "polymer.bond-length" => {
                    self.polymer.get_or_insert_with(Default::default).bond_length =
                        Some(parse_value(key, value, "float")?);
                }
                "polymer.seed" => {
                    self.polymer.get_or_insert_with(Default::default).seed =
                        Some(parse_value(key, value, "integer")?);
                }
                "polymer.min-distance" => {
                    self.polymer.get_or_insert_with(Default::default).min_distance =
                        Some(parse_value(key, value, "float")?);
                }
                "warmup.warm-steps" => {
                    self.warmup.get_or_insert_with(Default::default).warm_steps =
                        Some(parse_value(key, value, "integer")?);
                }
                "warmup.initial-cap" => {
                    self.warmup.get_or_insert_with(Default::default).initial_cap =
                        Some(parse_value(key, value, "float")?);
                }
                "warmup.growth-factor" => {
                    self.warmup.get_or_insert_with(Default::default).growth_factor =
                        Some(parse_value(key, value, "float")?);
                }
                "warmup.target-min-distance" => {
                    self.warmup
                        .get_or_insert_with(Default::default)
                        .target_min_distance = Some(parse_value(key, value, "float")?);
                }
                "warmup.max-iterations" => {
                    self.warmup.get_or_insert_with(Default::default).max_iterations =
                        Some(parse_value(key, value, "integer")?);
                }
                "warmup.equilibration-steps" => {
                    self.warmup
                        .get_or_insert_with(Default::default)
                        .equilibration_steps = Some(parse_value(key, value, "integer")?);
                }
                "warmup.thermalization-steps" => {
                    self.warmup
                        .get_or_insert_with(Default::default)
                        .thermalization_steps = Some(parse_value(key, value, "integer")?);
                }
                "production.t-steps" => {
                    self.production.get_or_insert_with(Default::default).t_steps =
                        Some(parse_value(key, value, "integer")?);
                }
                "production.steps-per-frame" => {
                    self.production
                        .get_or_insert_with(Default::default)
                        .steps_per_frame = Some(parse_value(key, value, "integer")?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    fn wca(&mut self) -> &mut PartialWcaConfig {
        self.interactions
            .get_or_insert_with(Default::default)
            .wca
            .get_or_insert_with(Default::default)
    }

    fn fene(&mut self) -> &mut PartialFeneConfig {
        self.interactions
            .get_or_insert_with(Default::default)
            .fene
            .get_or_insert_with(Default::default)
    }
}
