/// Values used for every setting that neither the config file nor the command line provide.
pub struct DefaultsConfig {
    pub periodic: bool,
    pub box_length: f64,
    pub time_step: f64,
    pub skin: f64,
    pub kt: f64,
    pub gamma: f64,
    pub thermostat_seed: u64,
    pub wca_enabled: bool,
    pub wca_epsilon: f64,
    pub wca_sigma: f64,
    pub fene_k: f64,
    pub fene_d_r_max: f64,
    pub n_polymers: usize,
    pub beads_per_chain: usize,
    pub bond_length: f64,
    pub polymer_seed: u64,
    pub polymer_min_distance: f64,
    pub warm_steps: usize,
    pub initial_cap: f64,
    pub growth_factor: f64,
    pub target_min_distance: f64,
    pub max_iterations: usize,
    pub equilibration_steps: usize,
    pub thermalization_steps: usize,
    pub t_steps: usize,
    pub steps_per_frame: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            periodic: true,
            box_length: 100.0,
            time_step: 0.01,
            skin: 0.4,
            kt: 1.0,
            gamma: 1.0,
            thermostat_seed: 42,
            wca_enabled: true,
            wca_epsilon: 1.0,
            wca_sigma: 1.0,
            fene_k: 10.0,
            fene_d_r_max: 2.0,
            n_polymers: 1,
            beads_per_chain: 50,
            bond_length: 1.0,
            polymer_seed: 3210,
            polymer_min_distance: 0.9,
            warm_steps: 10,
            initial_cap: 1.0,
            growth_factor: 1.01,
            target_min_distance: 0.95,
            max_iterations: 10_000,
            equilibration_steps: 100,
            thermalization_steps: 100,
            t_steps: 1000,
            steps_per_frame: 10,
        }
    }
}

impl DefaultsConfig {
    /// Renders the defaults as a complete, commented configuration file.
    pub fn to_toml_string(&self) -> String {
        format!(
            r#"# polymd configuration

[system]
periodic = {periodic}
box-length = {box_length:?}
time-step = {time_step:?}
skin = {skin:?} # accepted, unused by the all-pairs neighbor scan

[thermostat]
kt = {kt:?}
gamma = {gamma:?}
seed = {thermostat_seed}

[interactions.wca]
enabled = {wca_enabled}
epsilon = {wca_epsilon:?}
sigma = {wca_sigma:?}

[interactions.fene]
k = {fene_k:?}
d-r-max = {fene_d_r_max:?}

[polymer]
n-polymers = {n_polymers}
beads-per-chain = {beads_per_chain}
bond-length = {bond_length:?}
seed = {polymer_seed}
min-distance = {polymer_min_distance:?}

[warmup]
warm-steps = {warm_steps}
initial-cap = {initial_cap:?}
growth-factor = {growth_factor:?}
target-min-distance = {target_min_distance:?}
max-iterations = {max_iterations}
equilibration-steps = {equilibration_steps}
thermalization-steps = {thermalization_steps}

[production]
t-steps = {t_steps}
steps-per-frame = {steps_per_frame}
"#,
            periodic = self.periodic,
            box_length = self.box_length,
            time_step = self.time_step,
            skin = self.skin,
            kt = self.kt,
            gamma = self.gamma,
            thermostat_seed = self.thermostat_seed,
            wca_enabled = self.wca_enabled,
            wca_epsilon = self.wca_epsilon,
            wca_sigma = self.wca_sigma,
            fene_k = self.fene_k,
            fene_d_r_max = self.fene_d_r_max,
            n_polymers = self.n_polymers,
            beads_per_chain = self.beads_per_chain,
            bond_length = self.bond_length,
            polymer_seed = self.polymer_seed,
            polymer_min_distance = self.polymer_min_distance,
            warm_steps = self.warm_steps,
            initial_cap = self.initial_cap,
            growth_factor = self.growth_factor,
            target_min_distance = self.target_min_distance,
            max_iterations = self.max_iterations,
            equilibration_steps = self.equilibration_steps,
            thermalization_steps = self.thermalization_steps,
            t_steps = self.t_steps,
            steps_per_frame = self.steps_per_frame,
        )
    }
}
