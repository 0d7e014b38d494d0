use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "polymd developers",
    version,
    about = "polymd CLI - Langevin dynamics of coarse-grained bead-spring polymers with WCA excluded volume and FENE bonds.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate polymer chains, remove overlaps and record a production trajectory.
    Run(RunArgs),
    /// Print the default configuration file to stdout.
    Defaults,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    // --- Core Arguments ---
    /// Path to the configuration file in TOML format. Built-in defaults are used without it.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path for the VTF trajectory file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path for a CSV file receiving per-frame observables.
    #[arg(long, value_name = "PATH")]
    pub observables: Option<PathBuf>,

    // --- Overrides ---
    /// Override the thermostat seed.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Override the thermostat temperature kT.
    #[arg(long, value_name = "FLOAT")]
    pub kt: Option<f64>,

    /// Override the number of production frames.
    #[arg(long, value_name = "INT")]
    pub t_steps: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S warmup.growth-factor=1.05
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
