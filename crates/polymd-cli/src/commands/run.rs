use crate::cli::RunArgs;
use crate::config::PartialSimulationConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use polymd::core::io::observables::ObservablesWriter;
use polymd::core::io::vtf::VtfWriter;
use polymd::engine::error::EngineError;
use polymd::engine::progress::ProgressReporter;
use polymd::workflows;
use tracing::{info, warn};

pub fn run(args: RunArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialSimulationConfig::from_file(path)?,
        None => {
            info!("No configuration file given, using built-in defaults.");
            PartialSimulationConfig::default()
        }
    };
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(&args)?;

    info!("Opening trajectory output {:?}", &args.output);
    let mut trajectory = VtfWriter::create(&args.output)?;
    let mut observables = args
        .observables
        .as_deref()
        .map(ObservablesWriter::create)
        .transpose()?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Simulating {} chain(s) of {} beads...",
        final_config.polymer.n_polymers, final_config.polymer.beads_per_chain
    );
    let mut sink = (&mut trajectory, &mut observables);
    let summary = match workflows::polymer::run(&final_config, &reporter, &mut sink) {
        Ok(summary) => summary,
        Err(e @ EngineError::WarmupDidNotConverge { .. }) => {
            warn!("{}", e);
            println!("Hint: increase `warmup.max-iterations` or `warmup.growth-factor`.");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "✓ {} frames ({} warmup iterations) written to: {}",
        summary.frames_written,
        summary.warmup.iterations,
        args.output.display()
    );
    if let Some(path) = &args.observables {
        println!("✓ Observables written to: {}", path.display());
    }
    let last = summary.final_observables;
    println!(
        "  Final state: t = {:.3}, T = {:.4}, E_total = {:.4}",
        last.time, last.temperature, last.total_energy
    );

    Ok(())
}
