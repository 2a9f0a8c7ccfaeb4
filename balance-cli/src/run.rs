use crate::config::{SimConfig, TraceFormat};
use crate::error::CliError;
use balance_rules::{FileSource, LineSource, Rules, spawn_pipeline};
use balance_sim::{JsonObserver, SimError, Simulation, TextObserver, TracingObserver};
use std::io::Write;

/// Build a simulation that writes its trace to `out` in the configured
/// format and mirrors every firing to `tracing`.
pub fn build_simulation<W>(config: &SimConfig, out: W) -> Simulation
where
    W: Write + Send + 'static,
{
    let sim = Simulation::new()
        .with_max_firings(config.max_firings_per_diff)
        .with_observer(TracingObserver::new());
    match config.format {
        TraceFormat::Text => sim.with_observer(TextObserver::new(out)),
        TraceFormat::Json => sim.with_observer(JsonObserver::new(out)),
    }
}

/// Run the configured input to completion and hand back the settled
/// simulation.
pub async fn run<W>(config: &SimConfig, out: W) -> Result<Simulation, CliError>
where
    W: Write + Send + 'static,
{
    config.validate()?;
    let mut sim = build_simulation(config, out);
    let source = FileSource::new(&config.input);
    tracing::info!(
        input = %source.path().display(),
        pipeline = config.pipeline,
        "balance.run.start"
    );

    let stats = if config.pipeline {
        sim.run_channel(spawn_pipeline(source, config.channel_capacity))
            .await?
    } else {
        let lines = source.lines().map_err(SimError::from)?;
        sim.run(Rules::new(lines))?
    };

    tracing::info!(
        diffs = stats.diffs,
        firings = stats.firings,
        binned = stats.binned,
        bots = sim.registry().bot_count(),
        bins = sim.registry().bin_count(),
        "balance.run.end"
    );
    Ok(sim)
}

/// Write `bin <id>: <value>` for every bin that holds a value.
pub fn write_report(sim: &Simulation, out: &mut impl Write) -> std::io::Result<()> {
    for bin in sim.bins() {
        if let Some(value) = bin.value() {
            writeln!(out, "bin {}: {}", bin.id(), value)?;
        }
    }
    Ok(())
}
