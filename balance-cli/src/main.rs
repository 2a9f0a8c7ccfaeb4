use balance_cli::{CliError, Command, SimConfig, parse_args, run, usage, write_report};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run_cli().await {
        eprintln!("balance error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), CliError> {
    let overrides = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", usage());
            return Ok(());
        }
        Command::Run(overrides) => overrides,
    };

    let cwd = std::env::current_dir()?;
    let mut config = SimConfig::discover(overrides.config.as_deref(), &cwd)?;
    overrides.apply(&mut config);

    let sim = run(&config, std::io::stdout()).await?;
    if config.report {
        write_report(&sim, &mut std::io::stdout().lock())?;
    }
    Ok(())
}
