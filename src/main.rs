//! kubectl-scale_pct - scale workloads by a percentage of their current replicas

use anyhow::Result;
use clap::Parser;
use scale_pct::cli::Cli;
use scale_pct::commands::ScaleOptions;
use scale_pct::config::{self, AppConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    setup_tracing(cli.verbose);

    let app_config = config::load_config()?;

    // Handle color settings
    if cli.no_color || !app_config.colors {
        owo_colors::set_override(false);
    }

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    if let Err(e) = execute(&cli, &app_config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Complete, Validate, Run; the first failing phase aborts the rest.
async fn execute(cli: &Cli, app_config: &AppConfig) -> scale_pct::error::Result<()> {
    let options = ScaleOptions::complete(cli, app_config)?;
    options.validate()?;
    options.run().await
}

fn setup_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "kubectl-scale_pct", &mut std::io::stdout());
}
