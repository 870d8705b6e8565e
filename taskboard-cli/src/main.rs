mod cli;
mod demo;
mod replay;

use clap::Parser;
use cli::{Cli, Commands};
use std::process::ExitCode;
use taskboard::{IdScheme, KanbanBoard, Result, TaskboardConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    configure_logging(&config.log_level, cli.verbose, cli.quiet);

    match run(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<TaskboardConfig> {
    let mut config = match &cli.config {
        Some(path) => TaskboardConfig::load_file(path)?,
        None => TaskboardConfig::load()?,
    };
    if cli.sequential_ids {
        config.ids = IdScheme::Sequential;
    }
    Ok(config)
}

async fn run(cli: &Cli, config: &TaskboardConfig) -> Result<()> {
    let board = KanbanBoard::from_config(config);
    match &cli.command {
        Commands::Replay { script } => {
            let commands = replay::load_script(script)?;
            let board = replay::replay(board, commands).await?;
            print!("{}", replay::render(board.board(), cli.format)?);
        }
        Commands::Demo => {
            demo::run(board, cli.format, &mut std::io::stdout().lock())?;
        }
    }
    Ok(())
}

fn configure_logging(default_level: &str, verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        default_level
    };

    // RUST_LOG wins over flags and configuration
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
