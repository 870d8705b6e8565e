use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "Replay drag-and-drop scripts against a kanban board")]
#[command(long_about = "
taskboard applies a script of board commands (add/remove/rename columns and
tasks, drag start/over/end events) to a fresh board and prints the result.

Configuration is read from .taskboard/config.{toml,yaml,yml,json} in the
current directory and from TASKBOARD_* environment variables.

Example usage:
  taskboard replay moves.yaml                     # Print final board as YAML
  taskboard --format json replay moves.json       # ... as JSON
  taskboard --sequential-ids replay moves.yaml    # Ids col-1, task-1, ...
  taskboard demo                                  # Walk through sample drags
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors; boards are still printed
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for printed boards
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Configuration file to use instead of discovery
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Generate col-N / task-N ids regardless of configuration
    #[arg(long, global = true)]
    pub sequential_ids: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a YAML or JSON command script to a fresh board
    Replay {
        /// Script file; `.json` is parsed as JSON, anything else as YAML
        script: PathBuf,
    },
    /// Run the sample drag scenarios, printing the board after each step
    Demo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from([
            "taskboard",
            "--format",
            "json",
            "--sequential-ids",
            "replay",
            "script.yaml",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.sequential_ids);
        assert!(matches!(cli.command, Commands::Replay { ref script } if script == &PathBuf::from("script.yaml")));
    }
}
