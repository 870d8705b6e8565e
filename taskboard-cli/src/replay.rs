//! Script loading, replay and board output.

use crate::cli::OutputFormat;
use std::path::Path;
use taskboard::{
    Board, BoardCommand, BoardHandle, KanbanBoard, Outcome, Result, TaskboardError,
};
use tracing::{debug, info};

/// Read a command script. `.json` files are JSON, everything else YAML.
pub fn load_script(path: &Path) -> Result<Vec<BoardCommand>> {
    let content = std::fs::read_to_string(path)?;
    let commands = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => parse_json(&content)?,
        _ => serde_yaml_ng::from_str(&content)?,
    };
    debug!(path = %path.display(), commands = commands.len(), "loaded script");
    Ok(commands)
}

fn parse_json(content: &str) -> Result<Vec<BoardCommand>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_array() {
        return Err(TaskboardError::parse(
            "script must be a list of commands",
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Apply `commands` in order through the board queue and return the board
pub async fn replay(board: KanbanBoard, commands: Vec<BoardCommand>) -> Result<KanbanBoard> {
    let (handle, task) = BoardHandle::spawn(board);

    for (step, command) in commands.into_iter().enumerate() {
        let op = command.op_string();
        let outcome = handle.apply(command).await?;
        match &outcome {
            Outcome::Created { item } => info!(step, op, %item, "created"),
            Outcome::Changed => info!(step, op, "changed"),
            Outcome::Unchanged => debug!(step, op, "unchanged"),
        }
    }

    drop(handle);
    task.shutdown().await
}

pub fn render(board: &Board, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml_ng::to_string(board)?,
        OutputFormat::Json => serde_json::to_string_pretty(board)? + "\n",
    })
}
