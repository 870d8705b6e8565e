//! Configuration loading using Figment
//!
//! Sources are merged in precedence order, later sources overriding earlier
//! ones:
//!
//! 1. Built-in defaults
//! 2. `.taskboard/config.{toml,yaml,yml,json}` in the project directory
//! 3. `TASKBOARD_*` environment variables (`TASKBOARD_TASK_LABEL=Card`)

use crate::error::Result;
use crate::ids::{SequentialIds, UlidIds};
use crate::store::{BoardStore, Labels};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Directory holding project configuration
pub const CONFIG_DIR_NAME: &str = ".taskboard";

const CONFIG_FILE_STEM: &str = "config";
const ENV_PREFIX: &str = "TASKBOARD_";

/// How new ids are generated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdScheme {
    #[default]
    Ulid,
    Sequential,
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskboardConfig {
    /// Prefix of generated column titles
    pub column_label: String,
    /// Prefix of generated task contents
    pub task_label: String,
    pub ids: IdScheme,
    /// Default tracing filter for binaries
    pub log_level: String,
}

impl Default for TaskboardConfig {
    fn default() -> Self {
        let labels = Labels::default();
        Self {
            column_label: labels.column,
            task_label: labels.task,
            ids: IdScheme::default(),
            log_level: "info".to_string(),
        }
    }
}

impl TaskboardConfig {
    /// Load configuration for the current working directory
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from(&cwd)
    }

    /// Load configuration discovered under `project_dir`
    pub fn load_from(project_dir: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        for path in discover(project_dir) {
            trace!(path = %path.display(), "loading config file");
            figment = merge_file(figment, &path);
        }
        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Load configuration from one explicit file, still honoring the
    /// environment
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            )
            .into());
        }
        let figment = merge_file(
            Figment::new().merge(Serialized::defaults(Self::default())),
            path,
        );
        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        debug!(?config, "loaded configuration");
        Ok(config)
    }

    pub fn labels(&self) -> Labels {
        Labels {
            column: self.column_label.clone(),
            task: self.task_label.clone(),
        }
    }

    /// An empty store using the configured id scheme and labels
    pub fn build_store(&self) -> BoardStore {
        let store = match self.ids {
            IdScheme::Ulid => BoardStore::with_ids(UlidIds::new()),
            IdScheme::Sequential => BoardStore::with_ids(SequentialIds::new()),
        };
        store.with_labels(self.labels())
    }
}

/// Config files present in `project_dir/.taskboard`, in merge order
fn discover(project_dir: &Path) -> Vec<PathBuf> {
    let dir = project_dir.join(CONFIG_DIR_NAME);
    ["toml", "yaml", "yml", "json"]
        .iter()
        .map(|ext| dir.join(format!("{CONFIG_FILE_STEM}.{ext}")))
        .filter(|path| path.is_file())
        .collect()
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => figment.merge(Json::file(path)),
        Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
        _ => figment.merge(Toml::file(path)),
    }
}
