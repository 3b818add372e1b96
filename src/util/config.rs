use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub watch: WatchConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_element")]
    pub element: String,
    #[serde(default)]
    pub auto_update: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WatchConfig {
    #[serde(default)]
    pub targets: Vec<WatchTarget>,
}

/// A named instant shown by `difftime watch`. `at` is kept as written so a bad value
/// shows up as a skipped row rather than a config error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchTarget {
    pub label: String,
    pub at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_element() -> String {
    "span".to_string()
}
fn default_log_filter() -> String {
    "difftime=debug".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            element: default_element(),
            auto_update: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            dir: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        let mut candidates = Vec::new();

        // 1. ~/.config/difftime/config.toml
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/difftime/config.toml"));
        }

        // 2. Platform-specific path (macOS: ~/Library/Application Support/difftime/)
        if let Some(proj_dirs) = ProjectDirs::from("", "", "difftime") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                return Self::read(config_path);
            }
        }

        Ok(AppConfig::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| "Failed to parse config file")
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.log.dir {
            return dir.clone();
        }
        if let Some(proj_dirs) = ProjectDirs::from("", "", "difftime") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/difftime/logs")
    }
}
