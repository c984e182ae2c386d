//! Configuration file and resolved application settings

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use common::backend::GioBackend;
use common::mount::discovery::DEFAULT_PREFIX;
use common::mount::CollisionPolicy;

use crate::cli::Args;

pub const APP_NAME: &str = "gvfsh";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub mount: MountConfig,
    pub tools: ToolsConfig,
    pub log: LogConfig,
    /// How siblings sharing a display name are mapped
    pub collisions: CollisionPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountConfig {
    /// Fixed mount root; skips discovery when set
    pub root: Option<PathBuf>,
    /// Directory scanned for mounts (defaults to `$XDG_RUNTIME_DIR/gvfs`)
    pub gvfs_dir: Option<PathBuf>,
    /// Name prefix identifying a Drive mount
    pub prefix: String,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            root: None,
            gvfs_dir: None,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub gio: String,
    pub cp: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            gio: "gio".to_string(),
            cp: "cp".to_string(),
        }
    }
}

impl ToolsConfig {
    pub fn backend(&self) -> GioBackend {
        GioBackend::with_programs(&self.gio, &self.cp)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Write logs to `<dir>/gvfsh.log` instead of stderr
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            dir: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Loaded configuration and where it came from
#[derive(Debug, Clone)]
pub struct AppState {
    /// The file the config was read from, if any
    pub config_path: Option<PathBuf>,
    pub config: AppConfig,
}

impl AppState {
    /// `<config dir>/gvfsh/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from `config_path`, or from the default location.
    ///
    /// An explicit path must exist. A missing default file means defaults.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, StateError> {
        let path = match config_path {
            Some(path) if !path.exists() => return Err(StateError::ConfigNotFound(path)),
            Some(path) => path,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self {
                        config_path: None,
                        config: AppConfig::default(),
                    });
                }
            },
        };

        let config = Self::read_config(&path)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(Self {
            config_path: Some(path),
            config,
        })
    }

    fn read_config(path: &Path) -> Result<AppConfig, StateError> {
        let contents = std::fs::read_to_string(path).map_err(|source| StateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| StateError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Command line flags take precedence over the file
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(root) = &args.root {
            self.config.mount.root = Some(root.clone());
        }
        if let Some(policy) = args.collisions {
            self.config.collisions = policy;
        }
        if let Some(level) = &args.log_level {
            self.config.log.level = level.clone();
        }
    }
}
