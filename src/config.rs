//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/retree/retree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `RETREE_*` prefix
//!
//! Command-line flags are applied on top by the CLI via [`Settings::with_overrides`].

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, TokenMode};
use crate::domain::SubtreePolicy;

/// Unified configuration for retree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Handling of nodes with exactly one non-empty side
    pub policy: SubtreePolicy,
    /// How traversal text is split into values
    pub tokens: TokenMode,
    /// Explicit value separator for `words` mode (default: commas and whitespace)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

/// Get the XDG config directory for retree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "retree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("retree.toml"))
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings from the global config, an optional explicit file and
    /// `RETREE_*` environment variables.
    pub fn load(explicit: Option<&Path>) -> ApplicationResult<Self> {
        let global = global_config_path();
        Self::load_from(global.as_deref(), explicit)
    }

    /// Load settings from the given files.
    ///
    /// A missing `global` file is skipped. A missing `local` file is an error,
    /// since it was named explicitly.
    pub fn load_from(global: Option<&Path>, local: Option<&Path>) -> ApplicationResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = global {
            debug!("global config: {}", path.display());
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }
        if let Some(path) = local {
            debug!("explicit config: {}", path.display());
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        let config = builder
            .add_source(Environment::with_prefix("RETREE"))
            .build()
            .map_err(config_err)?;

        let settings: Self = config.try_deserialize().map_err(config_err)?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Apply command-line overrides. `None` keeps the loaded value.
    pub fn with_overrides(
        mut self,
        policy: Option<SubtreePolicy>,
        tokens: Option<TokenMode>,
        separator: Option<String>,
    ) -> Self {
        if let Some(policy) = policy {
            self.policy = policy;
        }
        if let Some(tokens) = tokens {
            self.tokens = tokens;
        }
        if separator.is_some() {
            self.separator = separator;
        }
        self
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
