//! Engine configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! [engine]
//! module_roll_up = true
//! suppress_implied_children = true
//! track_order = true
//!
//! [logging]
//! profile = "production"
//! ```
//!
//! Missing sections and keys fall back to their defaults; unknown keys are
//! ignored.

use std::path::Path;

use serde::Deserialize;
use studydiff_core::errors::{ChangelogError, Result};
use studydiff_core::logging_facility::{self, Profile};
use studydiff_core::EngineOptions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub profile: Profile,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub engine: EngineOptions,
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Parse a config document
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the text is not valid TOML or a value has the
    /// wrong type.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| ChangelogError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Read and parse a config file
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `InvalidConfig` if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ChangelogError::Io {
            message: format!("{}: {}", path.display(), e),
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), profile = ?config.logging.profile, "engine config loaded");
        Ok(config)
    }

    /// Install the logging profile named by this config
    pub fn init_logging(&self) {
        logging_facility::init(self.logging.profile);
    }
}
