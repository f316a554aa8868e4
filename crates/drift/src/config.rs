//! # Demo Configuration
//!
//! One TOML file, read once at startup. Every field has a default matching
//! the original demo setup, so an empty (or absent) file runs the standard
//! 3000-entity scene.
//!
//! ```toml
//! entity_count = 3000
//! unit_length = 1.0
//! seed = 42
//! frames = 600
//!
//! [centre]
//! x = 0.0
//! y = 0.0
//! z = 0.0
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use drift_core::SimulationConfig;
use drift_shared::{Vec3, DEFAULT_ENTITY_COUNT};

/// Errors that can occur while loading the demo configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML or has wrong field types.
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Demo parameters, deserialized from TOML.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Number of instanced entities. Zero is normalized to 1 on load; the
    /// core refuses to construct an empty entity set.
    pub entity_count: u32,
    /// Centre of the moving entity's travel volume.
    pub centre: Vec3,
    /// Scale length the travel-volume diameter is derived from.
    pub unit_length: f32,
    /// RNG seed; a fixed seed fixes the whole run.
    pub seed: u64,
    /// Number of frames the headless demo executes.
    pub frames: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            entity_count: DEFAULT_ENTITY_COUNT,
            centre: Vec3::ZERO,
            unit_length: 1.0,
            seed: 42,
            frames: 600,
        }
    }
}

impl DemoConfig {
    /// Parses a configuration from TOML text and normalizes it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown fields.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        Ok(config.normalized())
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are malformed.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Loads `path` if it exists, falls back to defaults if it does not.
    ///
    /// A present-but-broken file is still an error; only absence is silent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] or [`ConfigError::Parse`] for an existing
    /// file that cannot be read or parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::info!("loading config from {}", path.display());
            Self::from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// The simulation-facing slice of the configuration.
    #[must_use]
    pub fn simulation(&self) -> SimulationConfig {
        SimulationConfig {
            entity_count: self.entity_count,
            centre: self.centre,
            unit_length: self.unit_length,
        }
    }

    /// Applies the harness-side normalization: an empty entity set is
    /// coerced to a single entity before the core ever sees it.
    fn normalized(mut self) -> Self {
        if self.entity_count == 0 {
            tracing::warn!("entity_count 0 is invalid, running with 1");
            self.entity_count = 1;
        }
        self
    }
}
