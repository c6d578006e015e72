//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::foundation::ConfigError;

/// Default ceiling on nested composite validators.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Tunables for an [`Engine`](super::Engine).
///
/// Deserializes from JSON with every field optional; unknown fields are
/// rejected.
///
/// # Examples
///
/// ```rust
/// use stencil_validator::engine::EngineConfig;
///
/// let config = EngineConfig::from_json(r#"{"max_depth": 8}"#).unwrap();
/// assert_eq!(config.max_depth, 8);
/// assert!(!config.lenient_tuples);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Deepest allowed nesting of mapping, sequence and tuple validators.
    pub max_depth: usize,

    /// Let tuple validators accept sequences of the right length.
    pub lenient_tuples: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            lenient_tuples: false,
        }
    }
}

impl EngineConfig {
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_lenient_tuples(mut self, lenient: bool) -> Self {
        self.lenient_tuples = lenient;
        self
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidMaxDepth`] for a zero depth.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMaxDepth`] when `max_depth` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth);
        }
        Ok(())
    }
}
