//! Rulebook: a validated `RulesConfig` ready for evaluation
//!
//! Every rule is a method on [`Rulebook`]. The crate-level free functions
//! evaluate against [`Rulebook::standard`], the shared instance built from
//! the default configuration.

use crate::config::RulesConfig;
use crate::error::ConfigResult;
use once_cell::sync::Lazy;

static STANDARD: Lazy<Rulebook> = Lazy::new(|| Rulebook {
    config: RulesConfig::default(),
});

/// Evaluates validation, discount and schedule rules against one config
#[derive(Debug, Clone)]
pub struct Rulebook {
    pub(crate) config: RulesConfig,
}

impl Rulebook {
    /// Build a rulebook from `config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if any configured value is out of range.
    pub fn new(config: RulesConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Rulebook { config })
    }

    /// Shared rulebook using the reference constants
    pub fn standard() -> &'static Rulebook {
        &STANDARD
    }

    /// The configuration this rulebook evaluates against
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }
}

impl Default for Rulebook {
    fn default() -> Self {
        Rulebook::standard().clone()
    }
}
