#[cfg(feature = "cli")]
pub mod cli;
pub mod local;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use local::LocalSessionStore;

use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Controls how hard a draw tries before settling on a full search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawSettings {
    /// Randomized attempts per draw; the last one always runs to completion.
    pub max_attempts: usize,
    /// Candidate assignments an attempt may try before it is abandoned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_limit: Option<u64>,
    /// Fixes the shuffles, making draws reproducible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            step_limit: None,
            seed: None,
        }
    }
}

impl Validate for DrawSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("draw.max_attempts", self.max_attempts, 1)?;
        if let Some(limit) = self.step_limit {
            validate_positive_number("draw.step_limit", limit, 1)?;
        }
        Ok(())
    }
}
