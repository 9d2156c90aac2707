//! Options for building byte reports.

use serde::{Deserialize, Serialize};

use crate::dump::DEFAULT_MAX_BYTES;
use crate::error::TallyError;

/// Options controlling [`analyze`](crate::analyze) and the hex dump budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyOptions {
    /// Byte budget for hex dumps (default: 256)
    #[serde(default = "default_max_bytes")]
    pub max_bytes: i64,

    /// Include a per-character breakdown in reports (default: false)
    #[serde(default)]
    pub breakdown: bool,

    /// Maximum number of breakdown entries (default: 1024)
    #[serde(default = "default_breakdown_limit")]
    pub breakdown_limit: usize,
}

impl Default for TallyOptions {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
            breakdown: false,
            breakdown_limit: default_breakdown_limit(),
        }
    }
}

impl TallyOptions {
    /// Parse options from a JSON document and validate them.
    pub fn from_json(source: &str) -> Result<Self, TallyError> {
        let options: Self = serde_json::from_str(source)?;
        tracing::debug!("loaded options from JSON: {:?}", options);
        options.validate()?;
        Ok(options)
    }

    /// Parse options from a TOML document and validate them.
    pub fn from_toml(source: &str) -> Result<Self, TallyError> {
        let options: Self = toml::from_str(source)?;
        tracing::debug!("loaded options from TOML: {:?}", options);
        options.validate()?;
        Ok(options)
    }

    /// Check that the options are consistent.
    pub fn validate(&self) -> Result<(), TallyError> {
        if self.breakdown && self.breakdown_limit == 0 {
            return Err(TallyError::InvalidOptions(
                "breakdownLimit must be greater than 0 when breakdown is enabled".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_bytes() -> i64 {
    DEFAULT_MAX_BYTES
}

fn default_breakdown_limit() -> usize {
    1024
}
