use serde::{Deserialize, Serialize};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, MAX_DECIMAL_PRECISION};
use crate::errors::{Error, Result};

/// Settings controlling how allocation percentages are rendered.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AllocationSettings {
    /// Number of fractional digits in the formatted percentage
    pub decimal_places: u32,
}

impl Default for AllocationSettings {
    fn default() -> Self {
        Self {
            decimal_places: DISPLAY_DECIMAL_PRECISION,
        }
    }
}

impl AllocationSettings {
    pub fn new(decimal_places: u32) -> Result<Self> {
        let settings = Self { decimal_places };
        settings.validate()?;
        Ok(settings)
    }

    /// Parses settings from a JSON object. Missing fields take their defaults.
    pub fn from_json(input: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(input)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.decimal_places > MAX_DECIMAL_PRECISION {
            return Err(Error::InvalidConfigValue(format!(
                "decimalPlaces must be at most {}, got {}",
                MAX_DECIMAL_PRECISION, self.decimal_places
            )));
        }
        Ok(())
    }
}
