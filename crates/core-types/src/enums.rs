use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse risk bucket attached to an instrument or to a whole portfolio.
///
/// Instruments use all five buckets. Portfolio-level metrics only ever produce
/// `Low`, `Medium` or `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    #[serde(rename = "Low-Medium")]
    LowMedium,
    Medium,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    High,
}

impl RiskLevel {
    /// Returns the display label, e.g. `"Low-Medium"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::LowMedium => "Low-Medium",
            RiskLevel::Medium => "Medium",
            RiskLevel::MediumHigh => "Medium-High",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "low-medium" => Ok(RiskLevel::LowMedium),
            "medium" => Ok(RiskLevel::Medium),
            "medium-high" => Ok(RiskLevel::MediumHigh),
            "high" => Ok(RiskLevel::High),
            _ => Err(CoreError::InvalidInput("risk level".to_string(), s.to_string())),
        }
    }
}

/// The optimization mode chosen by the investor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Balance risk against return.
    #[default]
    Balanced,
    /// Prioritize higher expected returns.
    Return,
}

impl Mode {
    /// Maps a free-text label onto a mode.
    ///
    /// Only the exact canonical labels are recognized (after trimming and
    /// lower-casing); anything else is `Balanced`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "return" => Mode::Return,
            _ => Mode::Balanced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Balanced => "balanced",
            Mode::Return => "return",
        }
    }

    pub fn is_balanced(&self) -> bool {
        matches!(self, Mode::Balanced)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
