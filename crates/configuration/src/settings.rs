use crate::error::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional in `config.toml`; a missing section or field
/// falls back to the engine's reference constants.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub optimizer: OptimizerSettings,
    pub risk: RiskSettings,
    pub logging: LoggingSettings,
}

/// Tuning knobs for the projected gradient search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OptimizerSettings {
    /// Upper bound on refinement steps for three or more instruments.
    pub max_iterations: usize,
    /// Step size applied to the gradient estimate.
    pub learning_rate: Decimal,
    /// Bump used by the one-sided finite-difference gradient.
    pub finite_difference_step: Decimal,
    /// The search stops once the gradient norm drops below this value.
    pub convergence_tolerance: Decimal,
    /// Weight floor applied when a balanced, diversified portfolio is requested.
    pub diversified_min_weight: Decimal,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            learning_rate: dec!(0.1),
            finite_difference_step: dec!(0.000001),
            convergence_tolerance: dec!(0.0001),
            diversified_min_weight: dec!(0.02),
        }
    }
}

/// Parameters of the correlation model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RiskSettings {
    /// Correlation assumed for any pair missing from the correlation table.
    pub default_correlation: Decimal,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            default_correlation: dec!(0.2),
        }
    }
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set (e.g. "info", "optimizer=debug").
    pub level: String,
    /// If set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
    /// File name prefix for the rolling log files.
    pub file_prefix: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "ballast.log".to_string(),
        }
    }
}

impl Settings {
    /// Checks that every value is usable by the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let opt = &self.optimizer;

        if opt.max_iterations == 0 {
            return Err(ConfigError::ValidationError(
                "optimizer.max_iterations must be greater than 0".to_string(),
            ));
        }
        if opt.learning_rate <= Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "optimizer.learning_rate must be greater than 0".to_string(),
            ));
        }
        if opt.finite_difference_step <= Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "optimizer.finite_difference_step must be greater than 0".to_string(),
            ));
        }
        if opt.convergence_tolerance <= Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "optimizer.convergence_tolerance must be greater than 0".to_string(),
            ));
        }
        // Five instruments at the floor must still leave room to sum to one.
        if opt.diversified_min_weight < Decimal::ZERO || opt.diversified_min_weight >= dec!(0.2) {
            return Err(ConfigError::ValidationError(
                "optimizer.diversified_min_weight must be in [0, 0.2)".to_string(),
            ));
        }
        if self.risk.default_correlation < Decimal::NEGATIVE_ONE
            || self.risk.default_correlation > Decimal::ONE
        {
            return Err(ConfigError::ValidationError(
                "risk.default_correlation must be in [-1, 1]".to_string(),
            ));
        }
        if self.logging.file_prefix.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.file_prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
