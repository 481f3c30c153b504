use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    #[error("Dimension mismatch: {names} instrument names but {stds} standard deviations.")]
    DimensionMismatch { names: usize, stds: usize },

    #[error("Correlation between '{0}' and '{1}' must be in [-1, 1], got {2}.")]
    InvalidCorrelation(String, String, Decimal),

    #[error("Self-correlation of '{0}' is fixed at 1.")]
    SelfCorrelation(String),
}
