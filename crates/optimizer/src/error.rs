use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizerError {
    #[error("At least two instruments are required to optimize, got {0}.")]
    TooFewInstruments(usize),

    #[error("Dimension mismatch: {returns} expected returns but a {covariance}x{covariance} covariance matrix.")]
    DimensionMismatch { returns: usize, covariance: usize },
}
