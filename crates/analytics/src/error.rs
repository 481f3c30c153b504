use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Dimension mismatch: {weights} weights, {returns} returns and a {covariance}x{covariance} covariance matrix.")]
    DimensionMismatch {
        weights: usize,
        returns: usize,
        covariance: usize,
    },
}
