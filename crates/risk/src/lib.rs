//! # Ballast Risk Model
//!
//! Turns per-instrument volatilities into the covariance matrix the
//! optimizer works against.
//!
//! - `CorrelationModel`: pairwise correlation lookup with a default prior.
//! - `build_covariance`: Σ from standard deviations and correlations.
//! - `RiskError`: precondition failures of this crate.

pub mod correlation;
pub mod covariance;
pub mod error;

pub use correlation::{CorrelationModel, DEFAULT_CORRELATION};
pub use covariance::{CovarianceMatrix, build_covariance};
pub use error::RiskError;
