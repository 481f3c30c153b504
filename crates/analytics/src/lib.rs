//! # Ballast Analytics
//!
//! Derives portfolio-level return, volatility, a Sharpe-like ratio and a
//! one-year projection from a weight vector.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** no knowledge of catalogs, preferences or the optimizer.
//!   It only needs weights, returns and a covariance matrix.
//! - **Stateless Calculation:** `AnalyticsEngine` holds no data, so one
//!   instance can be shared freely.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: metrics and projection.
//! - `PortfolioMetrics`, `Projection`: the result structs.
//! - `risk_level_for_volatility`: the shared Low / Medium / High thresholds.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AnalyticsEngine, LOW_VOLATILITY_LIMIT, MEDIUM_VOLATILITY_LIMIT, risk_level_for_volatility};
pub use error::AnalyticsError;
pub use report::{PortfolioMetrics, Projection};
