//! # Ballast Engine
//!
//! The orchestration layer. `PortfolioRunner` takes an amount, a selection of
//! instrument names and investor preferences, and returns a complete
//! `AllocationReport`.
//!
//! ## Pipeline
//!
//! 1. Resolve each selected name against the `InstrumentCatalog`.
//! 2. Build the covariance matrix from standard deviations and correlations.
//! 3. Normalize the preferences and optimize the weights.
//! 4. Compute metrics and the one-year projection.
//! 5. Assemble one `AllocationRow` per instrument.
//!
//! Every step is synchronous and pure; the only side effect is logging.

pub mod error;
pub mod report;
pub mod runner;

pub use error::EngineError;
pub use report::{AllocationReport, AllocationRow, UNKNOWN_LABEL};
pub use runner::{PortfolioRunner, Preferences, RawPreferences};
