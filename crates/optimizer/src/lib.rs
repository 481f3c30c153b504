//! # Ballast Optimizer
//!
//! Preference-tunable mean-variance weighting for a handful of instruments.
//!
//! ## Architectural Principles
//!
//! - **Pure Calculation:** no I/O and no shared state. Identical inputs
//!   always give identical weights.
//! - **Heuristic, not a QP solver:** pairs are solved in closed form, larger
//!   selections by a short projected gradient search. The result is a
//!   normalized, floor-respecting weight vector, not a proven optimum.
//!
//! ## Public API
//!
//! - `normalize_preferences` / `InvestorProfile`: raw labels to a `PreferenceVector`.
//! - `optimize` / `optimize_with_diagnostics`: weights for a selection.
//! - `Objective`: the function being minimized.
//! - `OptimizerError`: precondition failures.

pub mod error;
pub mod objective;
pub mod preferences;
pub mod solver;

pub use error::OptimizerError;
pub use objective::Objective;
pub use preferences::{
    Diversification, InvestorProfile, PreferenceVector, ReturnFocus, RiskTolerance, normalize_preferences,
};
pub use solver::{OptimizationOutcome, optimize, optimize_with_diagnostics};
