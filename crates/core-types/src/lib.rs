//! # Ballast Core Types
//!
//! Layer 0 of the workspace: the plain data every other crate speaks.
//! No calculation lives here beyond input validation.

pub mod catalog;
pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use catalog::builtin_catalog;
pub use enums::{Mode, RiskLevel};
pub use error::CoreError;
pub use structs::{Instrument, InstrumentCatalog, Selection};
