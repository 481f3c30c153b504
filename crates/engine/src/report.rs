use analytics::{PortfolioMetrics, Projection};
use rust_decimal::Decimal;
use serde::Serialize;

/// Label used for the risk level and category of an instrument that is not
/// in the catalog.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// One instrument's share of the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRow {
    pub name: String,
    /// Fraction of the portfolio in [0, 1].
    pub weight: Decimal,
    /// `weight · total_amount`.
    pub amount: Decimal,
    /// `weight · 100`.
    pub percentage: Decimal,
    pub risk_level: String,
    pub category: String,
}

/// The complete result of a single portfolio run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationReport {
    /// One row per selected instrument, in selection order.
    pub allocations: Vec<AllocationRow>,
    pub metrics: PortfolioMetrics,
    pub projection: Projection,
    pub total_amount: Decimal,
}

impl AllocationReport {
    /// Sum of all row weights. One, up to decimal rounding.
    pub fn total_weight(&self) -> Decimal {
        self.allocations.iter().map(|row| row.weight).sum()
    }

    pub fn row(&self, name: &str) -> Option<&AllocationRow> {
        self.allocations.iter().find(|row| row.name == name)
    }
}
