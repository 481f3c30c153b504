use core_types::RiskLevel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Risk and return figures for a weighted portfolio.
///
/// This struct is the output of `AnalyticsEngine::calculate` and is embedded
/// unchanged in the allocation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    /// wᵀr, annualized.
    #[serde(rename = "return")]
    pub expected_return: Decimal,
    /// sqrt(wᵀΣw), annualized.
    pub volatility: Decimal,
    /// Return over volatility. No risk-free rate is subtracted, so this is a
    /// Sharpe-like ratio rather than a textbook Sharpe ratio.
    pub sharpe_ratio: Decimal,
    pub risk_level: RiskLevel,
}

/// Single-period value projection one year out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// amount · (1 + expected return). No compounding, no confidence band.
    pub expected_value: Decimal,
    pub risk_level: RiskLevel,
}
