use crate::error::AnalyticsError;
use crate::report::{PortfolioMetrics, Projection};
use core_types::RiskLevel;
use risk::CovarianceMatrix;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

/// Volatility below this is labelled `Low`.
pub const LOW_VOLATILITY_LIMIT: Decimal = dec!(0.08);
/// Volatility below this (and not `Low`) is labelled `Medium`.
pub const MEDIUM_VOLATILITY_LIMIT: Decimal = dec!(0.15);

/// A stateless calculator for deriving portfolio metrics from weights.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating portfolio metrics.
    ///
    /// # Arguments
    ///
    /// * `weights` - Portfolio weights in selection order.
    /// * `returns` - Expected return of each instrument, same order.
    /// * `covariance` - Covariance matrix, same order.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `PortfolioMetrics` or an `AnalyticsError`
    /// if the three inputs disagree in size.
    pub fn calculate(
        &self,
        weights: &[Decimal],
        returns: &[Decimal],
        covariance: &CovarianceMatrix,
    ) -> Result<PortfolioMetrics, AnalyticsError> {
        if weights.len() != returns.len() || weights.len() != covariance.dim() {
            return Err(AnalyticsError::DimensionMismatch {
                weights: weights.len(),
                returns: returns.len(),
                covariance: covariance.dim(),
            });
        }

        let expected_return: Decimal = weights.iter().zip(returns).map(|(&w, &r)| w * r).sum();

        // Negative variance can only come from rounding, so clamp before the root.
        let variance = covariance.quadratic_form(weights).max(Decimal::ZERO);
        // sqrt and division return full 28-digit scale; trailing zeros are dropped.
        let volatility = variance.sqrt().unwrap_or(Decimal::ZERO).normalize();

        let sharpe_ratio = if volatility > Decimal::ZERO {
            (expected_return / volatility).normalize()
        } else {
            Decimal::ZERO
        };

        Ok(PortfolioMetrics {
            expected_return: expected_return.normalize(),
            volatility,
            sharpe_ratio,
            risk_level: risk_level_for_volatility(volatility),
        })
    }

    /// Projects the value of `amount` one year out.
    pub fn project(&self, amount: Decimal, expected_return: Decimal, volatility: Decimal) -> Projection {
        Projection {
            expected_value: amount * (Decimal::ONE + expected_return),
            risk_level: risk_level_for_volatility(volatility),
        }
    }
}

/// Buckets an annualized volatility into `Low`, `Medium` or `High`.
pub fn risk_level_for_volatility(volatility: Decimal) -> RiskLevel {
    if volatility < LOW_VOLATILITY_LIMIT {
        RiskLevel::Low
    } else if volatility < MEDIUM_VOLATILITY_LIMIT {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}
