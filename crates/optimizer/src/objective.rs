use crate::preferences::PreferenceVector;
use core_types::Mode;
use risk::CovarianceMatrix;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Base coefficient of the Herfindahl concentration penalty.
const CONCENTRATION_COEFFICIENT: Decimal = dec!(0.05);

/// The preference-weighted mean-variance objective (lower is better).
///
/// ```text
/// J(w) = -u·(wᵀr) + γ·(wᵀΣw) + 0.05·(λ/5)·Σwᵢ²
/// ```
///
/// The last term only applies to balanced, diversified portfolios.
#[derive(Debug, Clone, Copy)]
pub struct Objective<'a> {
    returns: &'a [Decimal],
    covariance: &'a CovarianceMatrix,
    u: Decimal,
    gamma: Decimal,
    penalty_scale: Option<Decimal>,
}

impl<'a> Objective<'a> {
    pub fn new(
        returns: &'a [Decimal],
        covariance: &'a CovarianceMatrix,
        prefs: &PreferenceVector,
        mode: Mode,
    ) -> Self {
        let penalty_scale = prefs
            .diversifies(mode)
            .then(|| CONCENTRATION_COEFFICIENT * (prefs.lambda_rp / dec!(5.0)));

        Self {
            returns,
            covariance,
            u: prefs.u,
            gamma: prefs.gamma,
            penalty_scale,
        }
    }

    /// Evaluates J at `weights`.
    pub fn value(&self, weights: &[Decimal]) -> Decimal {
        let mean_return: Decimal = weights.iter().zip(self.returns).map(|(&w, &r)| w * r).sum();
        let variance = self.covariance.quadratic_form(weights);
        let penalty = match self.penalty_scale {
            Some(scale) => scale * weights.iter().map(|&w| w * w).sum::<Decimal>(),
            None => Decimal::ZERO,
        };

        -self.u * mean_return + self.gamma * variance + penalty
    }

    /// One-sided finite-difference estimate of ∇J at `weights`.
    pub fn gradient(&self, weights: &[Decimal], step: Decimal) -> Vec<Decimal> {
        let current = self.value(weights);

        (0..weights.len())
            .map(|i| {
                let mut bumped = weights.to_vec();
                bumped[i] += step;
                (self.value(&bumped) - current) / step
            })
            .collect()
    }
}
