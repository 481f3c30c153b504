use crate::error::OptimizerError;
use crate::objective::Objective;
use crate::preferences::PreferenceVector;
use configuration::OptimizerSettings;
use core_types::Mode;
use risk::CovarianceMatrix;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Weight given to the higher-return instrument of a pair in return mode.
const RETURN_TILT: Decimal = dec!(0.8);
/// Bounds on the first weight of a balanced pair.
const PAIR_MIN_WEIGHT: Decimal = dec!(0.1);
const PAIR_MAX_WEIGHT: Decimal = dec!(0.9);
/// Below this the pair is treated as perfectly correlated.
const SINGULAR_DENOMINATOR: Decimal = dec!(0.00000001);

/// Result of an optimization run, including search diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationOutcome {
    /// Weights aligned with the input order, summing to one.
    pub weights: Vec<Decimal>,
    /// Gradient steps taken. Zero for the two-instrument closed form.
    pub iterations: usize,
    /// Norm of the last gradient estimate, if a search ran.
    pub gradient_norm: Option<Decimal>,
    /// True if the closed form was used or the gradient fell below tolerance.
    pub converged: bool,
}

/// One immutable snapshot of the gradient search.
#[derive(Debug, Clone, PartialEq)]
struct SearchState {
    weights: Vec<Decimal>,
    iteration: usize,
    gradient_norm: Option<Decimal>,
}

impl SearchState {
    fn initial(n: usize) -> Self {
        Self {
            weights: uniform_weights(n),
            iteration: 0,
            gradient_norm: None,
        }
    }

    /// Takes one projected gradient step and returns the next state.
    fn advance(&self, objective: &Objective<'_>, settings: &OptimizerSettings, min_weight: Decimal) -> Self {
        let gradient = objective.gradient(&self.weights, settings.finite_difference_step);

        let projected: Vec<Decimal> = self
            .weights
            .iter()
            .zip(&gradient)
            .map(|(&w, &g)| (w - settings.learning_rate * g).max(min_weight))
            .collect();

        Self {
            weights: renormalize(projected, min_weight),
            iteration: self.iteration + 1,
            gradient_norm: Some(euclidean_norm(&gradient)),
        }
    }

    fn has_converged(&self, tolerance: Decimal) -> bool {
        self.gradient_norm.is_some_and(|norm| norm < tolerance)
    }
}

/// Computes portfolio weights for the given returns, covariance and preferences.
///
/// Two instruments are solved in closed form. Three or more use a bounded
/// projected gradient descent. See [`optimize_with_diagnostics`] for the
/// search details.
///
/// # Errors
///
/// Fails if fewer than two instruments are given or if `returns` and
/// `covariance` disagree in size.
pub fn optimize(
    returns: &[Decimal],
    covariance: &CovarianceMatrix,
    prefs: &PreferenceVector,
    mode: Mode,
    settings: &OptimizerSettings,
) -> Result<Vec<Decimal>, OptimizerError> {
    optimize_with_diagnostics(returns, covariance, prefs, mode, settings).map(|outcome| outcome.weights)
}

/// Like [`optimize`], but also reports how the search ended.
///
/// For three or more instruments the search starts at equal weights and
/// repeats at most `settings.max_iterations` times:
///
/// 1. Estimate ∇J with a one-sided finite difference.
/// 2. Step against the gradient by `settings.learning_rate`.
/// 3. Project each weight onto the floor (`diversified_min_weight` for a
///    balanced, diversified portfolio, zero otherwise).
/// 4. Renormalize to a sum of one.
///
/// It stops early once the norm of the gradient used for the step is below
/// `settings.convergence_tolerance`. The result is deterministic but not
/// guaranteed to be the global optimum.
pub fn optimize_with_diagnostics(
    returns: &[Decimal],
    covariance: &CovarianceMatrix,
    prefs: &PreferenceVector,
    mode: Mode,
    settings: &OptimizerSettings,
) -> Result<OptimizationOutcome, OptimizerError> {
    let n = returns.len();
    if n < 2 {
        return Err(OptimizerError::TooFewInstruments(n));
    }
    if covariance.dim() != n {
        return Err(OptimizerError::DimensionMismatch {
            returns: n,
            covariance: covariance.dim(),
        });
    }

    if n == 2 {
        return Ok(OptimizationOutcome {
            weights: optimize_pair(returns, covariance, mode).to_vec(),
            iterations: 0,
            gradient_norm: None,
            converged: true,
        });
    }

    let min_weight = if prefs.diversifies(mode) {
        settings.diversified_min_weight
    } else {
        Decimal::ZERO
    };
    let objective = Objective::new(returns, covariance, prefs, mode);

    let mut state = SearchState::initial(n);
    while state.iteration < settings.max_iterations {
        state = state.advance(&objective, settings, min_weight);
        if state.has_converged(settings.convergence_tolerance) {
            tracing::debug!(
                iterations = state.iteration,
                gradient_norm = %state.gradient_norm.unwrap_or_default(),
                "Optimizer converged"
            );
            break;
        }
    }

    let converged = state.has_converged(settings.convergence_tolerance);
    if !converged {
        tracing::debug!(
            iterations = state.iteration,
            "Optimizer stopped at the iteration cap without converging"
        );
    }

    Ok(OptimizationOutcome {
        weights: state.weights,
        iterations: state.iteration,
        gradient_norm: state.gradient_norm,
        converged,
    })
}

/// Closed-form weights for exactly two instruments.
fn optimize_pair(returns: &[Decimal], covariance: &CovarianceMatrix, mode: Mode) -> [Decimal; 2] {
    if mode == Mode::Return {
        // Tilt towards the higher-return instrument; ties favor the second.
        return if returns[0] > returns[1] {
            [RETURN_TILT, Decimal::ONE - RETURN_TILT]
        } else {
            [Decimal::ONE - RETURN_TILT, RETURN_TILT]
        };
    }

    // Two-asset minimum variance: w₁ = (σ₂² − σ₁₂) / (σ₁² + σ₂² − 2σ₁₂)
    let var1 = covariance.get(0, 0);
    let var2 = covariance.get(1, 1);
    let cov12 = covariance.get(0, 1);

    let denominator = var1 + var2 - dec!(2) * cov12;
    if denominator.abs() < SINGULAR_DENOMINATOR {
        return [dec!(0.5), dec!(0.5)];
    }

    let w1 = ((var2 - cov12) / denominator).clamp(PAIR_MIN_WEIGHT, PAIR_MAX_WEIGHT);
    [w1, Decimal::ONE - w1]
}

fn uniform_weights(n: usize) -> Vec<Decimal> {
    vec![Decimal::ONE / Decimal::from(n); n]
}

fn euclidean_norm(values: &[Decimal]) -> Decimal {
    values
        .iter()
        .map(|&v| v * v)
        .sum::<Decimal>()
        .sqrt()
        .unwrap_or(Decimal::ZERO)
}

/// Scales projected weights back to a sum of one without breaking the floor.
///
/// A plain division is used whenever it keeps every weight at or above
/// `floor`. Otherwise the offending weights are pinned at the floor and the
/// remaining mass is shared pro rata among the others.
fn renormalize(projected: Vec<Decimal>, floor: Decimal) -> Vec<Decimal> {
    let total: Decimal = projected.iter().sum();
    if total <= Decimal::ZERO {
        return uniform_weights(projected.len());
    }

    let scaled: Vec<Decimal> = projected.iter().map(|&w| w / total).collect();
    if scaled.iter().all(|&w| w >= floor) {
        return scaled;
    }

    let mut pinned: Vec<bool> = scaled.iter().map(|&w| w < floor).collect();
    loop {
        let pinned_mass = floor * Decimal::from(pinned.iter().filter(|&&p| p).count());
        let free_mass: Decimal = scaled
            .iter()
            .zip(&pinned)
            .filter(|&(_, &p)| !p)
            .map(|(&w, _)| w)
            .sum();
        if free_mass <= Decimal::ZERO {
            return uniform_weights(scaled.len());
        }
        let factor = (Decimal::ONE - pinned_mass) / free_mass;

        let mut newly_pinned = false;
        for (w, p) in scaled.iter().zip(pinned.iter_mut()) {
            if !*p && *w * factor < floor {
                *p = true;
                newly_pinned = true;
            }
        }

        if !newly_pinned {
            return scaled
                .iter()
                .zip(&pinned)
                .map(|(&w, &p)| if p { floor } else { w * factor })
                .collect();
        }
    }
}
