use crate::error::EngineError;
use crate::report::{AllocationReport, AllocationRow, UNKNOWN_LABEL};
use analytics::AnalyticsEngine;
use configuration::{OptimizerSettings, Settings};
use core_types::{InstrumentCatalog, Mode, Selection};
use optimizer::{PreferenceVector, normalize_preferences};
use risk::{CorrelationModel, build_covariance};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Free-text preference labels as they arrive from a form or CLI.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPreferences {
    pub mode: String,
    pub return_safety: String,
    pub risk_tolerance: String,
    /// `None` is read as "yes".
    pub diversification: Option<String>,
}

impl RawPreferences {
    pub fn new(
        mode: impl Into<String>,
        return_safety: impl Into<String>,
        risk_tolerance: impl Into<String>,
        diversification: Option<String>,
    ) -> Self {
        Self {
            mode: mode.into(),
            return_safety: return_safety.into(),
            risk_tolerance: risk_tolerance.into(),
            diversification,
        }
    }

    pub fn normalize(&self) -> PreferenceVector {
        normalize_preferences(
            &self.mode,
            &self.return_safety,
            &self.risk_tolerance,
            self.diversification.as_deref().unwrap_or("yes"),
        )
    }
}

/// The preference input to a run.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Preferences {
    /// Labels that still need normalizing.
    Raw(RawPreferences),
    /// An already-normalized vector, used as is.
    Normalized(PreferenceVector),
    /// No preferences supplied; a mode-dependent default vector is used.
    #[default]
    Default,
}

impl Preferences {
    pub fn resolve(&self, mode: Mode) -> PreferenceVector {
        match self {
            Preferences::Raw(raw) => raw.normalize(),
            Preferences::Normalized(vector) => vector.clone(),
            Preferences::Default => PreferenceVector::default_for(mode),
        }
    }
}

/// Runs the whole pipeline for one request: catalog lookup, covariance,
/// optimization, metrics and report assembly.
///
/// A runner holds only immutable configuration, so it can be shared across
/// threads and reused for any number of runs.
#[derive(Debug, Clone, Default)]
pub struct PortfolioRunner {
    optimizer: OptimizerSettings,
    correlations: CorrelationModel,
    analytics: AnalyticsEngine,
}

impl PortfolioRunner {
    pub fn new(optimizer: OptimizerSettings, correlations: CorrelationModel) -> Self {
        Self {
            optimizer,
            correlations,
            analytics: AnalyticsEngine::new(),
        }
    }

    /// Builds a runner with the built-in correlation table and the configured constants.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.optimizer.clone(),
            CorrelationModel::from_settings(&settings.risk),
        )
    }

    /// Produces an allocation report for `amount` spread over `selection`.
    ///
    /// Names missing from `catalog` are kept with a zero return, zero
    /// standard deviation and an "Unknown" risk level and category.
    pub fn run(
        &self,
        amount: Decimal,
        selection: &Selection,
        preferences: &Preferences,
        mode: Mode,
        catalog: &InstrumentCatalog,
    ) -> Result<AllocationReport, EngineError> {
        tracing::info!(
            %amount,
            instruments = selection.len(),
            %mode,
            "Starting portfolio run."
        );

        let mut returns = Vec::with_capacity(selection.len());
        let mut stds = Vec::with_capacity(selection.len());
        for name in selection.iter() {
            match catalog.get(name) {
                Some(instrument) => {
                    returns.push(instrument.expected_return);
                    stds.push(instrument.std_dev);
                }
                None => {
                    tracing::warn!(instrument = name, "Instrument not in catalog; using zero return and risk.");
                    returns.push(Decimal::ZERO);
                    stds.push(Decimal::ZERO);
                }
            }
        }

        let covariance = build_covariance(selection.names(), &stds, &self.correlations)?;
        tracing::debug!(covariance = ?covariance.rows(), "Covariance matrix built.");

        let prefs = preferences.resolve(mode);
        let weights = optimizer::optimize(&returns, &covariance, &prefs, mode, &self.optimizer)?;
        tracing::debug!(?weights, "Weights computed.");

        let metrics = self.analytics.calculate(&weights, &returns, &covariance)?;
        let projection = self
            .analytics
            .project(amount, metrics.expected_return, metrics.volatility);

        let allocations = selection
            .iter()
            .zip(&weights)
            .map(|(name, &weight)| {
                let instrument = catalog.get(name);
                AllocationRow {
                    name: name.to_string(),
                    weight,
                    amount: weight * amount,
                    percentage: weight * dec!(100),
                    risk_level: instrument
                        .map(|i| i.risk_level.to_string())
                        .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
                    category: instrument
                        .map(|i| i.category.clone())
                        .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
                }
            })
            .collect();

        tracing::info!(
            expected_return = %metrics.expected_return,
            volatility = %metrics.volatility,
            risk_level = %metrics.risk_level,
            "Portfolio run finished."
        );

        Ok(AllocationReport {
            allocations,
            metrics,
            projection,
            total_amount: amount,
        })
    }
}
