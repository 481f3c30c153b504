//! Normalization of loosely-typed investor preferences.
//!
//! Preference labels arrive as free text from forms or external callers.
//! Each axis has a synonym table mapping known labels onto a canonical
//! variant. The canonical profile is then turned into the numeric
//! [`PreferenceVector`] that drives the objective function.

use core_types::Mode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

/// Lower-cases and trims a raw label.
fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether the investor leans towards safety or towards return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnFocus {
    Safety,
    #[default]
    Balanced,
    Return,
}

impl ReturnFocus {
    /// Maps a label onto a focus, defaulting to `Balanced`.
    pub fn from_label(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "safety" | "safety first" | "safe" => ReturnFocus::Safety,
            "balanced" | "balance" => ReturnFocus::Balanced,
            "return" | "return focus" | "return focused" | "growth" | "maximize returns"
            | "maximize potential returns" => ReturnFocus::Return,
            _ => ReturnFocus::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnFocus::Safety => "safety",
            ReturnFocus::Balanced => "balanced",
            ReturnFocus::Return => "return",
        }
    }

    /// Utility weight `u` placed on expected return.
    pub fn utility_weight(&self) -> Decimal {
        match self {
            ReturnFocus::Safety => dec!(0.5),
            ReturnFocus::Balanced => dec!(1.0),
            ReturnFocus::Return => dec!(2.0),
        }
    }
}

/// How much volatility the investor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskTolerance {
    /// Maps a label onto a tolerance, defaulting to `Medium`.
    pub fn from_label(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "low" | "conservative" => RiskTolerance::Low,
            "medium" | "moderate" => RiskTolerance::Medium,
            "high" | "aggressive" => RiskTolerance::High,
            _ => RiskTolerance::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "low",
            RiskTolerance::Medium => "medium",
            RiskTolerance::High => "high",
        }
    }

    /// Risk-aversion weight `gamma`; higher tolerance means a lower weight.
    pub fn risk_aversion(&self) -> Decimal {
        match self {
            RiskTolerance::Low => dec!(10.0),
            RiskTolerance::Medium => dec!(5.0),
            RiskTolerance::High => dec!(1.0),
        }
    }
}

/// Whether the investor asked for a diversified portfolio.
///
/// Labels outside the synonym table are not defaulted: the normalized text
/// is kept in `Other` and behaves like "not diversified" downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Diversification {
    #[default]
    Yes,
    No,
    #[serde(untagged)]
    Other(String),
}

impl Diversification {
    pub fn from_label(raw: &str) -> Self {
        let label = normalize_label(raw);
        match label.as_str() {
            "yes" | "y" | "high diversification" | "diversified" => Diversification::Yes,
            "no" | "n" | "focused portfolio" | "concentrated" => Diversification::No,
            _ => Diversification::Other(label),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Diversification::Yes => "yes",
            Diversification::No => "no",
            Diversification::Other(label) => label,
        }
    }

    pub fn is_requested(&self) -> bool {
        matches!(self, Diversification::Yes)
    }
}

impl fmt::Display for Diversification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical form of the four preference inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InvestorProfile {
    pub mode: Mode,
    pub return_focus: ReturnFocus,
    pub risk_tolerance: RiskTolerance,
    pub diversification: Diversification,
}

impl InvestorProfile {
    /// Normalizes four raw labels through the synonym tables.
    pub fn from_labels(mode: &str, return_safety: &str, risk_tolerance: &str, diversification: &str) -> Self {
        Self {
            mode: Mode::from_label(mode),
            return_focus: ReturnFocus::from_label(return_safety),
            risk_tolerance: RiskTolerance::from_label(risk_tolerance),
            diversification: Diversification::from_label(diversification),
        }
    }

    /// Derives the numeric preference vector.
    pub fn preference_vector(&self) -> PreferenceVector {
        let lambda_rp = if self.mode.is_balanced() && self.diversification.is_requested() {
            dec!(5.0)
        } else {
            dec!(1.0)
        };

        PreferenceVector {
            u: self.return_focus.utility_weight(),
            gamma: self.risk_tolerance.risk_aversion(),
            lambda_rp,
            diversification: self.diversification.clone(),
        }
    }
}

/// Numeric investor preferences consumed by the objective function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceVector {
    /// Utility weight on expected return.
    pub u: Decimal,
    /// Risk-aversion weight on portfolio variance.
    pub gamma: Decimal,
    /// Scale of the concentration penalty.
    pub lambda_rp: Decimal,
    pub diversification: Diversification,
}

impl PreferenceVector {
    /// The vector used when the caller supplies no preferences at all.
    pub fn default_for(mode: Mode) -> Self {
        let (gamma, lambda_rp) = match mode {
            Mode::Balanced => (dec!(2.0), dec!(5.0)),
            Mode::Return => (dec!(0.1), dec!(1.0)),
        };

        Self {
            u: dec!(1.0),
            gamma,
            lambda_rp,
            diversification: Diversification::Yes,
        }
    }

    /// True when both the concentration penalty and the weight floor apply.
    pub fn diversifies(&self, mode: Mode) -> bool {
        mode.is_balanced() && self.diversification.is_requested()
    }
}

/// Maps four raw preference labels to a [`PreferenceVector`].
///
/// Never fails: unknown labels fall back to `balanced` / `medium` /
/// `balanced`, and an unknown diversification label is passed through.
pub fn normalize_preferences(
    mode: &str,
    return_safety: &str,
    risk_tolerance: &str,
    diversification: &str,
) -> PreferenceVector {
    InvestorProfile::from_labels(mode, return_safety, risk_tolerance, diversification).preference_vector()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_focus_synonyms() {
        for label in ["safety", "Safety First", " SAFE "] {
            assert_eq!(ReturnFocus::from_label(label), ReturnFocus::Safety, "{label}");
        }
        for label in ["balanced", "Balance"] {
            assert_eq!(ReturnFocus::from_label(label), ReturnFocus::Balanced, "{label}");
        }
        for label in [
            "return",
            "Return Focus",
            "return focused",
            "growth",
            "Maximize Returns",
            "maximize potential returns",
        ] {
            assert_eq!(ReturnFocus::from_label(label), ReturnFocus::Return, "{label}");
        }
        assert_eq!(ReturnFocus::from_label("yolo"), ReturnFocus::Balanced);
    }

    #[test]
    fn risk_tolerance_synonyms() {
        assert_eq!(RiskTolerance::from_label("Conservative"), RiskTolerance::Low);
        assert_eq!(RiskTolerance::from_label("low"), RiskTolerance::Low);
        assert_eq!(RiskTolerance::from_label("moderate"), RiskTolerance::Medium);
        assert_eq!(RiskTolerance::from_label(" Aggressive"), RiskTolerance::High);
        assert_eq!(RiskTolerance::from_label("high"), RiskTolerance::High);
        assert_eq!(RiskTolerance::from_label(""), RiskTolerance::Medium);
    }

    #[test]
    fn diversification_synonyms() {
        for label in ["yes", "Y", "High Diversification", "diversified"] {
            assert_eq!(Diversification::from_label(label), Diversification::Yes, "{label}");
        }
        for label in ["no", "n", "Focused Portfolio", "concentrated"] {
            assert_eq!(Diversification::from_label(label), Diversification::No, "{label}");
        }
    }

    #[test]
    fn unknown_diversification_label_is_passed_through() {
        // Every other axis falls back to a default; this one keeps the
        // normalized text and therefore counts as "not diversified".
        let div = Diversification::from_label("  Somewhat ");
        assert_eq!(div, Diversification::Other("somewhat".to_string()));
        assert!(!div.is_requested());

        let prefs = normalize_preferences("balanced", "balanced", "medium", "Somewhat");
        assert_eq!(prefs.diversification.as_str(), "somewhat");
        assert_eq!(prefs.lambda_rp, dec!(1.0));
    }

    #[test]
    fn numeric_tables() {
        let prefs = normalize_preferences("balanced", "safety", "low", "yes");
        assert_eq!(prefs.u, dec!(0.5));
        assert_eq!(prefs.gamma, dec!(10.0));
        assert_eq!(prefs.lambda_rp, dec!(5.0));

        let prefs = normalize_preferences("return", "growth", "aggressive", "yes");
        assert_eq!(prefs.u, dec!(2.0));
        assert_eq!(prefs.gamma, dec!(1.0));
        assert_eq!(prefs.lambda_rp, dec!(1.0));

        let prefs = normalize_preferences("balanced", "balanced", "medium", "no");
        assert_eq!(prefs.u, dec!(1.0));
        assert_eq!(prefs.gamma, dec!(5.0));
        assert_eq!(prefs.lambda_rp, dec!(1.0));
    }

    #[test]
    fn unrecognized_mode_counts_as_balanced() {
        let prefs = normalize_preferences("aggressive growth", "balanced", "medium", "yes");
        assert_eq!(prefs.lambda_rp, dec!(5.0));
    }

    #[test]
    fn normalization_is_idempotent_on_canonical_labels() {
        let inputs = [
            ("Return", "Maximize Returns", "Conservative", "Y"),
            ("balanced", "safe", "moderate", "concentrated"),
            ("x", "y", "z", "diversified"),
        ];

        for (mode, rs, rt, dv) in inputs {
            let once = InvestorProfile::from_labels(mode, rs, rt, dv);
            let twice = InvestorProfile::from_labels(
                once.mode.as_str(),
                once.return_focus.as_str(),
                once.risk_tolerance.as_str(),
                once.diversification.as_str(),
            );
            assert_eq!(once, twice);
            assert_eq!(once.preference_vector(), twice.preference_vector());
        }
    }

    #[test]
    fn default_vector_depends_on_mode() {
        let balanced = PreferenceVector::default_for(Mode::Balanced);
        assert_eq!(balanced.u, dec!(1.0));
        assert_eq!(balanced.gamma, dec!(2.0));
        assert_eq!(balanced.lambda_rp, dec!(5.0));
        assert!(balanced.diversifies(Mode::Balanced));

        let ret = PreferenceVector::default_for(Mode::Return);
        assert_eq!(ret.gamma, dec!(0.1));
        assert_eq!(ret.lambda_rp, dec!(1.0));
        assert!(!ret.diversifies(Mode::Return));
    }
}
