use crate::error::RiskError;
use configuration::RiskSettings;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// Correlation assumed between two instruments that have no table entry.
///
/// Most asset classes move somewhat together, so the prior is mildly positive.
pub const DEFAULT_CORRELATION: Decimal = dec!(0.2);

/// Resolves the correlation coefficient between any two instrument names.
///
/// Each pair is stored once, keyed first by one name and then by the other;
/// lookups check both orderings. Any pair without an entry resolves to the
/// default prior, so `correlation` is a total function over names.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationModel {
    pairs: HashMap<String, HashMap<String, Decimal>>,
    default_correlation: Decimal,
}

impl CorrelationModel {
    /// Creates an empty model where every cross pair resolves to `default_correlation`.
    pub fn new(default_correlation: Decimal) -> Self {
        Self {
            pairs: HashMap::new(),
            default_correlation,
        }
    }

    /// The reference table for the built-in catalog.
    pub fn builtin(default_correlation: Decimal) -> Self {
        let table = [
            ("Stocks", "Gold", dec!(-0.1)),
            ("Stocks", "Government Bonds", dec!(-0.2)),
            ("Stocks", "Midcap Mutual Fund", dec!(0.8)),
            ("Stocks", "Real Estate Trust", dec!(0.6)),
            ("Stocks", "International ETF", dec!(0.7)),
            ("Gold", "Government Bonds", dec!(0.1)),
            ("Gold", "Midcap Mutual Fund", dec!(-0.05)),
            ("Government Bonds", "Midcap Mutual Fund", dec!(-0.1)),
            ("Midcap Mutual Fund", "International ETF", dec!(0.75)),
            ("Gold", "International ETF", dec!(0.0)),
        ];

        let mut model = Self::new(default_correlation);
        for (a, b, rho) in table {
            model.insert(a, b, rho);
        }
        model
    }

    /// Builds the reference table using the configured prior.
    pub fn from_settings(settings: &RiskSettings) -> Self {
        Self::builtin(settings.default_correlation)
    }

    /// Adds or replaces a pair. Order of the names does not matter.
    pub fn with_pair(mut self, a: &str, b: &str, correlation: Decimal) -> Result<Self, RiskError> {
        if a == b {
            return Err(RiskError::SelfCorrelation(a.to_string()));
        }
        if correlation < Decimal::NEGATIVE_ONE || correlation > Decimal::ONE {
            return Err(RiskError::InvalidCorrelation(a.to_string(), b.to_string(), correlation));
        }

        self.insert(a, b, correlation);
        Ok(self)
    }

    pub fn default_correlation(&self) -> Decimal {
        self.default_correlation
    }

    /// Returns the correlation between `a` and `b`.
    pub fn correlation(&self, a: &str, b: &str) -> Decimal {
        if a == b {
            return Decimal::ONE;
        }

        self.lookup(a, b)
            .or_else(|| self.lookup(b, a))
            .unwrap_or(self.default_correlation)
    }

    fn lookup(&self, a: &str, b: &str) -> Option<Decimal> {
        self.pairs.get(a)?.get(b).copied()
    }

    fn insert(&mut self, a: &str, b: &str, correlation: Decimal) {
        // Drop a previously stored reverse entry so only one exists per pair.
        if let Some(reverse) = self.pairs.get_mut(b) {
            reverse.remove(a);
        }
        self.pairs
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), correlation);
    }
}

impl Default for CorrelationModel {
    fn default() -> Self {
        Self::builtin(DEFAULT_CORRELATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_correlation_is_one() {
        let model = CorrelationModel::default();
        assert_eq!(model.correlation("Stocks", "Stocks"), Decimal::ONE);
        assert_eq!(model.correlation("Unlisted", "Unlisted"), Decimal::ONE);
    }

    #[test]
    fn lookup_is_order_independent() {
        let model = CorrelationModel::default();
        assert_eq!(model.correlation("Stocks", "Government Bonds"), dec!(-0.2));
        assert_eq!(model.correlation("Government Bonds", "Stocks"), dec!(-0.2));
        assert_eq!(model.correlation("International ETF", "Midcap Mutual Fund"), dec!(0.75));
    }

    #[test]
    fn unknown_pair_uses_prior() {
        let model = CorrelationModel::default();
        assert_eq!(model.correlation("Stocks", "Debt Fund"), dec!(0.2));
        assert_eq!(model.correlation("Foo", "Bar"), dec!(0.2));

        let custom = CorrelationModel::new(dec!(0.35));
        assert_eq!(custom.correlation("Stocks", "Gold"), dec!(0.35));
    }

    #[test]
    fn explicit_zero_is_not_treated_as_missing() {
        let model = CorrelationModel::default();
        assert_eq!(model.correlation("Gold", "International ETF"), Decimal::ZERO);
        assert_eq!(model.correlation("International ETF", "Gold"), Decimal::ZERO);
    }

    #[test]
    fn with_pair_replaces_reverse_entry() {
        let model = CorrelationModel::default()
            .with_pair("Government Bonds", "Stocks", dec!(-0.4))
            .unwrap();
        assert_eq!(model.correlation("Stocks", "Government Bonds"), dec!(-0.4));
        assert_eq!(model.correlation("Government Bonds", "Stocks"), dec!(-0.4));
    }

    #[test]
    fn with_pair_overrides_builtin_in_either_order() {
        let model = CorrelationModel::default()
            .with_pair("Stocks", "Gold", dec!(0.3))
            .unwrap()
            .with_pair("Gold", "Stocks", dec!(0.4))
            .unwrap()
            .with_pair("Stocks", "Gold", dec!(0.5))
            .unwrap();
        assert_eq!(model.correlation("Stocks", "Gold"), dec!(0.5));
        assert_eq!(model.correlation("Gold", "Stocks"), dec!(0.5));
        // Other entries sharing a name are untouched.
        assert_eq!(model.correlation("Gold", "Government Bonds"), dec!(0.1));
        assert_eq!(model.correlation("Stocks", "International ETF"), dec!(0.7));
    }

    #[test]
    fn builtin_table_has_ten_pairs() {
        let model = CorrelationModel::default();
        let stored: usize = model.pairs.values().map(HashMap::len).sum();
        assert_eq!(stored, 10);
    }

    #[test]
    fn with_pair_validates_input() {
        let model = CorrelationModel::new(DEFAULT_CORRELATION);
        assert_eq!(
            model.clone().with_pair("A", "B", dec!(1.01)).unwrap_err(),
            RiskError::InvalidCorrelation("A".to_string(), "B".to_string(), dec!(1.01))
        );
        assert_eq!(
            model.with_pair("A", "A", dec!(0.5)).unwrap_err(),
            RiskError::SelfCorrelation("A".to_string())
        );
    }

    #[test]
    fn from_settings_uses_configured_prior() {
        let settings = RiskSettings {
            default_correlation: dec!(0.1),
        };
        let model = CorrelationModel::from_settings(&settings);
        assert_eq!(model.default_correlation(), dec!(0.1));
        assert_eq!(model.correlation("FD", "Gold"), dec!(0.1));
        assert_eq!(model.correlation("Stocks", "Gold"), dec!(-0.1));
    }
}
