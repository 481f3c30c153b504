use crate::enums::RiskLevel;
use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable reference data for a single investable instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Unique key within a catalog (e.g. "Government Bonds").
    pub name: String,
    /// Annualized expected return as a fraction (0.13 = 13%).
    pub expected_return: Decimal,
    /// Annualized standard deviation of returns.
    pub std_dev: Decimal,
    /// Subjective riskiness score in [0, 1].
    pub risk_score: Decimal,
    pub risk_level: RiskLevel,
    pub category: String,
}

impl Instrument {
    pub fn new(
        name: impl Into<String>,
        expected_return: Decimal,
        std_dev: Decimal,
        risk_score: Decimal,
        risk_level: RiskLevel,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            expected_return,
            std_dev,
            risk_score,
            risk_level,
            category: category.into(),
        }
    }
}

/// A read-only lookup of instruments by name.
///
/// The engine never mutates a catalog; it only resolves the names in a
/// `Selection` against it. Names are kept sorted so listings are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstrumentCatalog {
    instruments: BTreeMap<String, Instrument>,
}

impl InstrumentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an instrument, replacing any previous entry with the same name.
    pub fn with_instrument(mut self, instrument: Instrument) -> Self {
        self.instruments.insert(instrument.name.clone(), instrument);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Instrument> {
        self.instruments.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.instruments.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Iterates over the instruments in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.values()
    }
}

impl FromIterator<Instrument> for InstrumentCatalog {
    fn from_iter<I: IntoIterator<Item = Instrument>>(iter: I) -> Self {
        Self {
            instruments: iter
                .into_iter()
                .map(|instrument| (instrument.name.clone(), instrument))
                .collect(),
        }
    }
}

/// An ordered list of instrument names to build a portfolio from.
///
/// The order fixes the index of each instrument in every vector and matrix
/// derived from the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 5;

    /// Creates a selection, failing if it holds fewer than two or more than
    /// five names.
    pub fn new<I, S>(names: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&names.len()) {
            return Err(CoreError::InvalidSelection {
                min: Self::MIN_LEN,
                max: Self::MAX_LEN,
                actual: names.len(),
            });
        }
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
