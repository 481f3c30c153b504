//! The reference instrument universe shipped with the engine.

use crate::enums::RiskLevel;
use crate::structs::{Instrument, InstrumentCatalog};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Returns the built-in catalog of 32 instruments.
///
/// Columns are name, expected return, standard deviation, risk score,
/// risk level and category.
pub fn builtin_catalog() -> InstrumentCatalog {
    let rows: [(&str, Decimal, Decimal, Decimal, RiskLevel, &str); 32] = [
        ("Stocks", dec!(0.13), dec!(0.18), dec!(0.80), RiskLevel::High, "Equity"),
        ("Gold", dec!(0.11), dec!(0.15), dec!(0.30), RiskLevel::MediumHigh, "Commodities"),
        ("Government Bonds", dec!(0.10), dec!(0.05), dec!(0.20), RiskLevel::LowMedium, "Government"),
        ("Midcap Mutual Fund", dec!(0.10), dec!(0.18), dec!(0.70), RiskLevel::High, "Equity"),
        ("Real Estate Trust", dec!(0.09), dec!(0.17), dec!(0.60), RiskLevel::High, "Real Estate"),
        ("International ETF", dec!(0.11), dec!(0.19), dec!(0.65), RiskLevel::High, "Equity"),
        ("FD", dec!(0.055), dec!(0.005), dec!(0.05), RiskLevel::Low, "Cash & Cash-like"),
        ("Debt Fund", dec!(0.065), dec!(0.06), dec!(0.25), RiskLevel::LowMedium, "Debt/Fixed Income"),
        ("IT Sector ETF", dec!(0.11), dec!(0.22), dec!(0.75), RiskLevel::High, "Equity"),
        ("Pharma ETF", dec!(0.09), dec!(0.17), dec!(0.60), RiskLevel::High, "Equity"),
        ("PSU Bank ETF", dec!(0.085), dec!(0.19), dec!(0.65), RiskLevel::High, "Equity"),
        ("Large Cap Mutual Fund", dec!(0.095), dec!(0.16), dec!(0.55), RiskLevel::High, "Equity"),
        ("Liquid Fund", dec!(0.005), dec!(0.01), dec!(0.01), RiskLevel::Low, "Cash & Cash-like"),
        ("Arbitrage Fund", dec!(0.065), dec!(0.03), dec!(0.15), RiskLevel::Low, "Debt/Fixed Income"),
        ("Short-Term Debt Fund", dec!(0.06), dec!(0.04), dec!(0.18), RiskLevel::LowMedium, "Debt/Fixed Income"),
        ("Fixed Maturity Plan", dec!(0.057), dec!(0.015), dec!(0.12), RiskLevel::Low, "Debt/Fixed Income"),
        ("Bank Fixed Deposit", dec!(0.055), dec!(0.005), dec!(0.05), RiskLevel::Low, "Cash & Cash-like"),
        ("Treasury Bills", dec!(0.045), dec!(0.002), dec!(0.03), RiskLevel::Low, "Government"),
        ("Sovereign Gold Bonds", dec!(0.07), dec!(0.05), dec!(0.20), RiskLevel::LowMedium, "Commodities"),
        ("Index Fund", dec!(0.085), dec!(0.14), dec!(0.50), RiskLevel::MediumHigh, "Equity"),
        ("Tax-Free Bonds", dec!(0.065), dec!(0.035), dec!(0.18), RiskLevel::LowMedium, "Debt/Fixed Income"),
        ("Senior Citizens Savings Scheme", dec!(0.075), dec!(0.002), dec!(0.05), RiskLevel::Low, "Government"),
        ("Balanced Advantage Fund", dec!(0.085), dec!(0.10), dec!(0.35), RiskLevel::Medium, "Hybrid"),
        ("Target Maturity Fund", dec!(0.067), dec!(0.04), dec!(0.20), RiskLevel::LowMedium, "Debt/Fixed Income"),
        ("Corporate Bond Fund", dec!(0.075), dec!(0.06), dec!(0.30), RiskLevel::Medium, "Debt/Fixed Income"),
        ("Gold Savings Fund", dec!(0.065), dec!(0.05), dec!(0.25), RiskLevel::LowMedium, "Commodities"),
        ("National Savings Certificate", dec!(0.07), dec!(0.01), dec!(0.10), RiskLevel::Low, "Government"),
        ("Post Office Monthly Income Scheme", dec!(0.068), dec!(0.008), dec!(0.08), RiskLevel::Low, "Government"),
        ("Ultra Short Duration Fund", dec!(0.058), dec!(0.015), dec!(0.12), RiskLevel::Low, "Debt/Fixed Income"),
        ("Capital Protection Oriented Fund", dec!(0.06), dec!(0.01), dec!(0.10), RiskLevel::Low, "Debt/Fixed Income"),
        ("Floating Rate Fund", dec!(0.068), dec!(0.045), dec!(0.22), RiskLevel::LowMedium, "Debt/Fixed Income"),
        ("Infrastructure Bond", dec!(0.075), dec!(0.05), dec!(0.28), RiskLevel::Medium, "Debt/Fixed Income"),
    ];

    rows.into_iter()
        .map(|(name, expected_return, std_dev, risk_score, risk_level, category)| {
            Instrument::new(name, expected_return, std_dev, risk_score, risk_level, category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_every_instrument() {
        assert_eq!(builtin_catalog().len(), 32);
    }

    #[test]
    fn builtin_catalog_values_are_sane() {
        for instrument in builtin_catalog().iter() {
            assert!(instrument.std_dev > Decimal::ZERO, "{}", instrument.name);
            assert!(instrument.expected_return > Decimal::ZERO, "{}", instrument.name);
            assert!(instrument.risk_score >= Decimal::ZERO && instrument.risk_score <= Decimal::ONE);
        }
    }

    #[test]
    fn builtin_stocks_entry() {
        let catalog = builtin_catalog();
        let stocks = catalog.get("Stocks").unwrap();
        assert_eq!(stocks.expected_return, dec!(0.13));
        assert_eq!(stocks.std_dev, dec!(0.18));
        assert_eq!(stocks.risk_level, RiskLevel::High);
        assert_eq!(stocks.category, "Equity");
    }
}
