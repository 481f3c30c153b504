use core_types::{CoreError, Mode, RiskLevel, Selection, builtin_catalog};
use engine::{EngineError, PortfolioRunner, Preferences, RawPreferences, UNKNOWN_LABEL};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const EPSILON: Decimal = dec!(0.0000000001);

fn balanced_prefs() -> Preferences {
    Preferences::Raw(RawPreferences::new(
        "balanced",
        "balanced",
        "medium",
        Some("yes".to_string()),
    ))
}

fn close(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn stocks_and_bonds_use_the_minimum_variance_split() {
    let runner = PortfolioRunner::default();
    let selection = Selection::new(["Stocks", "Government Bonds"]).unwrap();

    let report = runner
        .run(dec!(100000), &selection, &balanced_prefs(), Mode::Balanced, &builtin_catalog())
        .unwrap();

    // (0.0025 + 0.0018) / (0.0324 + 0.0025 + 0.0036)
    let expected_w1 = dec!(0.0043) / dec!(0.0385);
    let stocks = report.row("Stocks").unwrap();
    let bonds = report.row("Government Bonds").unwrap();
    assert!(close(stocks.weight, expected_w1));
    assert!(close(bonds.weight, Decimal::ONE - expected_w1));

    let amounts: Decimal = report.allocations.iter().map(|row| row.amount).sum();
    assert!((amounts - dec!(100000)).abs() < dec!(0.000001));
    assert!(close(stocks.percentage, stocks.weight * dec!(100)));

    assert_eq!(stocks.risk_level, "High");
    assert_eq!(bonds.category, "Government");

    assert!((report.metrics.expected_return - dec!(0.1033506494)).abs() < dec!(0.000001));
    assert!((report.metrics.volatility - dec!(0.0449415204)).abs() < dec!(0.000001));
    assert_eq!(report.metrics.risk_level, RiskLevel::Low);
    assert_eq!(report.total_amount, dec!(100000));
    assert!(
        (report.projection.expected_value - dec!(100000) * (Decimal::ONE + report.metrics.expected_return)).abs()
            < EPSILON
    );
}

#[test]
fn return_mode_pair_tilts_towards_higher_return() {
    let runner = PortfolioRunner::default();
    let selection = Selection::new(["Government Bonds", "Stocks"]).unwrap();

    let report = runner
        .run(dec!(50000), &selection, &Preferences::Default, Mode::Return, &builtin_catalog())
        .unwrap();

    assert_eq!(report.allocations[0].weight, dec!(0.2));
    assert_eq!(report.allocations[1].weight, dec!(0.8));
    assert_eq!(report.allocations[0].amount, dec!(10000));
    assert_eq!(report.allocations[1].amount, dec!(40000));
    assert_eq!(report.allocations[1].percentage, dec!(80));
}

#[test]
fn missing_instrument_is_reported_as_unknown() {
    let runner = PortfolioRunner::default();
    let selection = Selection::new(["Stocks", "Moon Token"]).unwrap();

    let report = runner
        .run(dec!(1000), &selection, &balanced_prefs(), Mode::Balanced, &builtin_catalog())
        .unwrap();

    let missing = report.row("Moon Token").unwrap();
    assert_eq!(missing.risk_level, UNKNOWN_LABEL);
    assert_eq!(missing.category, UNKNOWN_LABEL);
    // A riskless, returnless leg pushes the stock weight to the lower clamp.
    assert_eq!(report.row("Stocks").unwrap().weight, dec!(0.1));
    assert_eq!(missing.weight, dec!(0.9));
    assert!(close(report.metrics.expected_return, dec!(0.013)));
}

#[test]
fn selection_length_is_validated() {
    let too_few = Selection::new(["Stocks"]).unwrap_err();
    assert_eq!(too_few, CoreError::InvalidSelection { min: 2, max: 5, actual: 1 });

    let too_many = Selection::new(["Stocks", "Gold", "FD", "Debt Fund", "Pharma ETF", "Liquid Fund"]).unwrap_err();
    assert!(matches!(EngineError::from(too_many), EngineError::Core(CoreError::InvalidSelection { actual: 6, .. })));
}

#[test]
fn larger_selections_respect_weight_floor_and_sum_to_one() {
    let runner = PortfolioRunner::default();
    let selection = Selection::new([
        "Stocks",
        "Gold",
        "Government Bonds",
        "Debt Fund",
        "Liquid Fund",
    ])
    .unwrap();

    let report = runner
        .run(dec!(250000), &selection, &balanced_prefs(), Mode::Balanced, &builtin_catalog())
        .unwrap();

    assert_eq!(report.allocations.len(), 5);
    assert!(close(report.total_weight(), Decimal::ONE));
    for row in &report.allocations {
        assert!(row.weight >= dec!(0.02) - EPSILON, "{} below floor: {}", row.name, row.weight);
    }
}

#[test]
fn identical_inputs_give_identical_reports() {
    let runner = PortfolioRunner::default();
    let selection = Selection::new(["Stocks", "Government Bonds", "Gold", "Debt Fund"]).unwrap();
    let catalog = builtin_catalog();

    let first = runner
        .run(dec!(100000), &selection, &balanced_prefs(), Mode::Balanced, &catalog)
        .unwrap();
    let second = runner
        .run(dec!(100000), &selection, &balanced_prefs(), Mode::Balanced, &catalog)
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn report_serializes_with_camel_case_keys() {
    let runner = PortfolioRunner::default();
    let selection = Selection::new(["Stocks", "Gold", "FD"]).unwrap();

    let report = runner
        .run(dec!(10000), &selection, &Preferences::Default, Mode::Balanced, &builtin_catalog())
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json.get("totalAmount").is_some());
    assert!(json["allocations"][0].get("riskLevel").is_some());
    assert!(json["metrics"].get("return").is_some());
    assert!(json["metrics"].get("sharpeRatio").is_some());
    assert!(json["projection"].get("expectedValue").is_some());
    assert_eq!(json["allocations"][2]["name"], "FD");
}
