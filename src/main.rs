use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};
use configuration::{init_tracing, load_config};
use core_types::{InstrumentCatalog, Mode, Selection, builtin_catalog};
use engine::{AllocationReport, PortfolioRunner, Preferences, RawPreferences};
use rust_decimal::Decimal;

/// The main entry point for the Ballast portfolio engine.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A missing .env file is fine; everything has a default.
    dotenvy::dotenv().ok();

    let settings = load_config().context("Failed to load configuration")?;
    // Held until exit so the file appender can flush.
    let _log_guard = init_tracing(&settings.logging).context("Failed to initialize logging")?;
    tracing::debug!(?settings, "Configuration loaded.");

    let catalog = builtin_catalog();

    match cli.command {
        Commands::Optimize(args) => {
            let runner = PortfolioRunner::from_settings(&settings);
            handle_optimize(args, &runner, &catalog)
        }
        Commands::Instruments => {
            print_instruments(&catalog);
            Ok(())
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Preference-driven mean-variance allocation for a handful of instruments.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute an allocation for a selection of instruments.
    Optimize(OptimizeArgs),
    /// List the built-in instrument catalog.
    Instruments,
}

#[derive(Parser)]
struct OptimizeArgs {
    /// Total amount to invest.
    #[arg(long, default_value = "100000")]
    amount: Decimal,

    /// Instrument to include (repeat 2 to 5 times).
    #[arg(
        short = 'i',
        long = "instrument",
        default_values = ["Stocks", "Government Bonds", "Gold", "Debt Fund"]
    )]
    instruments: Vec<String>,

    /// Optimization mode: "balanced" or "return".
    #[arg(long, default_value = "balanced")]
    mode: String,

    /// Return vs. safety preference (e.g. "safety", "balanced", "growth").
    #[arg(long, default_value = "balanced")]
    return_safety: String,

    /// Risk tolerance (e.g. "conservative", "moderate", "aggressive").
    #[arg(long, default_value = "medium")]
    risk_tolerance: String,

    /// Diversification preference ("yes" or "no").
    #[arg(long, default_value = "yes")]
    diversification: String,

    /// Print the report as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Optimize Command Logic
// ==============================================================================

fn handle_optimize(args: OptimizeArgs, runner: &PortfolioRunner, catalog: &InstrumentCatalog) -> anyhow::Result<()> {
    let selection = Selection::new(args.instruments).context("Invalid instrument selection")?;
    let mode = Mode::from_label(&args.mode);
    let preferences = Preferences::Raw(RawPreferences::new(
        args.mode,
        args.return_safety,
        args.risk_tolerance,
        Some(args.diversification),
    ));

    let report = runner
        .run(args.amount, &selection, &preferences, mode, catalog)
        .context("Portfolio run failed")?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &AllocationReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Instrument", "Weight %", "Amount", "Risk Level", "Category"]);

    for row in &report.allocations {
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(row.percentage.round_dp(2)).set_alignment(CellAlignment::Right),
            Cell::new(row.amount.round_dp(2)).set_alignment(CellAlignment::Right),
            Cell::new(&row.risk_level),
            Cell::new(&row.category),
        ]);
    }

    println!("{table}");

    let metrics = &report.metrics;
    let mut summary = Table::new();
    summary.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);
    summary.add_row(vec!["Total amount".to_string(), report.total_amount.round_dp(2).to_string()]);
    summary.add_row(vec!["Expected return".to_string(), percent(metrics.expected_return)]);
    summary.add_row(vec!["Volatility".to_string(), percent(metrics.volatility)]);
    summary.add_row(vec!["Sharpe ratio".to_string(), metrics.sharpe_ratio.round_dp(3).to_string()]);
    summary.add_row(vec!["Risk level".to_string(), metrics.risk_level.to_string()]);
    summary.add_row(vec![
        "Value in 1 year".to_string(),
        report.projection.expected_value.round_dp(2).to_string(),
    ]);

    println!("{summary}");
}

fn print_instruments(catalog: &InstrumentCatalog) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Instrument", "Return %", "Std Dev %", "Risk Level", "Category"]);

    for instrument in catalog.iter() {
        table.add_row(vec![
            instrument.name.clone(),
            percent(instrument.expected_return),
            percent(instrument.std_dev),
            instrument.risk_level.to_string(),
            instrument.category.clone(),
        ]);
    }

    println!("{table}");
}

fn percent(fraction: Decimal) -> String {
    format!("{}%", (fraction * Decimal::ONE_HUNDRED).round_dp(2))
}
