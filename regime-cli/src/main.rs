use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use regime_core::models::{FinancialProfile, Regime};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Compare income-tax liability under the Old and New regimes.
///
/// The profile file is a JSON document with the following fields:
/// - gross_salary: annual gross salary
/// - properties: list of { occupancy, rental_income, municipal_taxes, loan_interest }
/// - investments: list of { asset_class, buy_price, sell_price, is_long_term }
/// - deductions: { section_80c, health_insurance, nps_voluntary } (Old regime only)
///
/// By default both regimes are computed and the cheaper one is recommended.
#[derive(Parser, Debug)]
#[command(name = "regime-compare")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the JSON file containing the financial profile
    #[arg(short, long)]
    profile: PathBuf,

    /// Compute a single regime instead of the full comparison
    #[arg(short, long, value_enum)]
    regime: Option<RegimeArg>,

    /// Compute only the capital-gains tax on the profile's investments
    #[arg(short, long, conflicts_with = "regime")]
    gains: bool,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RegimeArg {
    Old,
    New,
}

impl From<RegimeArg> for Regime {
    fn from(arg: RegimeArg) -> Self {
        match arg {
            RegimeArg::Old => Regime::Old,
            RegimeArg::New => Regime::New,
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn render<T: Serialize>(
    value: &T,
    pretty: bool,
) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let input = fs::read_to_string(&args.profile)
        .with_context(|| format!("Failed to read profile: {}", args.profile.display()))?;
    let profile: FinancialProfile = serde_json::from_str(&input)
        .with_context(|| format!("Failed to parse profile JSON: {}", args.profile.display()))?;

    let output = if args.gains {
        let result = regime_core::compute_capital_gains(&profile.investments)
            .context("Capital-gains computation failed")?;
        render(&result, args.pretty)?
    } else {
        match args.regime.map(Regime::from) {
            Some(Regime::Old) => {
                let result = regime_core::compute_old_regime(&profile)
                    .context("Old-regime computation failed")?;
                render(&result, args.pretty)?
            }
            Some(Regime::New) => {
                let result = regime_core::compute_new_regime(&profile)
                    .context("New-regime computation failed")?;
                render(&result, args.pretty)?
            }
            None => {
                let result =
                    regime_core::compare(&profile).context("Regime comparison failed")?;
                render(&result, args.pretty)?
            }
        }
    };

    println!("{output}");

    Ok(())
}
