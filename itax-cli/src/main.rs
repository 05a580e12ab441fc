mod format;
mod input;
mod profile;
mod report;

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use itax_core::models::{CityClass, SalaryIncome, TaxInput};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Indian income-tax calculator.
///
/// Computes the tax liability for a salary under both the old and the new
/// regime and reports which one is cheaper. Supply either a single total
/// (`--total`) or a detailed component breakdown (`--basic`, `--hra`,
/// `--rent`, `--other`).
#[derive(Debug, Parser)]
#[command(name = "itax")]
struct Cli {
    /// Total annual salary (total mode).
    #[arg(long, value_parser = input::parse_amount,
          conflicts_with_all = ["basic", "hra", "rent", "other"])]
    total: Option<Decimal>,

    /// Annual basic salary (detailed mode).
    #[arg(long, value_parser = input::parse_amount)]
    basic: Option<Decimal>,

    /// Annual house rent allowance received (detailed mode).
    #[arg(long, value_parser = input::parse_amount)]
    hra: Option<Decimal>,

    /// Annual rent paid (detailed mode, drives the HRA exemption).
    #[arg(long, value_parser = input::parse_amount)]
    rent: Option<Decimal>,

    /// Other annual allowances (detailed mode).
    #[arg(long, value_parser = input::parse_amount)]
    other: Option<Decimal>,

    /// City classification for the HRA exemption.
    #[arg(long, default_value = "metro", value_parser = parse_city)]
    city: CityClass,

    /// Reuse the last saved input instead of reading amount flags.
    #[arg(long, conflicts_with_all = ["total", "basic", "hra", "rent", "other"])]
    last: bool,

    /// Save this input for later reuse with --last.
    #[arg(long)]
    save: bool,

    /// Delete the saved input and exit.
    #[arg(long)]
    clear: bool,

    /// Path of the saved-input profile.
    #[arg(long, default_value_os_t = profile::default_path())]
    profile: PathBuf,
}

fn parse_city(s: &str) -> Result<CityClass, String> {
    CityClass::parse(s).ok_or_else(|| format!("unknown city class '{s}', expected metro|non-metro"))
}

impl Cli {
    /// Builds the calculation input from the amount flags.
    ///
    /// Detailed mode is chosen when any component flag is present; absent
    /// components default to zero, matching how an empty form field reads.
    fn to_tax_input(&self) -> anyhow::Result<TaxInput> {
        let salary = if let Some(annual_salary) = self.total {
            SalaryIncome::Total { annual_salary }
        } else if self.basic.is_some()
            || self.hra.is_some()
            || self.rent.is_some()
            || self.other.is_some()
        {
            SalaryIncome::Detailed {
                basic_salary: self.basic.unwrap_or(Decimal::ZERO),
                hra: self.hra.unwrap_or(Decimal::ZERO),
                rent_paid: self.rent.unwrap_or(Decimal::ZERO),
                other_allowances: self.other.unwrap_or(Decimal::ZERO),
            }
        } else {
            bail!("no salary given: use --total, or --basic/--hra/--rent/--other, or --last");
        };

        Ok(TaxInput {
            salary,
            city_class: self.city,
        })
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.clear {
        if profile::clear(&cli.profile)? {
            info!("saved input removed from {}", cli.profile.display());
        } else {
            info!("no saved input at {}", cli.profile.display());
        }
        return Ok(());
    }

    let tax_input = if cli.last {
        let saved = profile::load(&cli.profile)
            .with_context(|| format!("cannot load saved input from {}", cli.profile.display()))?;
        debug!(saved_at = %saved.saved_at, "reusing saved input");
        saved.input
    } else {
        cli.to_tax_input()?
    };

    let result = itax_core::calculate(&tax_input).context("calculation rejected")?;

    print!("{}", report::render(&result));

    if cli.save {
        profile::save(&cli.profile, &tax_input)?;
        info!("input saved to {}", cli.profile.display());
    }

    Ok(())
}
