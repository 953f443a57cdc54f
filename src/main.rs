//! First Million CLI
//!
//! Command-line interface for goal projections
//!
//! ```bash
//! # How long to reach R$ 1 million investing R$ 1.000,00 a month at 8% a year
//! first_million time --monthly 1.000,00 --rate 8
//!
//! # Monthly contribution needed to get there in 20 years, written to CSV
//! first_million contribution --years 20 --rate 8 --csv evolution.csv
//! ```

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use first_million::projection::{DEFAULT_GOAL, DEFAULT_MAX_MONTHS};
use first_million::report::{format_brl, format_duration, parse_brl, Composition};
use first_million::{
    CalculationResult, CalculatorInputs, EngineConfig, ProjectionEngine, RatePeriod,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "first_million",
    version,
    about = "Compound-interest simulator for reaching one million"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Goal amount, must be positive
    #[arg(long, global = true, default_value_t = DEFAULT_GOAL, value_parser = parse_goal)]
    goal: f64,

    /// Give up the time search after this many months
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_MONTHS)]
    max_months: u32,

    /// Print the result as JSON instead of a report
    #[arg(long, global = true)]
    json: bool,

    /// Also write the year-by-year table to this CSV file
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Start date used to report when the goal is reached (defaults to today)
    #[arg(long, global = true)]
    start_date: Option<NaiveDate>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// How long until the goal with a fixed monthly contribution
    Time {
        /// Monthly contribution, e.g. 1.000,00
        #[arg(long, value_parser = parse_brl)]
        monthly: f64,

        #[command(flatten)]
        common: CommonArgs,
    },
    /// Monthly contribution needed to reach the goal in a number of years
    Contribution {
        /// Horizon in years
        #[arg(long)]
        years: u32,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Debug, Args)]
struct CommonArgs {
    /// Amount already invested, e.g. 10.000,00
    #[arg(long, value_parser = parse_brl, default_value = "0,00")]
    initial: f64,

    /// Interest rate in percent
    #[arg(long, default_value_t = 8.0)]
    rate: f64,

    /// Units of the interest rate: annual or monthly
    #[arg(long, default_value = "annual")]
    period: RatePeriod,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let inputs = match &cli.command {
        Command::Time { monthly, common } => {
            CalculatorInputs::goal_seek_time(common.initial, *monthly, common.rate, common.period)
        }
        Command::Contribution { years, common } => {
            CalculatorInputs::solve_contribution(common.initial, *years, common.rate, common.period)
        }
    };

    let engine = ProjectionEngine::new(EngineConfig {
        goal: cli.goal,
        max_months: cli.max_months,
    });

    let result = match engine.calculate(&inputs) {
        Ok(result) => result,
        Err(reason) => {
            // Not a failure of the tool: report and exit cleanly
            if cli.json {
                println!("{}", serde_json::json!({ "error": reason.to_string() }));
            } else {
                println!("Cannot compute: {}", reason);
            }
            return Ok(());
        }
    };

    if let Some(path) = &cli.csv {
        write_evolution_csv(path, &result)
            .with_context(|| format!("Unable to write {}", path.display()))?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let start = cli.start_date.unwrap_or_else(|| Local::now().date_naive());
    print_report(&cli, &result, start);

    if let Some(path) = &cli.csv {
        println!("\nYear-by-year table written to: {}", path.display());
    }
    Ok(())
}

fn print_report(cli: &Cli, result: &CalculationResult, start: NaiveDate) {
    println!("First Million v{}", env!("CARGO_PKG_VERSION"));
    println!("=====================\n");

    match &cli.command {
        Command::Time { .. } => {
            let months = result.months_to_goal.unwrap_or(0);
            println!(
                "Time to reach {}: {}",
                format_brl(cli.goal),
                format_duration(result.years_to_goal, months)
            );
            if let Some(date) = result.goal_date(start) {
                println!("  Goal reached around: {}", date.format("%m/%Y"));
            }
        }
        Command::Contribution { .. } => {
            if let Some(contribution) = result.monthly_contribution_needed {
                println!("Monthly contribution needed: {}", format_brl(contribution));
                println!("  Over: {}", format_duration(result.years_to_goal, 0));
            }
        }
    }

    let composition = Composition::of(result);
    println!("\nSummary:");
    println!("  Final total value: {}", format_brl(result.final_total_value));
    println!(
        "  Total invested:    {} ({:.1}%)",
        format_brl(result.total_invested),
        composition.invested_pct
    );
    println!(
        "  Total interest:    {} ({:.1}%)",
        format_brl(result.total_interest),
        composition.interest_pct
    );

    if result.evolution_data.is_empty() {
        return;
    }

    println!(
        "\n{:>4} {:>18} {:>18} {:>20} {:>20} {:>20}",
        "Year", "Invested", "Interest", "Total Invested", "Total Interest", "Accumulated"
    );
    println!("{}", "-".repeat(105));

    for row in &result.evolution_data {
        println!(
            "{:>4} {:>18} {:>18} {:>20} {:>20} {:>20}",
            row.year,
            format_brl(row.annual_investment),
            format_brl(row.year_interest),
            format_brl(row.total_invested),
            format_brl(row.total_interest),
            format_brl(row.total_accumulated),
        );
    }
}

/// Goal must be a finite amount above zero
fn parse_goal(raw: &str) -> Result<f64, String> {
    let goal: f64 = raw.trim().parse().map_err(|e| format!("{}", e))?;
    if !goal.is_finite() || goal <= 0.0 {
        return Err(format!("goal must be a positive amount, got {}", raw));
    }
    Ok(goal)
}

fn write_evolution_csv(path: &Path, result: &CalculationResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "Year",
        "AnnualInvestment",
        "YearInterest",
        "TotalInvested",
        "TotalInterest",
        "TotalAccumulated",
    ])?;

    for row in &result.evolution_data {
        writer.write_record(&[
            row.year.to_string(),
            format!("{:.2}", row.annual_investment),
            format!("{:.2}", row.year_interest),
            format!("{:.2}", row.total_invested),
            format!("{:.2}", row.total_interest),
            format!("{:.2}", row.total_accumulated),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_goal() {
        assert_eq!(parse_goal("2000000").unwrap(), 2_000_000.0);
        assert_eq!(parse_goal(" 500.5 ").unwrap(), 500.5);
        for bad in ["0", "-10", "NaN", "inf", "abc"] {
            assert!(parse_goal(bad).is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_goal_flag_rejects_non_positive() {
        let args = ["first_million", "time", "--monthly", "1.000,00"];
        let parsed = Cli::try_parse_from(args).unwrap();
        assert_eq!(parsed.goal, DEFAULT_GOAL);

        for goal in ["0", "-1", "NaN"] {
            let args = ["first_million", "--goal", goal, "time", "--monthly", "1.000,00"];
            assert!(Cli::try_parse_from(args).is_err(), "--goal {} should fail", goal);
        }
    }
}
