//! Run a batch of calculator inputs from CSV
//!
//! Usage: `run_batch <inputs.csv> [output.csv]`
//!
//! Writes one summary row per input, in input order. Inputs without a
//! solution are kept with the reason in the `NoSolution` column.

use anyhow::{Context, Result};
use first_million::inputs::load_inputs;
use first_million::ScenarioRunner;
use serde::Serialize;
use std::env;
use std::time::Instant;

/// One output row per scenario
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SummaryRow {
    scenario: usize,
    calculation_type: String,
    initial_value: f64,
    interest_rate: f64,
    rate_period: String,
    years_to_goal: Option<u32>,
    months_to_goal: Option<u32>,
    monthly_contribution_needed: Option<f64>,
    final_total_value: Option<f64>,
    total_invested: Option<f64>,
    total_interest: Option<f64>,
    no_solution: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input_path = args.next().context("Usage: run_batch <inputs.csv> [output.csv]")?;
    let output_path = args.next().unwrap_or_else(|| "batch_output.csv".to_string());

    let start = Instant::now();
    let inputs =
        load_inputs(&input_path).with_context(|| format!("Failed to load {}", input_path))?;
    println!("Loaded {} scenarios in {:?}", inputs.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let results = runner.run_batch(&inputs);

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("Failed to create {}", output_path))?;
    let mut solved = 0;

    for (i, (input, outcome)) in inputs.iter().zip(&results).enumerate() {
        let mut row = SummaryRow {
            scenario: i + 1,
            calculation_type: input.calculation_type.to_string(),
            initial_value: input.initial_value,
            interest_rate: input.interest_rate,
            rate_period: input.rate_period.to_string(),
            years_to_goal: None,
            months_to_goal: None,
            monthly_contribution_needed: None,
            final_total_value: None,
            total_invested: None,
            total_interest: None,
            no_solution: None,
        };

        match outcome {
            Ok(result) => {
                solved += 1;
                row.years_to_goal = Some(result.years_to_goal);
                row.months_to_goal = result.months_to_goal;
                row.monthly_contribution_needed = result.monthly_contribution_needed;
                row.final_total_value = Some(result.final_total_value);
                row.total_invested = Some(result.total_invested);
                row.total_interest = Some(result.total_interest);
            }
            Err(reason) => row.no_solution = Some(reason.to_string()),
        }

        writer.serialize(&row)?;
    }
    writer.flush()?;

    println!("Solved {} of {} scenarios", solved, results.len());
    println!("Output written to {}", output_path);
    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
