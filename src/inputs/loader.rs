//! Load batches of calculator inputs from CSV
//!
//! Expected header:
//! `CalculationType,InitialValue,MonthlyValue,InterestRate,RatePeriod,TimeInYears`.
//! Monetary columns accept plain decimals (`1234.56`) or Brazilian-formatted
//! amounts (`1.234,56`, quoted).

use super::{CalculationType, CalculatorInputs, RatePeriod};
use crate::error::InputError;
use crate::report::parse_brl;
use csv::Reader;
use std::path::Path;

/// Raw CSV row before enum and amount parsing
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "CalculationType")]
    calculation_type: String,
    #[serde(rename = "InitialValue")]
    initial_value: String,
    #[serde(rename = "MonthlyValue", default)]
    monthly_value: String,
    #[serde(rename = "InterestRate")]
    interest_rate: String,
    #[serde(rename = "RatePeriod", default)]
    rate_period: String,
    #[serde(rename = "TimeInYears", default)]
    time_in_years: Option<u32>,
}

impl CsvRow {
    fn into_inputs(self) -> Result<CalculatorInputs, InputError> {
        let calculation_type: CalculationType = self.calculation_type.parse()?;
        let rate_period = if self.rate_period.trim().is_empty() {
            RatePeriod::default()
        } else {
            self.rate_period.parse()?
        };

        Ok(CalculatorInputs {
            calculation_type,
            initial_value: parse_amount(&self.initial_value)?,
            monthly_value: parse_amount(&self.monthly_value)?,
            interest_rate: parse_amount(&self.interest_rate)?,
            rate_period,
            time_in_years: self.time_in_years.unwrap_or(0),
        })
    }
}

/// Plain decimals first, then the `1.234,56` form
fn parse_amount(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => parse_brl(trimmed),
    }
}

/// Load all inputs from a CSV file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<CalculatorInputs>, InputError> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load inputs from any reader (e.g., string buffer, stdin)
pub fn load_inputs_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<CalculatorInputs>, InputError> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<Vec<CalculatorInputs>, InputError> {
    let mut inputs = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        inputs.push(row.into_inputs()?);
    }

    log::debug!("loaded {} calculator inputs", inputs.len());
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATCH: &str = "\
CalculationType,InitialValue,MonthlyValue,InterestRate,RatePeriod,TimeInYears
time,0,1000,8,annual,
contribution,\"10.000,00\",,0.7,monthly,20
time,500.5,250,10,,
";

    #[test]
    fn test_load_inputs_from_reader() {
        let inputs = load_inputs_from_reader(BATCH.as_bytes()).expect("Failed to load inputs");
        assert_eq!(inputs.len(), 3);

        assert_eq!(
            inputs[0],
            CalculatorInputs::goal_seek_time(0.0, 1000.0, 8.0, RatePeriod::Annual)
        );
        assert_eq!(
            inputs[1],
            CalculatorInputs::solve_contribution(10_000.0, 20, 0.7, RatePeriod::Monthly)
        );

        // Blank rate period falls back to annual
        assert_eq!(inputs[2].rate_period, RatePeriod::Annual);
        assert_eq!(inputs[2].initial_value, 500.5);
    }

    #[test]
    fn test_unknown_calculation_type() {
        let data = "\
CalculationType,InitialValue,MonthlyValue,InterestRate,RatePeriod,TimeInYears
forever,0,1000,8,annual,
";
        let err = load_inputs_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::UnknownCalculationType(_)));
    }

    #[test]
    fn test_bad_amount() {
        let data = "\
CalculationType,InitialValue,MonthlyValue,InterestRate,RatePeriod,TimeInYears
time,lots,1000,8,annual,
";
        let err = load_inputs_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::InvalidAmount(_)));
    }
}
