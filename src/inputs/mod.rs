//! Calculator inputs as submitted by a form, CLI, or batch file

pub mod loader;

pub use loader::{load_inputs, load_inputs_from_reader};

use crate::error::{CalcResult, InputError, NoSolution};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the calculation solves for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationType {
    /// Time needed to reach the goal with a fixed monthly contribution
    #[serde(rename = "time")]
    GoalSeekTime,
    /// Monthly contribution needed to reach the goal within a horizon
    #[serde(rename = "contribution")]
    SolveContribution,
}

impl FromStr for CalculationType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "time" | "goal-seek-time" => Ok(CalculationType::GoalSeekTime),
            "contribution" | "solve-contribution" => Ok(CalculationType::SolveContribution),
            _ => Err(InputError::UnknownCalculationType(s.to_string())),
        }
    }
}

impl fmt::Display for CalculationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationType::GoalSeekTime => write!(f, "time"),
            CalculationType::SolveContribution => write!(f, "contribution"),
        }
    }
}

/// Units of the entered interest rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatePeriod {
    #[default]
    Annual,
    Monthly,
}

impl FromStr for RatePeriod {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" | "anual" | "a.a." => Ok(RatePeriod::Annual),
            "monthly" | "mensal" | "a.m." => Ok(RatePeriod::Monthly),
            _ => Err(InputError::UnknownRatePeriod(s.to_string())),
        }
    }
}

impl fmt::Display for RatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatePeriod::Annual => write!(f, "annual"),
            RatePeriod::Monthly => write!(f, "monthly"),
        }
    }
}

/// One submission to the calculator.
///
/// Only one of `monthly_value` / `time_in_years` is read, depending on
/// `calculation_type`; the other may be left at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInputs {
    pub calculation_type: CalculationType,
    pub initial_value: f64,
    #[serde(default)]
    pub monthly_value: f64,
    /// Percentage, e.g. `8.0` for 8%
    pub interest_rate: f64,
    #[serde(default)]
    pub rate_period: RatePeriod,
    #[serde(default)]
    pub time_in_years: u32,
}

impl CalculatorInputs {
    /// Inputs for finding the time to goal
    pub fn goal_seek_time(
        initial_value: f64,
        monthly_value: f64,
        interest_rate: f64,
        rate_period: RatePeriod,
    ) -> Self {
        Self {
            calculation_type: CalculationType::GoalSeekTime,
            initial_value,
            monthly_value,
            interest_rate,
            rate_period,
            time_in_years: 0,
        }
    }

    /// Inputs for finding the contribution needed within `time_in_years`
    pub fn solve_contribution(
        initial_value: f64,
        time_in_years: u32,
        interest_rate: f64,
        rate_period: RatePeriod,
    ) -> Self {
        Self {
            calculation_type: CalculationType::SolveContribution,
            initial_value,
            monthly_value: 0.0,
            interest_rate,
            rate_period,
            time_in_years,
        }
    }

    /// Reject monetary values that are negative or not finite.
    ///
    /// The inactive field for the selected mode is not checked.
    pub fn validate(&self) -> CalcResult<()> {
        check_amount("initial value", self.initial_value)?;
        if self.calculation_type == CalculationType::GoalSeekTime {
            check_amount("monthly value", self.monthly_value)?;
        }
        Ok(())
    }
}

fn check_amount(field: &'static str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(NoSolution::InvalidInput { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calculation_type() {
        assert_eq!("time".parse::<CalculationType>().unwrap(), CalculationType::GoalSeekTime);
        assert_eq!(
            " Contribution ".parse::<CalculationType>().unwrap(),
            CalculationType::SolveContribution
        );
        assert!("both".parse::<CalculationType>().is_err());
    }

    #[test]
    fn test_parse_rate_period() {
        assert_eq!("mensal".parse::<RatePeriod>().unwrap(), RatePeriod::Monthly);
        assert_eq!("ANNUAL".parse::<RatePeriod>().unwrap(), RatePeriod::Annual);
        assert!("weekly".parse::<RatePeriod>().is_err());
    }

    #[test]
    fn test_json_contract_shape() {
        let json = r#"{
            "calculationType": "contribution",
            "initialValue": 5000,
            "monthlyValue": 0,
            "interestRate": 8,
            "ratePeriod": "annual",
            "timeInYears": 25
        }"#;
        let inputs: CalculatorInputs = serde_json::from_str(json).unwrap();
        assert_eq!(
            inputs,
            CalculatorInputs::solve_contribution(5000.0, 25, 8.0, RatePeriod::Annual)
        );
    }

    #[test]
    fn test_validate_ignores_inactive_field() {
        let mut inputs = CalculatorInputs::solve_contribution(0.0, 10, 8.0, RatePeriod::Annual);
        inputs.monthly_value = -1.0;
        assert!(inputs.validate().is_ok());

        let inputs = CalculatorInputs::goal_seek_time(0.0, -1.0, 8.0, RatePeriod::Annual);
        assert!(matches!(
            inputs.validate(),
            Err(NoSolution::InvalidInput { field: "monthly value", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_initial() {
        let inputs = CalculatorInputs::goal_seek_time(f64::NAN, 100.0, 8.0, RatePeriod::Annual);
        assert!(inputs.validate().is_err());
    }
}
