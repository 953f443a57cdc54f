//! Calculation result and final rounding

use super::annual::AnnualData;
use super::state::SimulationState;
use crate::rates::MONTHS_PER_YEAR;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Round a monetary amount to cents, half away from zero
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Outcome of one calculator submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Whole years to reach the goal (the horizon in contribution mode)
    pub years_to_goal: u32,

    /// Remaining months past `years_to_goal`; time mode only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months_to_goal: Option<u32>,

    pub final_total_value: f64,
    pub total_invested: f64,
    pub total_interest: f64,

    /// Required monthly contribution; contribution mode only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_contribution_needed: Option<f64>,

    /// One record per simulated year
    pub evolution_data: Vec<AnnualData>,
}

impl CalculationResult {
    /// Assemble a time-to-goal result from the terminal simulation state
    pub(crate) fn for_goal_seek(state: &SimulationState, evolution_data: Vec<AnnualData>) -> Self {
        Self {
            years_to_goal: state.whole_years(),
            months_to_goal: Some(state.remainder_months()),
            final_total_value: round_currency(state.balance),
            total_invested: round_currency(state.total_invested),
            total_interest: round_currency(state.total_interest()),
            monthly_contribution_needed: None,
            evolution_data,
        }
    }

    /// Assemble a required-contribution result
    pub(crate) fn for_contribution(
        time_in_years: u32,
        contribution: f64,
        state: &SimulationState,
        evolution_data: Vec<AnnualData>,
    ) -> Self {
        Self {
            years_to_goal: time_in_years,
            months_to_goal: None,
            final_total_value: round_currency(state.balance),
            total_invested: round_currency(state.total_invested),
            total_interest: round_currency(state.total_interest()),
            monthly_contribution_needed: Some(round_currency(contribution)),
            evolution_data,
        }
    }

    /// Total simulated months to the goal
    pub fn total_months(&self) -> u32 {
        self.years_to_goal * MONTHS_PER_YEAR + self.months_to_goal.unwrap_or(0)
    }

    /// Calendar date the goal is reached when starting on `start`
    pub fn goal_date(&self, start: NaiveDate) -> Option<NaiveDate> {
        start.checked_add_months(Months::new(self.total_months()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_currency_half_away_from_zero() {
        assert_eq!(round_currency(2.5), 2.5);
        assert_eq!(round_currency(0.125), 0.13);
        assert_eq!(round_currency(-0.125), -0.13);
        assert_eq!(round_currency(1_000_000.004), 1_000_000.0);
        assert_eq!(round_currency(1234.5678), 1234.57);
    }

    fn sample() -> CalculationResult {
        let state = SimulationState {
            month: 313,
            balance: 1_000_123.456,
            total_invested: 313_000.0,
        };
        CalculationResult::for_goal_seek(&state, Vec::new())
    }

    #[test]
    fn test_goal_seek_assembly() {
        let result = sample();
        assert_eq!(result.years_to_goal, 26);
        assert_eq!(result.months_to_goal, Some(1));
        assert_eq!(result.final_total_value, 1_000_123.46);
        assert_eq!(result.total_interest, 687_123.46);
        assert_eq!(result.total_months(), 313);
    }

    #[test]
    fn test_goal_date() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let date = sample().goal_date(start).unwrap();
        // Month arithmetic clamps to the last day of February
        assert_eq!(date, NaiveDate::from_ymd_opt(2052, 2, 29).unwrap());
    }

    #[test]
    fn test_optional_fields_skipped_in_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("monthlyContributionNeeded").is_none());
        assert_eq!(json["monthsToGoal"], 1);
        assert_eq!(json["yearsToGoal"], 26);
    }
}
