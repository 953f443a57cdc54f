//! Simulation state for a single goal projection

use crate::rates::MONTHS_PER_YEAR;

/// Balance and contributions at a point in the monthly simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    /// Months simulated so far
    pub month: u32,

    /// Account balance at end of `month`
    pub balance: f64,

    /// Cumulative principal contributed, including the initial value
    pub total_invested: f64,
}

impl SimulationState {
    /// State before the first simulated month
    pub fn new(initial_value: f64) -> Self {
        Self {
            month: 0,
            balance: initial_value,
            total_invested: initial_value,
        }
    }

    /// Advance one month: grow the balance, then add the contribution
    pub fn advance_month(&mut self, monthly_rate: f64, contribution: f64) {
        self.balance += self.balance * monthly_rate;
        self.balance += contribution;
        self.total_invested += contribution;
        self.month += 1;
    }

    /// Interest accrued so far
    pub fn total_interest(&self) -> f64 {
        self.balance - self.total_invested
    }

    /// Whether `month` closes a full year
    pub fn at_year_end(&self) -> bool {
        self.month > 0 && self.month % MONTHS_PER_YEAR == 0
    }

    /// Whole years elapsed
    pub fn whole_years(&self) -> u32 {
        self.month / MONTHS_PER_YEAR
    }

    /// Months into the current, incomplete year
    pub fn remainder_months(&self) -> u32 {
        self.month % MONTHS_PER_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_contribution_added_after_growth() {
        let mut state = SimulationState::new(1000.0);
        state.advance_month(0.01, 100.0);

        // 1000 * 1.01 + 100, the new contribution earns nothing this month
        assert_relative_eq!(state.balance, 1110.0);
        assert_relative_eq!(state.total_invested, 1100.0);
        assert_relative_eq!(state.total_interest(), 10.0);
        assert_eq!(state.month, 1);
    }

    #[test]
    fn test_year_boundaries() {
        let mut state = SimulationState::new(0.0);
        assert!(!state.at_year_end());

        for _ in 0..11 {
            state.advance_month(0.005, 10.0);
            assert!(!state.at_year_end());
        }
        state.advance_month(0.005, 10.0);
        assert!(state.at_year_end());
        assert_eq!(state.whole_years(), 1);
        assert_eq!(state.remainder_months(), 0);

        state.advance_month(0.005, 10.0);
        assert_eq!(state.whole_years(), 1);
        assert_eq!(state.remainder_months(), 1);
    }
}
