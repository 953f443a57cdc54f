//! Projection engine: time-to-goal search and required-contribution solve

use super::annual::AnnualAggregator;
use super::result::CalculationResult;
use super::state::SimulationState;
use crate::error::{CalcResult, NoSolution};
use crate::inputs::{CalculationType, CalculatorInputs};
use crate::rates::{normalize, MONTHS_PER_YEAR};

/// Target accumulated value, in major currency units
pub const DEFAULT_GOAL: f64 = 1_000_000.0;

/// Simulation bound for the time search (100 years)
pub const DEFAULT_MAX_MONTHS: u32 = 1200;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Balance that counts as reaching the goal
    pub goal: f64,

    /// Give up the time search after this many months
    pub max_months: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            goal: DEFAULT_GOAL,
            max_months: DEFAULT_MAX_MONTHS,
        }
    }
}

/// Main projection engine
///
/// Holds only configuration; every call builds its own simulation state.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: EngineConfig,
}

impl ProjectionEngine {
    /// Create a new engine with the given config
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one calculation
    pub fn calculate(&self, inputs: &CalculatorInputs) -> CalcResult<CalculationResult> {
        let outcome = self.try_calculate(inputs);
        if let Err(reason) = &outcome {
            log::debug!("no solution for {} calculation: {}", inputs.calculation_type, reason);
        }
        outcome
    }

    fn try_calculate(&self, inputs: &CalculatorInputs) -> CalcResult<CalculationResult> {
        let goal = self.config.goal;
        if !goal.is_finite() || goal <= 0.0 {
            return Err(NoSolution::InvalidInput { field: "goal", value: goal });
        }
        inputs.validate()?;
        let monthly_rate = normalize(inputs.interest_rate, inputs.rate_period)?;

        match inputs.calculation_type {
            CalculationType::GoalSeekTime => {
                self.seek_time(inputs.initial_value, inputs.monthly_value, monthly_rate)
            }
            CalculationType::SolveContribution => {
                self.solve_contribution(inputs.initial_value, inputs.time_in_years, monthly_rate)
            }
        }
    }

    /// Simulate month by month until the balance reaches the goal
    fn seek_time(
        &self,
        initial_value: f64,
        monthly_value: f64,
        monthly_rate: f64,
    ) -> CalcResult<CalculationResult> {
        let goal = self.config.goal;

        // Growth alone would eventually get there, but the search is only
        // run when something is being contributed.
        if monthly_value <= 0.0 && initial_value < goal {
            return Err(NoSolution::NoContribution { initial_value, goal });
        }

        let mut state = SimulationState::new(initial_value);
        let mut aggregator = AnnualAggregator::new(&state);

        while state.balance < goal {
            state.advance_month(monthly_rate, monthly_value);
            aggregator.observe(&state);

            if state.month > self.config.max_months {
                return Err(NoSolution::HorizonExceeded { max_months: self.config.max_months });
            }
        }

        aggregator.close_partial_year(&state);
        log::debug!("goal of {:.2} reached after {} months", goal, state.month);

        Ok(CalculationResult::for_goal_seek(&state, aggregator.into_records()))
    }

    /// Solve the annuity equation for the contribution, then confirm by simulation
    fn solve_contribution(
        &self,
        initial_value: f64,
        time_in_years: u32,
        monthly_rate: f64,
    ) -> CalcResult<CalculationResult> {
        let total_months = time_in_years.saturating_mul(MONTHS_PER_YEAR);
        if total_months == 0 {
            return Err(NoSolution::EmptyHorizon);
        }

        let contribution =
            required_contribution(self.config.goal, initial_value, monthly_rate, total_months);
        // Growth factor overflowed f64
        if !contribution.is_finite() {
            return Err(NoSolution::GrowthOverflow { months: total_months });
        }
        if contribution < 0.0 {
            return Err(NoSolution::GoalAlreadyMet { required_contribution: contribution });
        }
        log::debug!(
            "required contribution {:.6} over {} months at {:.10}",
            contribution,
            total_months,
            monthly_rate
        );

        let mut state = SimulationState::new(initial_value);
        let mut aggregator = AnnualAggregator::new(&state);

        for _month in 1..=total_months {
            state.advance_month(monthly_rate, contribution);
            aggregator.observe(&state);
        }

        Ok(CalculationResult::for_contribution(
            time_in_years,
            contribution,
            &state,
            aggregator.into_records(),
        ))
    }
}

/// Level end-of-month contribution that grows `initial_value` to `goal`
/// in `months` at `monthly_rate`.
///
/// Negative when the initial value alone already exceeds the goal.
/// Not finite when `(1 + monthly_rate)^months` overflows.
pub fn required_contribution(
    goal: f64,
    initial_value: f64,
    monthly_rate: f64,
    months: u32,
) -> f64 {
    let growth = (1.0 + monthly_rate).powf(months as f64);
    let fv_initial = initial_value * growth;
    let annuity_factor = (growth - 1.0) / monthly_rate;
    (goal - fv_initial) / annuity_factor
}

/// Run a calculation against the default one-million goal
pub fn calculate_investment(inputs: &CalculatorInputs) -> CalcResult<CalculationResult> {
    ProjectionEngine::default().calculate(inputs)
}
