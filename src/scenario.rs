//! Scenario runner for batches and what-if sweeps
//!
//! Holds one engine configuration and applies it to many inputs. Each
//! calculation owns its simulation state, so batches run in parallel.

use crate::error::CalcResult;
use crate::inputs::CalculatorInputs;
use crate::projection::{CalculationResult, EngineConfig, ProjectionEngine};
use rayon::prelude::*;

/// Pre-configured runner for batch calculations
///
/// # Example
/// ```
/// use first_million::{CalculatorInputs, ScenarioRunner};
/// use first_million::inputs::RatePeriod;
///
/// let runner = ScenarioRunner::new();
/// let base = CalculatorInputs::goal_seek_time(0.0, 1000.0, 8.0, RatePeriod::Annual);
/// let sweep = runner.rate_sensitivity(&base, &[6.0, 8.0, 10.0]);
/// assert_eq!(sweep.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner targeting the default goal
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a custom engine config
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single calculation
    pub fn run(&self, inputs: &CalculatorInputs) -> CalcResult<CalculationResult> {
        self.engine.calculate(inputs)
    }

    /// Run many calculations in parallel; output order matches input order
    pub fn run_batch(&self, inputs: &[CalculatorInputs]) -> Vec<CalcResult<CalculationResult>> {
        inputs.par_iter().map(|i| self.engine.calculate(i)).collect()
    }

    /// Re-run `base` at each interest rate, keeping every other input fixed
    pub fn rate_sensitivity(
        &self,
        base: &CalculatorInputs,
        rates: &[f64],
    ) -> Vec<(f64, CalcResult<CalculationResult>)> {
        rates
            .par_iter()
            .map(|&rate| {
                let inputs = CalculatorInputs {
                    interest_rate: rate,
                    ..base.clone()
                };
                (rate, self.engine.calculate(&inputs))
            })
            .collect()
    }

    pub fn config(&self) -> &EngineConfig {
        self.engine.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoSolution;
    use crate::inputs::RatePeriod;

    #[test]
    fn test_scenario_runner_batch() {
        let runner = ScenarioRunner::new();
        let inputs = vec![
            CalculatorInputs::goal_seek_time(0.0, 1000.0, 8.0, RatePeriod::Annual),
            CalculatorInputs::goal_seek_time(0.0, 0.0, 8.0, RatePeriod::Annual),
            CalculatorInputs::solve_contribution(0.0, 20, 8.0, RatePeriod::Annual),
        ];

        let results = runner.run_batch(&inputs);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(NoSolution::NoContribution { .. })));
        assert!(results[2].as_ref().unwrap().monthly_contribution_needed.is_some());

        // Parallel run matches sequential
        assert_eq!(results[0], runner.run(&inputs[0]));
    }

    #[test]
    fn test_higher_rate_needs_smaller_contribution() {
        let runner = ScenarioRunner::new();
        let base = CalculatorInputs::solve_contribution(5_000.0, 15, 0.0, RatePeriod::Annual);

        let sweep = runner.rate_sensitivity(&base, &[0.0, 4.0, 8.0, 12.0]);
        assert!(sweep[0].1.is_err());

        let contributions: Vec<f64> = sweep[1..]
            .iter()
            .map(|(_, r)| r.as_ref().unwrap().monthly_contribution_needed.unwrap())
            .collect();
        assert!(contributions.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_custom_goal_runner() {
        let runner =
            ScenarioRunner::with_config(EngineConfig { goal: 50_000.0, ..Default::default() });
        let result = runner
            .run(&CalculatorInputs::goal_seek_time(0.0, 1000.0, 8.0, RatePeriod::Annual))
            .unwrap();
        assert!(result.years_to_goal < 5);
        assert_eq!(runner.config().goal, 50_000.0);
    }
}
