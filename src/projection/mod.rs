//! Goal projection engine

mod state;
mod annual;
mod engine;
mod result;

pub use state::SimulationState;
pub use annual::{AnnualAggregator, AnnualData};
pub use engine::{
    ProjectionEngine, EngineConfig, calculate_investment, required_contribution,
    DEFAULT_GOAL, DEFAULT_MAX_MONTHS,
};
pub use result::{CalculationResult, round_currency};
