//! First Million - compound-interest projections toward a one-million goal
//!
//! This library provides:
//! - Time-to-goal search for a fixed monthly contribution
//! - Required monthly contribution for a fixed horizon
//! - Year-by-year breakdown of invested capital versus interest
//! - Batch and rate-sensitivity runs
//! - Brazilian-real formatting helpers for front ends

pub mod error;
pub mod inputs;
pub mod rates;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalcResult, InputError, NoSolution};
pub use inputs::{CalculatorInputs, CalculationType, RatePeriod};
pub use projection::{
    calculate_investment, AnnualData, CalculationResult, EngineConfig, ProjectionEngine,
};
pub use scenario::ScenarioRunner;
