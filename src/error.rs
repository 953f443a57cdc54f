//! Error types for goal projections and input handling

use thiserror::Error;

/// Result of an engine calculation.
pub type CalcResult<T> = Result<T, NoSolution>;

/// The engine could not produce a result for the given inputs.
///
/// This is an expected outcome, not a fault: callers surface it as a
/// "cannot compute" state and wait for new input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoSolution {
    /// Supplied interest rate is zero or negative.
    #[error("Interest rate must be positive, got {rate}%")]
    NonPositiveRate {
        /// Rate as entered, in percent.
        rate: f64,
    },

    /// Rate normalized to a non-positive monthly growth fraction.
    #[error("Effective monthly rate is not positive: {monthly_rate}")]
    NonPositiveMonthlyRate {
        /// Normalized monthly rate.
        monthly_rate: f64,
    },

    /// No monthly contribution and the initial value is below the goal.
    #[error(
        "No monthly contribution and initial value {initial_value:.2} is below the goal {goal:.2}"
    )]
    NoContribution {
        /// Starting balance.
        initial_value: f64,
        /// Target balance.
        goal: f64,
    },

    /// Goal not reached within the simulation bound.
    #[error("Goal not reached within {max_months} months")]
    HorizonExceeded {
        /// Maximum number of simulated months.
        max_months: u32,
    },

    /// Initial value alone already grows past the goal within the horizon.
    #[error(
        "Goal already met without contributions (required contribution {required_contribution:.2})"
    )]
    GoalAlreadyMet {
        /// The negative contribution produced by the closed-form solve.
        required_contribution: f64,
    },

    /// Compound growth over the horizon does not fit in an `f64`.
    #[error("Compound growth over {months} months is too large to compute")]
    GrowthOverflow {
        /// Horizon in months.
        months: u32,
    },

    /// Zero-year horizon in contribution mode.
    #[error("Time horizon must be at least one year")]
    EmptyHorizon,

    /// Monetary input or goal is out of range or not a finite number.
    #[error("Invalid {field}: {value}")]
    InvalidInput {
        /// Name of the offending input.
        field: &'static str,
        /// Value received.
        value: f64,
    },
}

/// Errors raised while turning external text into calculator inputs.
#[derive(Error, Debug)]
pub enum InputError {
    /// Currency text could not be parsed.
    #[error("Invalid currency amount: {0:?}")]
    InvalidAmount(String),

    /// Unknown calculation type name.
    #[error("Unknown calculation type: {0:?} (expected \"time\" or \"contribution\")")]
    UnknownCalculationType(String),

    /// Unknown rate period name.
    #[error("Unknown rate period: {0:?} (expected \"annual\" or \"monthly\")")]
    UnknownRatePeriod(String),

    /// CSV decoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
