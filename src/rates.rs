//! Conversion of entered interest rates into an effective monthly growth rate

use crate::error::{CalcResult, NoSolution};
use crate::inputs::RatePeriod;

/// Months per year used for rate conversion and year bucketing
pub const MONTHS_PER_YEAR: u32 = 12;

/// Convert a percentage rate into the per-month compounding fraction.
///
/// Monthly rates are taken as-is (`rate / 100`). Annual rates are converted
/// geometrically so that twelve months of compounding reproduce the annual
/// rate exactly: `(1 + rate/100)^(1/12) - 1`.
///
/// Returns [`NoSolution`] for non-positive rates, or when the conversion does
/// not yield positive growth.
pub fn normalize(rate: f64, period: RatePeriod) -> CalcResult<f64> {
    if !rate.is_finite() {
        return Err(NoSolution::InvalidInput { field: "interest rate", value: rate });
    }
    if rate <= 0.0 {
        return Err(NoSolution::NonPositiveRate { rate });
    }

    let monthly_rate = match period {
        RatePeriod::Monthly => rate / 100.0,
        RatePeriod::Annual => (1.0 + rate / 100.0).powf(1.0 / MONTHS_PER_YEAR as f64) - 1.0,
    };

    // Tiny annual rates can underflow to zero after the root
    if monthly_rate <= 0.0 {
        return Err(NoSolution::NonPositiveMonthlyRate { monthly_rate });
    }

    log::debug!("normalized {}% {:?} to monthly rate {:.10}", rate, period, monthly_rate);
    Ok(monthly_rate)
}
