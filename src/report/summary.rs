//! Result summaries for display

use crate::projection::CalculationResult;
use serde::Serialize;

/// Wording for a years-and-months duration, e.g. `"26 anos e 1 mês"`
pub fn format_duration(years: u32, months: u32) -> String {
    let mut parts = Vec::with_capacity(2);
    if years > 0 {
        parts.push(format!("{} {}", years, if years > 1 { "anos" } else { "ano" }));
    }
    if months > 0 {
        parts.push(format!("{} {}", months, if months > 1 { "meses" } else { "mês" }));
    }

    if parts.is_empty() {
        return "Menos de um mês".to_string();
    }
    parts.join(" e ")
}

/// Split of the final value between contributions and interest, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub invested_pct: f64,
    pub interest_pct: f64,
}

impl Composition {
    pub fn of(result: &CalculationResult) -> Self {
        if result.final_total_value <= 0.0 {
            return Self { invested_pct: 0.0, interest_pct: 0.0 };
        }
        Self {
            invested_pct: result.total_invested / result.final_total_value * 100.0,
            interest_pct: result.total_interest / result.final_total_value * 100.0,
        }
    }
}
