//! Brazilian real amounts: `R$ 1.234,56`

use crate::error::InputError;

/// Parse an amount written with `.` thousands separators and `,` decimals.
///
/// A leading `R$` and surrounding whitespace are accepted. Empty input is zero.
pub fn parse_brl(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix("R$").unwrap_or(trimmed).trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let normalized = trimmed.replace('.', "").replacen(',', ".", 1);
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::InvalidAmount(text.to_string())),
    }
}

/// Re-mask free text typed into a currency field.
///
/// Every digit typed shifts the amount left by one cent position, so
/// `"123456"` becomes `"1.234,56"`. Non-digits are dropped.
pub fn mask_cents(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return "0,00".to_string();
    }

    let padded = format!("{:0>3}", digits);
    let (integer, cents) = padded.split_at(padded.len() - 2);
    let integer = integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };

    format!("{},{}", group_thousands(integer), cents)
}

/// Format an amount as `R$ 1.234,56`
pub fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    let integer = (cents / 100).to_string();
    format!("{}R$ {},{:02}", sign, group_thousands(&integer), cents % 100)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
