//! Presentation helpers for calculator front ends
//!
//! Brazilian-real currency parsing and formatting, the live-typing cents
//! mask, duration wording, and the invested/interest composition of a result.
//! The engine never calls into this module.

mod currency;
mod summary;

pub use currency::{format_brl, mask_cents, parse_brl};
pub use summary::{format_duration, Composition};
