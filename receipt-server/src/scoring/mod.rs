//! Points Rule Engine Module
//!
//! Computes the loyalty-points score for a stored receipt. The engine is a
//! pure function over receipt data: no I/O, no side effects, and the seven
//! rules are additive so their order never matters.

mod engine;
mod parse;

pub use engine::compute_points;
pub use parse::{parse_amount, parse_date, parse_time};
