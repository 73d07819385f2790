//! Lenient Field Parsing
//!
//! Receipt fields are stored as text and parsed here on demand. Parsing is
//! best-effort by policy: a malformed field returns `None` and the rule
//! that needed it contributes zero points, instead of failing the whole
//! computation. Keeping the policy in named helpers keeps it auditable:
//! `None` is the single representation of "rule does not apply".

use chrono::{NaiveDate, NaiveTime};

/// Parse a decimal text amount ("35.35") into f64
///
/// Rules 2-3 compare the parsed value with direct floating-point equality,
/// so this must stay the one shared representation for amounts.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok()
}

/// Parse an ISO calendar date ("2022-01-02")
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parse a 24-hour clock time with minute precision ("14:33")
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}
