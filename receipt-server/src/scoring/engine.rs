//! Points Calculator
//!
//! Seven additive rules, summed. Rules 2-3 deliberately use exact `f64`
//! equality against the value's own truncation: the comparison happens on
//! the same representation the amount was parsed into, with no epsilon.

use chrono::{Datelike, Timelike};

use crate::db::models::{Item, Receipt};

use super::parse::{parse_amount, parse_date, parse_time};

/// Afternoon bonus window in minutes-of-day, both ends exclusive
const WINDOW_START_MIN: u32 = 14 * 60;
const WINDOW_END_MIN: u32 = 16 * 60;

/// Compute the loyalty-points total for a receipt
///
/// Deterministic and never fails: malformed numeric/date/time fields zero
/// out the affected rule instead of aborting (see [`super::parse`]).
///
/// # Rules
///
/// | # | 规则 | 分值 |
/// |---|------|------|
/// | 1 | 商家名称字母数字字符 | 每个 +1 |
/// | 2 | 总额为整数金额 | +50 |
/// | 3 | 总额为 0.25 的倍数 | +25 |
/// | 4 | 每两件商品 | +5 |
/// | 5 | 描述修剪后长度是 3 的倍数 | ceil(价格 * 0.2) |
/// | 6 | 购买日为奇数 | +6 |
/// | 7 | 购买时间在 14:00-16:00 之间 (开区间) | +10 |
pub fn compute_points(receipt: &Receipt) -> u32 {
    let mut points = 0u32;

    points += retailer_points(&receipt.retailer);
    points += total_points(&receipt.total);
    points += item_pair_points(&receipt.items);
    points += description_points(&receipt.items);
    points += purchase_date_points(&receipt.purchase_date);
    points += purchase_time_points(&receipt.purchase_time);

    points
}

/// Rule 1: one point per Unicode letter or digit in the retailer name
pub(super) fn retailer_points(retailer: &str) -> u32 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u32
}

/// Rules 2-3: 50 points for a round-dollar total, 25 for a multiple of 0.25
///
/// Both rules evaluate the same parsed amount; an unparseable total earns
/// nothing from either.
pub(super) fn total_points(total: &str) -> u32 {
    let Some(total) = parse_amount(total) else {
        return 0;
    };

    let mut points = 0;
    if total == total.trunc() {
        points += 50;
    }
    if (total / 0.25) == (total / 0.25).trunc() {
        points += 25;
    }
    points
}

/// Rule 4: 5 points for every two items
pub(super) fn item_pair_points(items: &[Item]) -> u32 {
    (items.len() as u32 / 2) * 5
}

/// Rule 5: ceil(price * 0.2) for each item whose trimmed description
/// length is a multiple of 3
///
/// Length is counted in characters after trimming whitespace, so a
/// whitespace-only description trims to length 0 (a multiple of 3) and
/// earns the bonus. A malformed or negative price contributes nothing.
pub(super) fn description_points(items: &[Item]) -> u32 {
    items
        .iter()
        .map(|item| {
            let trimmed_len = item.short_description.trim().chars().count();
            if trimmed_len % 3 != 0 {
                return 0;
            }
            match parse_amount(&item.price) {
                // f64-to-u32 cast clamps negatives to zero
                Some(price) => (price * 0.2).ceil() as u32,
                None => 0,
            }
        })
        .sum()
}

/// Rule 6: 6 points if the day of the purchase date is odd
pub(super) fn purchase_date_points(purchase_date: &str) -> u32 {
    match parse_date(purchase_date) {
        Some(date) if date.day() % 2 != 0 => 6,
        _ => 0,
    }
}

/// Rule 7: 10 points strictly between 14:00 and 16:00
///
/// Times have minute precision, so the window check works on minutes of
/// the day. 14:00 and 16:00 themselves earn nothing.
pub(super) fn purchase_time_points(purchase_time: &str) -> u32 {
    match parse_time(purchase_time) {
        Some(time) => {
            let minutes = time.hour() * 60 + time.minute();
            if minutes > WINDOW_START_MIN && minutes < WINDOW_END_MIN {
                10
            } else {
                0
            }
        }
        None => 0,
    }
}
