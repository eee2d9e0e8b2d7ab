//! Loyalty-point rules.
//!
//! Every rule reads the raw string fields of a [`Receipt`]. A field that does not
//! parse contributes nothing; scoring never fails.

use crate::domain::model::{PointsBreakdown, Receipt};

const ROUND_TOTAL_POINTS: i64 = 50;
const QUARTER_MULTIPLE_POINTS: i64 = 25;
const ITEM_PAIR_POINTS: i64 = 5;
const ODD_DAY_POINTS: i64 = 6;
const AFTERNOON_POINTS: i64 = 10;
const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

pub fn score(receipt: &Receipt) -> i64 {
    breakdown(receipt).total()
}

pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    let total = parse_amount(&receipt.total);

    let result = PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_total: if total == total.trunc() {
            ROUND_TOTAL_POINTS
        } else {
            0
        },
        quarter_multiple: if total % 0.25 == 0.0 {
            QUARTER_MULTIPLE_POINTS
        } else {
            0
        },
        item_pairs: (receipt.items.len() / 2) as i64 * ITEM_PAIR_POINTS,
        descriptions: receipt
            .items
            .iter()
            .filter(|item| item.short_description.trim().len() % 3 == 0)
            .map(|item| (parse_amount(&item.price) * DESCRIPTION_PRICE_MULTIPLIER).ceil() as i64)
            .fold(0i64, i64::saturating_add),
        odd_day: if parse_component(&receipt.purchase_date, '-', 2) % 2 != 0 {
            ODD_DAY_POINTS
        } else {
            0
        },
        afternoon: if (14..16).contains(&parse_component(&receipt.purchase_time, ':', 0)) {
            AFTERNOON_POINTS
        } else {
            0
        },
    };

    tracing::debug!(
        retailer = %receipt.retailer,
        points = result.total(),
        breakdown = ?result,
        "scored receipt"
    );

    result
}

/// ASCII letters and digits only; spaces, punctuation and non-ASCII are ignored.
fn retailer_points(retailer: &str) -> i64 {
    retailer
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .count() as i64
}

/// `inf` and `NaN` parse as `f64` but are not amounts; they count as zero.
fn parse_amount(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or(0.0)
}

fn parse_component(value: &str, separator: char, index: usize) -> i64 {
    value
        .split(separator)
        .nth(index)
        .and_then(|part| part.trim().parse::<i64>().ok())
        .unwrap_or(0)
}
