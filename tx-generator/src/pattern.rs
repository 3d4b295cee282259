//! Deterministic generator: every column is a modulo pattern over the row index, so the same
//! `count` always yields the same rows.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::catalog::{PATTERN_CATEGORIES, PATTERN_INVESTMENT_TYPES};
use crate::transaction::{ClockTime, TransactionKind, TransactionRecord};

pub const DEFAULT_COUNT: usize = 100;
pub const DEFAULT_BASE_DATE: &str = "2024-01-01";

/// Builds `count` rows, one per day starting at `base_date`.
///
/// Fewer rows come back only when the range runs into the last representable date.
#[must_use]
pub fn build_rows(base_date: NaiveDate, count: usize) -> Vec<TransactionRecord> {
    let rows: Vec<TransactionRecord> = base_date
        .iter_days()
        .take(count)
        .enumerate()
        .map(|(i, date)| build_row(i, date))
        .collect();
    debug!("Built {} pattern rows from {}", rows.len(), base_date);
    rows
}

fn build_row(i: usize, date: NaiveDate) -> TransactionRecord {
    let value = Decimal::new(2575, 2) + Decimal::from(i % 9) * Decimal::new(41, 1);
    let amount = Decimal::ONE + Decimal::from(i % 3) * Decimal::new(5, 1);
    let investment_type = PATTERN_INVESTMENT_TYPES[i % PATTERN_INVESTMENT_TYPES.len()];
    let kind = if i % 7 == 0 {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    };

    TransactionRecord {
        date,
        time: ClockTime::new(cycle(8 + i % 24, 24), cycle(17 * (i % 60), 60)),
        description: format!("Imported transaction {}", i + 1),
        value: value.round_dp(2),
        amount,
        category: PATTERN_CATEGORIES[i % PATTERN_CATEGORIES.len()],
        profile: None,
        investment_type: Some(investment_type).filter(|kind| !kind.is_empty()),
        kind,
    }
}

/// `n % modulus` narrowed to a clock component.
#[allow(clippy::cast_possible_truncation)]
fn cycle(n: usize, modulus: u32) -> u32 {
    (n % modulus as usize) as u32
}
