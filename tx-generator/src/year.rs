//! Randomized generator covering a window of consecutive days: a monthly salary, monthly
//! investment income and investment contribution, and a handful of daily expenses.
//!
//! The random source is passed in, so a seeded generator reproduces the same rows.

use chrono::{Datelike, NaiveDate};
use log::debug;
use rand::Rng;
use rust_decimal::Decimal;

use crate::catalog::{EXPENSE_CATEGORIES, INCOME_CATEGORIES, INVESTMENT_CATEGORY, INVESTMENT_TYPES};
use crate::money::from_cents;
use crate::transaction::{ClockTime, TransactionKind, TransactionRecord};

pub const DEFAULT_START: &str = "2025-01-01";
pub const DEFAULT_DAYS: usize = 365;

pub const SALARY_DESCRIPTION: &str = "Salário mensal";
pub const INVESTMENT_INCOME_DESCRIPTION: &str = "Rendimento de investimentos";
pub const INVESTMENT_EXPENSE_DESCRIPTION: &str = "Aplicação em investimento";

pub const SALARY_DAY: u32 = 5;
pub const INVESTMENT_INCOME_DAY: u32 = 1;
pub const INVESTMENT_EXPENSE_DAY: u32 = 15;

/// Monthly salary before the random adjustment, in cents.
pub const BASE_INCOME_CENTS: i64 = 400_000;

/// Builds rows for `days` consecutive dates starting at `start`, in date order.
pub fn build_rows<R>(rng: &mut R, start: NaiveDate, days: usize) -> Vec<TransactionRecord>
where
    R: Rng + ?Sized,
{
    let mut rows = Vec::new();
    for date in start.iter_days().take(days) {
        build_day(rng, date, &mut rows);
    }
    debug!("Built {} rows over {} days from {}", rows.len(), days, start);
    rows
}

fn build_day<R>(rng: &mut R, date: NaiveDate, rows: &mut Vec<TransactionRecord>)
where
    R: Rng + ?Sized,
{
    let day = date.day();

    if day == SALARY_DAY {
        let cents = BASE_INCOME_CENTS + rng.gen_range(-20_000..=50_000);
        rows.push(TransactionRecord {
            date,
            time: ClockTime::new(9, 0),
            description: SALARY_DESCRIPTION.to_owned(),
            value: from_cents(cents),
            amount: Decimal::ONE,
            category: *pick(rng, &INCOME_CATEGORIES),
            profile: None,
            investment_type: None,
            kind: TransactionKind::Income,
        });
    }

    if day == INVESTMENT_INCOME_DAY {
        rows.push(TransactionRecord {
            date,
            time: ClockTime::new(0, 1),
            description: INVESTMENT_INCOME_DESCRIPTION.to_owned(),
            value: from_cents(rng.gen_range(5_000..=20_000)),
            amount: Decimal::ONE,
            category: INVESTMENT_CATEGORY,
            profile: None,
            investment_type: Some(*pick(rng, &INVESTMENT_TYPES)),
            kind: TransactionKind::Income,
        });
    }

    let expense_count = if day % 3 == 0 {
        rng.gen_range(0..=3)
    } else {
        rng.gen_range(0..=2)
    };
    for _ in 0..expense_count {
        let value = from_cents(rng.gen_range(1_500..=8_000));
        let time = ClockTime::new(rng.gen_range(8..=22), rng.gen_range(0..=59));
        let category = pick(rng, &EXPENSE_CATEGORIES);
        rows.push(TransactionRecord {
            date,
            time,
            description: (*pick(rng, category.descriptions)).to_owned(),
            value,
            amount: Decimal::ONE,
            category: category.name,
            profile: None,
            investment_type: None,
            kind: TransactionKind::Expense,
        });
    }

    if day == INVESTMENT_EXPENSE_DAY {
        rows.push(TransactionRecord {
            date,
            time: ClockTime::new(14, 30),
            description: INVESTMENT_EXPENSE_DESCRIPTION.to_owned(),
            value: from_cents(rng.gen_range(30_000..=60_000)),
            amount: Decimal::ONE,
            category: INVESTMENT_CATEGORY,
            profile: None,
            investment_type: Some(*pick(rng, &INVESTMENT_TYPES)),
            kind: TransactionKind::Expense,
        });
    }
}

/// Uniform choice from a fixed, non-empty table.
fn pick<'a, T, R>(rng: &mut R, items: &'a [T]) -> &'a T
where
    R: Rng + ?Sized,
{
    &items[rng.gen_range(0..items.len())]
}
