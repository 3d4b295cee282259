use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use tx_generator::catalog::{
    is_expense_category, INCOME_CATEGORIES, INVESTMENT_CATEGORY, PATTERN_CATEGORIES,
};
use tx_generator::transaction::{CsvRow, TransactionKind};
use tx_generator::writer::{summarize_file, write_csv_file, write_records};
use tx_generator::{pattern, year};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tx-generator-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn read_rows(path: &Path) -> Vec<CsvRow> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .unwrap();
    reader.deserialize().collect::<Result<_, _>>().unwrap()
}

#[test]
fn test_pattern_matches_fixture() {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut buffer = Vec::new();
    write_records(&mut buffer, &pattern::build_rows(base, 3)).unwrap();

    let expected = fs::read_to_string("../resources/expected/pattern-3.csv").unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), expected);
}

#[test]
fn test_pattern_file() {
    let dir = scratch_dir("pattern");
    let path = dir.join("priv").join("static").join("sample_transactions.csv");
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    // an existing file is replaced, not appended to
    write_csv_file(&path, &pattern::build_rows(base, 250)).unwrap();
    write_csv_file(&path, &pattern::build_rows(base, 100)).unwrap();

    let data = fs::read_to_string(&path).unwrap();
    assert_eq!(data.lines().count(), 101);
    assert_eq!(data.matches("\r\n").count(), 101);

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 100);
    for (i, (row, date)) in rows.iter().zip(base.iter_days()).enumerate() {
        assert_eq!(row.date, date.format("%Y-%m-%d").to_string());
        assert!(PATTERN_CATEGORIES.contains(&row.category.as_str()));
        assert_eq!(row.investment_type.is_empty(), i % 4 == 0 || i % 4 == 3);
        assert!(row.profile.is_empty());
        assert!(row.value.starts_with("R$ ") && !row.value.contains('.'));
    }

    let summary = summarize_file(&path).unwrap();
    assert_eq!(summary.rows, 100);
    assert!(summary.income > Decimal::ZERO && summary.expense > summary.income);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_year_file() {
    let dir = scratch_dir("year");
    let path = dir.join("year.csv");
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let mut rng = StdRng::seed_from_u64(2025);
    let records = year::build_rows(&mut rng, start, year::DEFAULT_DAYS);
    write_csv_file(&path, &records).unwrap();

    let rows = read_rows(&path);
    assert_eq!(rows.len(), records.len());
    let salaries = rows
        .iter()
        .filter(|r| r.description == year::SALARY_DESCRIPTION)
        .count();
    let yields = rows
        .iter()
        .filter(|r| r.description == year::INVESTMENT_INCOME_DESCRIPTION)
        .count();
    assert_eq!((salaries, yields), (12, 12));
    assert!(rows.windows(2).all(|pair| pair[0].date <= pair[1].date));

    for row in &rows {
        assert!(row.value.starts_with("R$ ") && !row.value.contains('.'));
        match row.kind {
            TransactionKind::Income => assert!(
                INCOME_CATEGORIES.contains(&row.category.as_str())
                    || row.category == INVESTMENT_CATEGORY
            ),
            TransactionKind::Expense => assert!(
                is_expense_category(&row.category) || row.category == INVESTMENT_CATEGORY
            ),
        }
        assert_eq!(
            row.investment_type.is_empty(),
            row.category != INVESTMENT_CATEGORY
        );
    }

    let summary = summarize_file(&path).unwrap();
    let income: Decimal = records
        .iter()
        .filter(|r| r.kind == TransactionKind::Income)
        .map(|r| r.value)
        .sum();
    let expense: Decimal = records
        .iter()
        .filter(|r| r.kind == TransactionKind::Expense)
        .map(|r| r.value)
        .sum();
    assert_eq!(summary.rows, records.len());
    assert_eq!(summary.income, income);
    assert_eq!(summary.expense, expense);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_unwritable_path() {
    let dir = scratch_dir("blocked");
    fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("not-a-dir");
    fs::write(&blocker, "").unwrap();

    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let result = write_csv_file(&blocker.join("out.csv"), &pattern::build_rows(base, 3));
    assert!(result.is_err());

    fs::remove_dir_all(&dir).unwrap();
}
