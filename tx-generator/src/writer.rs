use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Terminator, Trim, WriterBuilder};
use log::info;
use rust_decimal::Decimal;

use crate::error::GenError;
use crate::money::{format_brl, parse_brl};
use crate::transaction::{CsvRow, TransactionKind, TransactionRecord};

pub const DEFAULT_OUTPUT_PATH: &str = "priv/static/sample_transactions.csv";

pub const FIELDNAMES: [&str; 9] = [
    "date",
    "time",
    "description",
    "value",
    "amount",
    "category",
    "profile",
    "investment_type",
    "type",
];

/// Totals recomputed from the `value` column of a generated file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub rows: usize,
    pub income: Decimal,
    pub expense: Decimal,
}

impl Summary {
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.income - self.expense
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total income: {}, total expenses: {}, balance: {}",
            format_brl(self.income),
            format_brl(self.expense),
            format_brl(self.balance())
        )
    }
}

/// Writes the header followed by one row per record.
///
/// # Errors
/// Errors when serialization fails or the underlying writer does.
pub fn write_records<W: io::Write>(
    writer: W,
    records: &[TransactionRecord],
) -> Result<(), GenError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    writer.write_record(&FIELDNAMES)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Replaces the file at `path` with the serialized records, creating missing parent
/// directories. Nothing is written unless every record serializes.
///
/// # Errors
/// Errors when the directories or the file cannot be created.
pub fn write_csv_file(path: &Path, records: &[TransactionRecord]) -> Result<(), GenError> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, buffer)?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Reads a generated CSV back and totals its `value` column per transaction type.
///
/// # Errors
/// Errors on malformed CSV or a `value` that is not Brazilian-formatted money.
pub fn summarize<R: io::Read>(reader: R) -> Result<Summary, GenError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut summary = Summary::default();
    for row in reader.deserialize() {
        let row: CsvRow = row?;
        let value = parse_brl(&row.value)?;
        match row.kind {
            TransactionKind::Income => summary.income += value,
            TransactionKind::Expense => summary.expense += value,
        }
        summary.rows += 1;
    }
    Ok(summary)
}

/// # Errors
/// Errors when the file cannot be opened or fails [`summarize`].
pub fn summarize_file(path: &Path) -> Result<Summary, GenError> {
    summarize(fs::File::open(path)?)
}
