use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};

use crate::money::{format_brl, format_decimal};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Wall-clock time of a record, rendered as `HH:MM`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Out-of-range components wrap around (`25:61` becomes `01:01`).
    #[must_use]
    pub fn new(hour: u32, minute: u32) -> Self {
        ClockTime {
            hour: hour % 24,
            minute: minute % 60,
        }
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.hour
    }

    #[must_use]
    pub fn minute(self) -> u32 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One synthetic ledger entry, destined for one CSV row.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub time: ClockTime,
    pub description: String,
    pub value: Decimal,
    /// Secondary quantity (count/multiplier)
    pub amount: Decimal,
    pub category: &'static str,
    /// Reserved; generated records never carry one
    pub profile: Option<String>,
    pub investment_type: Option<&'static str>,
    pub kind: TransactionKind,
}

impl TransactionRecord {
    #[must_use]
    pub fn is_investment(&self) -> bool {
        self.investment_type.is_some()
    }
}

impl Serialize for TransactionRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("TransactionRecord", 9)?;
        state.serialize_field("date", &self.date.format(DATE_FORMAT).to_string())?;
        state.serialize_field("time", &self.time.to_string())?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("value", &format_brl(self.value))?;
        state.serialize_field("amount", &format_decimal(self.amount))?;
        state.serialize_field("category", self.category)?;
        state.serialize_field("profile", self.profile.as_deref().unwrap_or_default())?;
        state.serialize_field("investment_type", self.investment_type.unwrap_or_default())?;
        state.serialize_field("type", &self.kind)?;
        state.end()
    }
}

/// A row as read back from a generated file, every column still textual.
#[derive(Debug, Deserialize)]
pub struct CsvRow {
    pub date: String,
    pub time: String,
    pub description: String,
    pub value: String,
    pub amount: String,
    pub category: String,
    pub profile: String,
    pub investment_type: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}
