use crate::{builder::ParsedTransaction, categories::Category, parsers::prelude::*};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Amounts below this magnitude count as zero when filtering.
pub const ZERO_AMOUNT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 3);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// `None` when the source date could not be read as `dd/MM/yyyy`.
    #[serde(with = "iso_date")]
    pub date: Option<NaiveDate>,
    pub narrative: String,
    pub debit_amount: Decimal,
    pub credit_amount: Decimal,
    pub category: Category,
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_hint: Option<String>,
}

impl Transaction {
    pub fn new(date: Option<NaiveDate>, narrative: &str, debit_amount: Decimal, credit_amount: Decimal) -> Self {
        Transaction {
            date,
            narrative: narrative.trim().to_string(),
            debit_amount,
            credit_amount,
            category: Category::Other,
            is_recurring: false,
            category_hint: None,
        }
    }

    /// Both amounts within `ZERO_AMOUNT_TOLERANCE` of zero.
    pub fn is_zero_amount(&self) -> bool {
        self.debit_amount.abs() < ZERO_AMOUNT_TOLERANCE
            && self.credit_amount.abs() < ZERO_AMOUNT_TOLERANCE
    }

    pub fn is_debit(&self) -> bool {
        !self.debit_amount.is_zero()
    }

    /// ISO `YYYY-MM-DD`, or an empty string for an unreadable date.
    pub fn iso_date(&self) -> String {
        self.date
            .map(|d| d.format(iso_date::FORMAT).to_string())
            .unwrap_or_default()
    }
}

impl From<ParsedTransaction> for Transaction {
    fn from(parsed: ParsedTransaction) -> Self {
        match parsed {
            ParsedTransaction::Csv(csv) => csv.into(),
            ParsedTransaction::Qif(qif) => qif.into(),
        }
    }
}

impl From<CsvTransaction> for Transaction {
    fn from(stmt: CsvTransaction) -> Self {
        Transaction::new(
            parse_date(&stmt.date),
            &stmt.narrative,
            stmt.debit_amount.parse_or_zero(),
            stmt.credit_amount.parse_or_zero(),
        )
    }
}

impl From<QifTransaction> for Transaction {
    fn from(stmt: QifTransaction) -> Self {
        Transaction {
            category_hint: stmt.category_hint,
            ..Transaction::new(
                parse_date(&stmt.date),
                &stmt.narrative,
                stmt.debit_amount.parse_or_zero(),
                stmt.credit_amount.parse_or_zero(),
            )
        }
    }
}

fn parse_date(date: &StatementDate) -> Option<NaiveDate> {
    let parsed = date.parse();
    if parsed.is_none() {
        tracing::debug!(date = date.as_str(), "unreadable date, keeping record without one");
    }
    parsed
}

/// Serializes `Option<NaiveDate>` as `YYYY-MM-DD`, with `""` for `None`.
pub(crate) mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.collect_str(&date.format(FORMAT)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(raw.trim(), FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
