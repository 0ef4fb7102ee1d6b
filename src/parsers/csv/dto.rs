use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::parsers::types::{StatementAmount, StatementDate};

pub(super) const DATE_COLUMN: &str = "Date";
pub(super) const NARRATIVE_COLUMN: &str = "Narrative";
pub(super) const DEBIT_COLUMN: &str = "Debit Amount";
pub(super) const CREDIT_COLUMN: &str = "Credit Amount";

/// Positions of the known columns in the header row. Column names are matched
/// case-sensitively; any of them may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct CsvColumns {
    date: Option<usize>,
    narrative: Option<usize>,
    debit_amount: Option<usize>,
    credit_amount: Option<usize>,
}

impl CsvColumns {
    pub(super) fn from_headers(headers: &StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|h| h == name);

        CsvColumns {
            date: position(DATE_COLUMN),
            narrative: position(NARRATIVE_COLUMN),
            debit_amount: position(DEBIT_COLUMN),
            credit_amount: position(CREDIT_COLUMN),
        }
    }

    pub(super) fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Reads one row; short rows leave the missing fields at their defaults.
    pub(super) fn read(&self, record: &StringRecord) -> CsvTransaction {
        let field = |index: Option<usize>| {
            index
                .and_then(|i| record.get(i))
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
        };

        CsvTransaction {
            date: field(self.date).unwrap_or_default().into(),
            narrative: field(self.narrative).unwrap_or_default(),
            debit_amount: field(self.debit_amount).map(Into::into).unwrap_or_default(),
            credit_amount: field(self.credit_amount).map(Into::into).unwrap_or_default(),
        }
    }
}

/// One data row of a bank CSV export, fields still as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvTransaction {
    pub date: StatementDate,
    pub narrative: String,
    pub debit_amount: StatementAmount,
    pub credit_amount: StatementAmount,
}
