//! Parse → filter → categorize → detect recurring.

use serde::{Deserialize, Serialize};

use crate::{
    builder::FileFormat,
    categories::categorize,
    errors::StatementResult,
    recurring::{RecurrenceConfig, detect_recurring_with, recurring_count},
    types::Transaction,
};

/// Everything a presentation layer needs from one uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub transactions: Vec<Transaction>,
    pub recurring_count: usize,
}

impl Statement {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn recurring(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(|t| t.is_recurring)
    }

    pub fn to_json(&self) -> StatementResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Runs the whole pipeline with the default recurrence settings.
pub fn parse_statement(
    content: &str,
    format: FileFormat,
    ignore_zero_amounts: bool,
) -> StatementResult<Statement> {
    parse_statement_with(content, format, ignore_zero_amounts, &RecurrenceConfig::default())
}

/// Runs the whole pipeline.
///
/// Zero-amount records are dropped before categorization so that recurrence
/// grouping only ever sees the records that are kept.
pub fn parse_statement_with(
    content: &str,
    format: FileFormat,
    ignore_zero_amounts: bool,
    config: &RecurrenceConfig,
) -> StatementResult<Statement> {
    if content.trim().is_empty() {
        return Ok(Statement::default());
    }

    let parsed = format.parse::<Transaction>(content).inspect_err(|e| {
        tracing::warn!(?format, error = %e, "statement could not be parsed");
    })?;
    let parsed_count = parsed.len();

    let transactions: Vec<Transaction> = parsed
        .into_iter()
        .filter(|t| !(ignore_zero_amounts && t.is_zero_amount()))
        .map(|mut t| {
            t.category = categorize(&t.narrative);
            t
        })
        .collect();

    let transactions = detect_recurring_with(transactions, config);
    let recurring_count = recurring_count(&transactions);

    tracing::info!(
        ?format,
        parsed = parsed_count,
        kept = transactions.len(),
        recurring = recurring_count,
        "statement parsed"
    );

    Ok(Statement {
        transactions,
        recurring_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Category;
    use crate::errors::StatementParseError;
    use chrono::NaiveDate;
    use rstest::rstest;

    const GYM_QIF: &str = "D01/01/2024\nT-50.00\nMGym Membership\n^\nD01/02/2024\nT-50.00\nMGym Membership\n^\nD01/03/2024\nT-50.00\nMGym Membership\n^\n";

    const ZERO_HEAVY_CSV: &str = "Date,Narrative,Debit Amount,Credit Amount
01/01/2024,Account Fee,0,0
05/02/2024,Account Fee,0,0
20/03/2024,Account Fee,0,0
10/01/2024,Coles,12.00,0
";

    #[test]
    fn test_qif_gym_membership_scenario() {
        let statement = parse_statement(GYM_QIF, FileFormat::Qif, false).unwrap();

        assert_eq!(statement.transactions.len(), 3);
        assert_eq!(statement.recurring_count, 3);
        for txn in &statement.transactions {
            assert_eq!(txn.category, Category::Other);
            assert!(txn.is_recurring);
            assert_eq!(txn.debit_amount.to_string(), "50.00");
        }
        assert_eq!(statement.transactions[1].date, NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_csv_single_grocery_scenario() {
        let content = "Date,Narrative,Debit Amount,Credit Amount\n01/06/2024,Woolworths Metro,45.20,0\n";
        let statement = parse_statement(content, FileFormat::Csv, false).unwrap();

        assert_eq!(statement.transactions.len(), 1);
        let txn = &statement.transactions[0];
        assert_eq!(txn.category, Category::Groceries);
        assert!(!txn.is_recurring);
        assert_eq!(txn.iso_date(), "2024-06-01");
        assert_eq!(statement.recurring_count, 0);
    }

    #[rstest]
    #[case("", FileFormat::Csv)]
    #[case("", FileFormat::Qif)]
    #[case("  \n\n ", FileFormat::Qif)]
    fn test_empty_input_scenario(#[case] content: &str, #[case] format: FileFormat) {
        let statement = parse_statement(content, format, true).unwrap();
        assert!(statement.is_empty());
        assert_eq!(statement.recurring_count, 0);
    }

    #[test]
    fn test_qif_without_terminators_scenario() {
        let content = "D01/01/2024\nT-50.00\nMGym Membership\nD01/02/2024\nT-50.00\nMGym Membership\n";
        let result = parse_statement(content, FileFormat::Qif, false);
        assert!(matches!(result, Err(StatementParseError::MissingTerminator)));
    }

    #[test]
    fn test_csv_content_declared_as_qif_fails() {
        let content = "Date,Narrative,Debit Amount,Credit Amount\n01/06/2024,Coles,1,0\n";
        assert!(parse_statement(content, FileFormat::Qif, false).is_err());
    }

    #[test]
    fn test_ignore_zero_amounts_changes_recurring_count() {
        let kept = parse_statement(ZERO_HEAVY_CSV, FileFormat::Csv, false).unwrap();
        assert_eq!(kept.transactions.len(), 4);
        // three zero fees share a narrative and identical (zero) debits
        assert_eq!(kept.recurring_count, 3);

        let filtered = parse_statement(ZERO_HEAVY_CSV, FileFormat::Csv, true).unwrap();
        assert_eq!(filtered.transactions.len(), 1);
        assert_eq!(filtered.recurring_count, 0);
        assert_eq!(filtered.transactions[0].narrative, "Coles");
    }

    #[test]
    fn test_zero_filter_runs_before_grouping() {
        // Without the zero record the two bills are 31 days apart.
        let content = "Date,Narrative,Debit Amount,Credit Amount
01/01/2024,AGL,120.00,0
16/01/2024,AGL,0,0
01/02/2024,AGL,118.00,0
";
        let kept = parse_statement(content, FileFormat::Csv, false).unwrap();
        assert_eq!(kept.recurring_count, 0);

        let filtered = parse_statement(content, FileFormat::Csv, true).unwrap();
        assert_eq!(filtered.recurring_count, 2);
        assert!(filtered.transactions.iter().all(|t| t.category == Category::Utilities));
    }

    #[rstest]
    #[case(false, 2)]
    #[case(true, 1)]
    fn test_separator_only_rows_are_zero_records(#[case] ignore_zero: bool, #[case] expected: usize) {
        let content = "Date,Narrative,Debit Amount,Credit Amount\n,,,\n01/01/2024,X,1,0\n";
        let statement = parse_statement(content, FileFormat::Csv, ignore_zero).unwrap();
        assert_eq!(statement.transactions.len(), expected);
    }

    #[test]
    fn test_amounts_near_decimal_max_do_not_panic() {
        let content = "Date,Narrative,Debit Amount,Credit Amount
01/01/2024,Big,5e28,0
16/01/2024,Big,5e28,0
20/04/2024,Big,5e28,0
";
        let statement = parse_statement(content, FileFormat::Csv, false).unwrap();
        assert_eq!(statement.transactions.len(), 3);
        assert_eq!(statement.recurring_count, 0);
    }

    #[test]
    fn test_invalid_dates_are_kept() {
        let content = "Date,Narrative,Debit Amount,Credit Amount\n2024-06-01,Coles,1,0\n,Aldi,2,0\n";
        let statement = parse_statement(content, FileFormat::Csv, true).unwrap();
        assert_eq!(statement.transactions.len(), 2);
        assert!(statement.transactions.iter().all(|t| t.date.is_none()));
    }

    #[test]
    fn test_statement_recurring_iterator_and_json() {
        let statement = parse_statement(GYM_QIF, FileFormat::Qif, true).unwrap();
        assert_eq!(statement.recurring().count(), statement.recurring_count);

        let json = statement.to_json().unwrap();
        assert!(json.contains("\"recurring_count\":3"));
        assert!(json.contains("\"2024-03-01\""));

        let back: Statement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, statement);
    }

    #[test]
    fn test_custom_recurrence_config() {
        let config = RecurrenceConfig {
            min_similar_amount_occurrences: 4,
            gap_bands: Vec::new(),
            ..RecurrenceConfig::default()
        };
        let statement = parse_statement_with(GYM_QIF, FileFormat::Qif, true, &config).unwrap();
        assert_eq!(statement.recurring_count, 0);
    }
}
