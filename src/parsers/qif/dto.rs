use serde::{Deserialize, Serialize};

use crate::parsers::types::{StatementAmount, StatementDate};

/// Fields collected from the tagged lines of one QIF record, before `^`.
#[derive(Debug, Default)]
pub(super) struct QifTransactionRaw {
    pub(super) date: Option<String>,
    pub(super) amount: Option<String>,
    pub(super) payee: Option<String>,
    pub(super) memo: Option<String>,
    pub(super) category: Option<String>,
}

impl QifTransactionRaw {
    /// Applies one tagged line. Returns `false` for tags this parser ignores.
    pub(super) fn apply(&mut self, tag: char, value: &str) -> bool {
        let slot = match tag {
            'D' => &mut self.date,
            'T' => &mut self.amount,
            'P' => &mut self.payee,
            'M' => &mut self.memo,
            'L' => &mut self.category,
            _ => return false,
        };
        *slot = Some(value.to_string());
        true
    }
}

/// One QIF record with its single signed amount routed by sign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QifTransaction {
    pub date: StatementDate,
    pub narrative: String,
    pub debit_amount: StatementAmount,
    pub credit_amount: StatementAmount,
    pub category_hint: Option<String>,
}

impl QifTransaction {
    /// `None` unless both a date and an amount were seen.
    pub(super) fn from_raw(raw: QifTransactionRaw) -> Option<Self> {
        let date = raw.date?;
        let amount = raw.amount?;
        let amount = amount.trim();

        let (debit_amount, credit_amount) = match amount.strip_prefix('-') {
            Some(magnitude) => (magnitude.into(), StatementAmount::zero()),
            None => (
                StatementAmount::zero(),
                amount.strip_prefix('+').unwrap_or(amount).into(),
            ),
        };

        Some(QifTransaction {
            date: date.into(),
            narrative: raw.payee.or(raw.memo).unwrap_or_default(),
            debit_amount,
            credit_amount,
            category_hint: raw.category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn raw(date: Option<&str>, amount: Option<&str>) -> QifTransactionRaw {
        QifTransactionRaw {
            date: date.map(str::to_string),
            amount: amount.map(str::to_string),
            ..Default::default()
        }
    }

    #[rstest]
    #[case("-50.00", "50.00", "0")]
    #[case("50.00", "0", "50.00")]
    #[case("+12.5", "0", "12.5")]
    #[case("0.00", "0", "0.00")]
    #[case(" -1,200.00 ", "1,200.00", "0")]
    fn test_from_raw_routes_amount_by_sign(
        #[case] amount: &str,
        #[case] debit: &str,
        #[case] credit: &str,
    ) {
        let txn = QifTransaction::from_raw(raw(Some("01/01/2024"), Some(amount))).unwrap();
        assert_eq!(txn.debit_amount.as_str(), debit);
        assert_eq!(txn.credit_amount.as_str(), credit);
    }

    #[rstest]
    #[case(None, Some("-5"))]
    #[case(Some("01/01/2024"), None)]
    #[case(None, None)]
    fn test_from_raw_requires_date_and_amount(
        #[case] date: Option<&str>,
        #[case] amount: Option<&str>,
    ) {
        assert!(QifTransaction::from_raw(raw(date, amount)).is_none());
    }

    #[test]
    fn test_payee_preferred_over_memo() {
        let mut record = raw(Some("01/01/2024"), Some("-5"));
        record.memo = Some("card purchase".to_string());
        record.payee = Some("Netflix".to_string());

        let txn = QifTransaction::from_raw(record).unwrap();
        assert_eq!(txn.narrative, "Netflix");
    }

    #[test]
    fn test_memo_used_without_payee() {
        let mut record = raw(Some("01/01/2024"), Some("-5"));
        record.memo = Some("Gym Membership".to_string());
        record.category = Some("Health:Fitness".to_string());

        let txn = QifTransaction::from_raw(record).unwrap();
        assert_eq!(txn.narrative, "Gym Membership");
        assert_eq!(txn.category_hint.as_deref(), Some("Health:Fitness"));
    }

    #[test]
    fn test_apply_ignores_unknown_tags() {
        let mut record = QifTransactionRaw::default();
        assert!(record.apply('D', "01/01/2024"));
        assert!(!record.apply('N', "1234"));
        assert!(!record.apply('!', "Type:Bank"));
        assert_eq!(record.date.as_deref(), Some("01/01/2024"));
    }
}
