//! Flags transactions that look like bills or subscriptions.

use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::StatementResult;
use crate::types::Transaction;

/// Tunables for [`detect_recurring_with`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurrenceConfig {
    /// Day gaps between consecutive occurrences that fit a monthly bill.
    pub gap_bands: Vec<RangeInclusive<i64>>,
    /// Largest allowed distance from the group mean, as a fraction of it.
    pub amount_tolerance: Decimal,
    /// Groups this large recur on similar amounts alone.
    pub min_similar_amount_occurrences: usize,
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        RecurrenceConfig {
            // monthly, same or adjacent month, one skipped month
            gap_bands: vec![20..=40, 1..=10, 50..=70],
            amount_tolerance: Decimal::new(25, 2),
            min_similar_amount_occurrences: 3,
        }
    }
}

impl RecurrenceConfig {
    /// Reads overrides from JSON; omitted fields keep their defaults.
    pub fn from_json(json: &str) -> StatementResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn is_monthly_gap(&self, days: i64) -> bool {
        self.gap_bands.iter().any(|band| band.contains(&days))
    }

    /// Every consecutive gap fits a band. Undated members break the chain.
    fn is_monthly(&self, group: &[&Transaction]) -> bool {
        group.windows(2).all(|pair| match (pair[0].date, pair[1].date) {
            (Some(earlier), Some(later)) => self.is_monthly_gap((later - earlier).num_days()),
            _ => false,
        })
    }

    /// Totals past `Decimal::MAX` count as not similar.
    fn has_similar_amounts(&self, group: &[&Transaction]) -> bool {
        let Some(total) = group
            .iter()
            .try_fold(Decimal::ZERO, |acc, t| acc.checked_add(t.debit_amount))
        else {
            return false;
        };
        let mean = total / Decimal::from(group.len());
        let Some(allowed) = mean.checked_mul(self.amount_tolerance) else {
            return false;
        };

        group
            .iter()
            .all(|t| (t.debit_amount - mean).abs() <= allowed)
    }

    fn is_recurring(&self, group: &[&Transaction]) -> bool {
        if group.len() < 2 {
            return false;
        }

        self.is_monthly(group)
            || (group.len() >= self.min_similar_amount_occurrences && self.has_similar_amounts(group))
    }
}

/// [`detect_recurring_with`] using the default configuration.
pub fn detect_recurring(transactions: Vec<Transaction>) -> Vec<Transaction> {
    detect_recurring_with(transactions, &RecurrenceConfig::default())
}

/// Sets `is_recurring` on every transaction, keeping count and order.
///
/// Transactions are grouped by exact narrative. A group recurs when all the
/// gaps between its dates fit a monthly band, or when it has enough members
/// whose debits all sit close to the group mean.
pub fn detect_recurring_with(
    mut transactions: Vec<Transaction>,
    config: &RecurrenceConfig,
) -> Vec<Transaction> {
    let recurring: HashSet<String> = {
        let mut groups: HashMap<&str, Vec<&Transaction>> = HashMap::new();
        for transaction in &transactions {
            groups.entry(transaction.narrative.as_str()).or_default().push(transaction);
        }

        groups
            .into_iter()
            .filter_map(|(narrative, mut group)| {
                // Undated members sort first.
                group.sort_by_key(|t| t.date);
                config.is_recurring(&group).then(|| narrative.to_string())
            })
            .collect()
    };

    for transaction in &mut transactions {
        transaction.is_recurring = recurring.contains(&transaction.narrative);
    }

    tracing::debug!(
        groups = recurring.len(),
        transactions = transactions.iter().filter(|t| t.is_recurring).count(),
        "recurring detection finished"
    );

    transactions
}

/// Number of transactions flagged as recurring.
pub fn recurring_count(transactions: &[Transaction]) -> usize {
    transactions.iter().filter(|t| t.is_recurring).count()
}
