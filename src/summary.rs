//! Aggregates derived from a parsed statement for charts and tables.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{categories::Category, types::Transaction};

/// Colours handed out to categories in first-seen order, cycling.
pub const CATEGORY_PALETTE: [&str; 6] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
];

pub const DEFAULT_LARGE_TRANSACTION_THRESHOLD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total_debit: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringGroup {
    pub narrative: String,
    pub category: Category,
    pub count: usize,
    pub total_debit: Decimal,
    #[serde(with = "crate::types::iso_date")]
    pub last_seen: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancePoint {
    #[serde(with = "crate::types::iso_date")]
    pub date: Option<NaiveDate>,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timespan {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: i64,
}

/// Distinct categories in first-seen order.
pub fn categories_in_order(transactions: &[Transaction]) -> Vec<Category> {
    let mut seen = Vec::new();
    for transaction in transactions {
        if !seen.contains(&transaction.category) {
            seen.push(transaction.category);
        }
    }
    seen
}

/// Debit total and record count per category, first-seen order. Totals
/// saturate at `Decimal::MAX`.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = categories_in_order(transactions)
        .into_iter()
        .map(|category| CategoryTotal {
            category,
            total_debit: Decimal::ZERO,
            count: 0,
        })
        .collect();

    for transaction in transactions {
        if let Some(total) = totals.iter_mut().find(|t| t.category == transaction.category) {
            total.total_debit = total.total_debit.saturating_add(transaction.debit_amount);
            total.count += 1;
        }
    }

    totals
}

/// Stable colour per category present in the statement.
pub fn category_colors(transactions: &[Transaction]) -> Vec<(Category, &'static str)> {
    categories_in_order(transactions)
        .into_iter()
        .zip(CATEGORY_PALETTE.iter().copied().cycle())
        .collect()
}

/// Recurring transactions grouped by narrative, first-seen order.
pub fn recurring_groups(transactions: &[Transaction]) -> Vec<RecurringGroup> {
    let mut groups: Vec<RecurringGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.is_recurring) {
        let position = *index.entry(transaction.narrative.as_str()).or_insert_with(|| {
            groups.push(RecurringGroup {
                narrative: transaction.narrative.clone(),
                category: transaction.category,
                count: 0,
                total_debit: Decimal::ZERO,
                last_seen: None,
            });
            groups.len() - 1
        });

        let group = &mut groups[position];
        group.count += 1;
        group.total_debit = group.total_debit.saturating_add(transaction.debit_amount);
        group.last_seen = group.last_seen.max(transaction.date);
    }

    groups
}

/// How many recurring groups fall in each category, first-seen order.
pub fn recurring_category_summary(groups: &[RecurringGroup]) -> Vec<(Category, usize)> {
    let mut summary: Vec<(Category, usize)> = Vec::new();
    for group in groups {
        match summary.iter_mut().find(|(category, _)| *category == group.category) {
            Some((_, count)) => *count += 1,
            None => summary.push((group.category, 1)),
        }
    }
    summary
}

/// Rebuilds the running balance from a known closing balance.
///
/// Records are walked newest to oldest: each point is the balance right after
/// that record, then the record is undone (debit added back, credit taken
/// off). Points come back oldest first. Undated records count as oldest.
/// Balances saturate rather than overflow.
pub fn balance_history(transactions: &[Transaction], final_balance: Decimal) -> Vec<BalancePoint> {
    let mut newest_first: Vec<&Transaction> = transactions.iter().collect();
    newest_first.sort_by(|a, b| b.date.cmp(&a.date));

    let mut balance = final_balance;
    let mut points: Vec<BalancePoint> = newest_first
        .into_iter()
        .map(|transaction| {
            let point = BalancePoint {
                date: transaction.date,
                balance,
            };
            balance = balance
                .saturating_add(transaction.debit_amount)
                .saturating_sub(transaction.credit_amount);
            point
        })
        .collect();

    points.reverse();
    points
}

/// First and last valid date, `None` when no record has one.
pub fn timespan(transactions: &[Transaction]) -> Option<Timespan> {
    let mut dates = transactions.iter().filter_map(|t| t.date);
    let first = dates.next()?;
    let (start, end) = dates.fold((first, first), |(start, end), date| {
        (start.min(date), end.max(date))
    });

    Some(Timespan {
        start,
        end,
        days: (end - start).num_days(),
    })
}

/// Debits strictly above `threshold`, oldest first.
pub fn large_transactions(transactions: &[Transaction], threshold: Decimal) -> Vec<&Transaction> {
    let mut large: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.debit_amount > threshold)
        .collect();
    large.sort_by_key(|t| t.date);
    large
}
