use super::dto::{QifTransaction, QifTransactionRaw};
use crate::errors::{StatementParseError, StatementResult};
use crate::parsers::traits::Parser;

const RECORD_TERMINATOR: char = '^';

pub struct QifParser;

impl Parser for QifParser {
    type Output = QifTransaction;

    fn parse(content: &str) -> StatementResult<Vec<Self::Output>> {
        let mut transactions = Vec::new();
        let mut current = QifTransactionRaw::default();
        let mut terminators = 0usize;

        for line in content.lines() {
            let line = line.trim();
            let mut chars = line.chars();
            let Some(tag) = chars.next() else {
                continue;
            };

            if tag == RECORD_TERMINATOR {
                terminators += 1;
                match QifTransaction::from_raw(std::mem::take(&mut current)) {
                    Some(txn) => transactions.push(txn),
                    None => tracing::debug!(record = terminators, "discarding QIF record without date or amount"),
                }
                continue;
            }

            if !current.apply(tag, chars.as_str().trim()) {
                tracing::trace!(%tag, "ignoring QIF line");
            }
        }

        if terminators == 0 {
            return Err(StatementParseError::MissingTerminator);
        }

        Ok(transactions)
    }
}
