use super::dto::{CsvColumns, CsvTransaction};
use crate::errors::{StatementParseError, StatementResult};
use crate::parsers::traits::Parser;
use csv::{ReaderBuilder, StringRecord, Trim};

pub struct CsvParser;

impl Parser for CsvParser {
    type Output = CsvTransaction;

    fn parse(content: &str) -> StatementResult<Vec<Self::Output>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| StatementParseError::ParseFailed(format!("CSV header error: {}", e)))?
            .clone();

        let columns = CsvColumns::from_headers(&headers);
        if columns.is_empty() {
            return Err(StatementParseError::MissingColumns(
                headers.iter().collect::<Vec<_>>().join(", "),
            ));
        }

        let mut transactions = Vec::new();
        let mut record = StringRecord::new();

        // Blank lines never reach here; rows of bare separators become
        // all-default records.
        loop {
            match reader.read_record(&mut record) {
                Ok(true) => transactions.push(columns.read(&record)),
                Ok(false) => break,
                Err(e) => {
                    return Err(StatementParseError::ParseFailed(format!(
                        "CSV read error: {}",
                        e
                    )));
                }
            }
        }

        Ok(transactions)
    }
}
