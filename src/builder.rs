use std::fs;

use crate::{
    errors::{StatementParseError, StatementResult},
    parsers::prelude::*,
    pipeline::{Statement, parse_statement_with},
    recurring::RecurrenceConfig,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParsedTransaction {
    Csv(CsvTransaction),
    Qif(QifTransaction),
}

/// Source format of an export. Always chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileFormat {
    #[serde(rename = "csv")]
    Csv,
    #[serde(rename = "qif")]
    Qif,
}

impl FileFormat {
    pub(crate) fn parse_raw(&self, content: &str) -> StatementResult<Vec<ParsedTransaction>> {
        match self {
            FileFormat::Csv => {
                let transactions = CsvParser::parse(content)?;
                Ok(transactions.into_iter().map(ParsedTransaction::Csv).collect())
            }
            FileFormat::Qif => {
                let transactions = QifParser::parse(content)?;
                Ok(transactions.into_iter().map(ParsedTransaction::Qif).collect())
            }
        }
    }

    pub(crate) fn parse<T>(&self, content: &str) -> StatementResult<Vec<T>>
    where
        T: From<ParsedTransaction>,
    {
        Ok(self.parse_raw(content)?.into_iter().map(T::from).collect())
    }
}

impl std::str::FromStr for FileFormat {
    type Err = StatementParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(FileFormat::Csv),
            "qif" => Ok(FileFormat::Qif),
            other => Err(StatementParseError::ParseFailed(format!(
                "Unknown file format: '{other}'"
            ))),
        }
    }
}

#[derive(Default)]
pub struct ParserBuilder {
    content: Option<String>,
    filepath: Option<String>,
    format: Option<FileFormat>,
    ignore_zero_amounts: bool,
    recurrence: RecurrenceConfig,
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    /// Read from this path when no content was given.
    pub fn filepath(mut self, filepath: &str) -> Self {
        self.filepath = Some(filepath.to_string());
        self
    }

    pub fn format(mut self, format: FileFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Drop records whose debit and credit are both zero before analysis.
    pub fn ignore_zero_amounts(mut self, ignore: bool) -> Self {
        self.ignore_zero_amounts = ignore;
        self
    }

    pub fn recurrence(mut self, config: RecurrenceConfig) -> Self {
        self.recurrence = config;
        self
    }

    /// Parses, categorizes and flags recurring transactions.
    pub fn parse(self) -> StatementResult<Statement> {
        let format = self.format.ok_or(StatementParseError::MissingFormat)?;
        let ignore_zero_amounts = self.ignore_zero_amounts;
        let recurrence = self.recurrence.clone();
        let content = self.read_content()?;

        parse_statement_with(&content, format, ignore_zero_amounts, &recurrence)
    }

    /// Parses only, without categories or recurrence flags.
    pub fn parse_into<T>(self) -> StatementResult<Vec<T>>
    where
        T: From<ParsedTransaction>,
    {
        let format = self.format.ok_or(StatementParseError::MissingFormat)?;
        let content = self.read_content()?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        format.parse(&content)
    }

    fn read_content(self) -> StatementResult<String> {
        self.content
            .map(Ok)
            .unwrap_or_else(|| {
                self.filepath
                    .ok_or(StatementParseError::MissingContentAndFilepath)
                    .and_then(|path| fs::read_to_string(path).map_err(Into::into))
            })
    }
}
