//! Parse bank CSV and QIF exports, categorize spending and flag recurring
//! transactions.
//!
//! ```rust,ignore
//! use statement_insights::{FileFormat, ParserBuilder};
//!
//! let statement = ParserBuilder::new()
//!     .content(&file_content)
//!     .format(FileFormat::Csv)
//!     .ignore_zero_amounts(true)
//!     .parse()?;
//!
//! println!("{} recurring", statement.recurring_count);
//! ```

mod builder;
mod types;

pub mod categories;
pub mod errors;
pub mod parsers;
pub mod pipeline;
pub mod recurring;
pub mod store;
pub mod summary;

pub use builder::{FileFormat, ParsedTransaction, ParserBuilder};
pub use categories::{Category, categorize};
pub use parsers::prelude::*;
pub use pipeline::{Statement, parse_statement, parse_statement_with};
pub use recurring::{RecurrenceConfig, detect_recurring, detect_recurring_with};
pub use types::{Transaction, ZERO_AMOUNT_TOLERANCE};
