mod dto;
mod parser;

pub mod prelude {
    pub use super::dto::CsvTransaction;
    pub use super::parser::CsvParser;
}
