mod dto;
mod parser;

pub mod prelude {
    pub use super::dto::QifTransaction;
    pub use super::parser::QifParser;
}
