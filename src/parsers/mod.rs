pub mod csv;
pub mod qif;
pub mod traits;
pub mod types;

pub mod prelude {
    pub use super::csv::prelude::*;
    pub use super::qif::prelude::*;
    pub use super::traits::Parser;
    pub use super::types::{StatementAmount, StatementDate};
}
