use crate::errors::StatementResult;

pub trait Parser {
    type Output;

    fn parse(content: &str) -> StatementResult<Vec<Self::Output>>;
}
