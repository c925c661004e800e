use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid boolean operator: {0}")]
    InvalidBoolOp(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Select at least one attribute")]
    EmptyProjection,
}
