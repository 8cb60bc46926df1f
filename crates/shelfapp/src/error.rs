use crate::attributes::ValueType;
use crate::operators::OperatorId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Unknown property: {0}")]
    UnknownAttribute(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Operator '{operator}' is not available for {value_type} properties")]
    OperatorNotAllowed {
        operator: OperatorId,
        value_type: ValueType,
    },

    #[error("Incomplete filter: {0}")]
    IncompleteClause(String),

    #[error("Value '{value}' is not one of the values of '{property}'")]
    ValueNotAllowed { property: String, value: String },

    #[error("Invalid datastore: {0}")]
    InvalidDatastore(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
