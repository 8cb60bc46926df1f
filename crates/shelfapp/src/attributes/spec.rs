//! Property definitions as supplied by the data source.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared type of a property's values.
///
/// This decides which operators may be used against the property (see
/// [`crate::operators::compat`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    #[serde(rename = "string")]
    Text,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "enumerated")]
    Enumerated,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Text => "string",
            ValueType::Number => "number",
            ValueType::Enumerated => "enumerated",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single property definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Allowed values, only for `Enumerated` properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl Attribute {
    pub fn new(id: u32, name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            id,
            name: name.into(),
            value_type,
            values: None,
        }
    }

    pub fn enumerated<I, S>(id: u32, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            value_type: ValueType::Enumerated,
            values: Some(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Allowed values; empty for non-enumerated properties.
    pub fn allowed_values(&self) -> &[String] {
        self.values.as_deref().unwrap_or(&[])
    }
}
