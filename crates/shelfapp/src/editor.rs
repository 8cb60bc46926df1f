//! # Filter Form
//!
//! Turns raw user input into a well-formed [`FilterClause`]. This is where a
//! UI's form validation lives, kept free of any UI so every client builds
//! clauses the same way.
//!
//! ## Rules
//!
//! 1. Property and operator must both be given.
//! 2. The property is looked up by id or by name.
//! 3. The operator must be one the data source offers *and* legal for the
//!    property's type (see [`available_operators`]).
//! 4. `any` / `none` take no value; whatever was typed is dropped.
//! 5. Every other operator needs a non-blank value. Values are trimmed.
//! 6. `in` splits its value on the separator (`,` by default), trims each
//!    piece and drops empty pieces.
//! 7. Values for enumerated properties must be among the property's values.

use crate::attributes::{Attribute, ValueType};
use crate::error::{Result, ShelfError};
use crate::filter::{ComparisonValue, FilterClause};
use crate::operators::{compat, Arity, Operator, OperatorId};
use crate::store::DataSource;

pub const DEFAULT_SEPARATOR: &str = ",";

/// The data source's operators that may be used against `attribute`, in the
/// order the data source lists them.
pub fn available_operators<'a>(operators: &'a [Operator], attribute: &Attribute) -> Vec<&'a Operator> {
    operators
        .iter()
        .filter(|op| {
            op.operator_id()
                .is_some_and(|id| compat::is_legal(attribute.value_type, id))
        })
        .collect()
}

/// Raw filter input as typed by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    /// Property id or name.
    pub property: String,
    /// Operator wire id (e.g. `greater_than`).
    pub operator: String,
    /// Comparison value; for `in`, separated values.
    pub value: String,
}

impl FilterForm {
    pub fn new(property: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            operator: operator.into(),
            value: String::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Build a clause using the default `,` separator for `in` values.
    pub fn build<S: DataSource + ?Sized>(&self, source: &S) -> Result<FilterClause> {
        self.build_with_separator(source, DEFAULT_SEPARATOR)
    }

    pub fn build_with_separator<S: DataSource + ?Sized>(
        &self,
        source: &S,
        separator: &str,
    ) -> Result<FilterClause> {
        let property_key = self.property.trim();
        if property_key.is_empty() {
            return Err(ShelfError::IncompleteClause(
                "no property selected".to_string(),
            ));
        }
        let operator_key = self.operator.trim();
        if operator_key.is_empty() {
            return Err(ShelfError::IncompleteClause(
                "no operator selected".to_string(),
            ));
        }

        let attribute = source
            .catalog()
            .resolve(property_key)
            .ok_or_else(|| ShelfError::UnknownAttribute(property_key.to_string()))?;
        let operator: OperatorId = operator_key.parse()?;

        let offered = available_operators(source.operators(), attribute)
            .iter()
            .any(|op| op.operator_id() == Some(operator));
        if !offered {
            return Err(ShelfError::OperatorNotAllowed {
                operator,
                value_type: attribute.value_type,
            });
        }

        let value = self.comparison_value(operator, separator)?;
        check_allowed_values(attribute, &value)?;

        Ok(FilterClause::new(attribute.id, operator, value))
    }

    fn comparison_value(&self, operator: OperatorId, separator: &str) -> Result<ComparisonValue> {
        let raw = self.value.trim();
        if operator.arity() != Arity::Zero && raw.is_empty() {
            return Err(ShelfError::IncompleteClause(format!(
                "'{}' needs a value",
                operator
            )));
        }

        Ok(match operator.arity() {
            Arity::Zero => ComparisonValue::None,
            Arity::Single => ComparisonValue::Single(raw.to_string()),
            Arity::Many => ComparisonValue::Many(split_values(raw, separator)),
        })
    }
}

fn split_values(raw: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return vec![raw.to_string()];
    }
    raw.split(separator)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

fn check_allowed_values(attribute: &Attribute, value: &ComparisonValue) -> Result<()> {
    if attribute.value_type != ValueType::Enumerated {
        return Ok(());
    }
    let allowed = attribute.allowed_values();
    let given: &[String] = match value {
        ComparisonValue::None => &[],
        ComparisonValue::Single(v) => std::slice::from_ref(v),
        ComparisonValue::Many(values) => values,
    };
    match given.iter().find(|v| !allowed.contains(v)) {
        Some(bad) => Err(ShelfError::ValueNotAllowed {
            property: attribute.name.clone(),
            value: bad.clone(),
        }),
        None => Ok(()),
    }
}
