//! # Filter Evaluator
//!
//! A [`FilterClause`] names a property, an operator and a comparison value.
//! [`evaluate`] decides whether one product satisfies it.
//!
//! Evaluation never fails. Ill-formed clauses resolve to a non-match:
//!
//! - an operator id that is not in the registry,
//! - a comparison value whose shape does not fit the operator's arity
//!   (e.g. `in` with a single string, `equals` with no value),
//! - a product with no value for the property (treated as absent, so only
//!   `none` matches).
//!
//! Callers that want to reject such clauses up front use
//! [`FilterClause::validate`].

use crate::attributes::AttributeCatalog;
use crate::error::{Result, ShelfError};
use crate::model::Product;
use crate::operators::{compat, Arity, Comparison, OperatorId, OperatorRef};
use serde::{Deserialize, Serialize};

/// The comparison operand of a clause.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparisonValue {
    #[default]
    None,
    Single(String),
    Many(Vec<String>),
}

impl ComparisonValue {
    pub fn as_comparison(&self) -> Comparison<'_> {
        match self {
            ComparisonValue::None => Comparison::Nothing,
            ComparisonValue::Single(s) => Comparison::One(s),
            ComparisonValue::Many(values) => Comparison::Many(values),
        }
    }

    fn fits(&self, arity: Arity) -> bool {
        matches!(
            (self, arity),
            (ComparisonValue::None, Arity::Zero)
                | (ComparisonValue::Single(_), Arity::Single)
                | (ComparisonValue::Many(_), Arity::Many)
        )
    }
}

impl From<&str> for ComparisonValue {
    fn from(s: &str) -> Self {
        ComparisonValue::Single(s.to_string())
    }
}

impl From<String> for ComparisonValue {
    fn from(s: String) -> Self {
        ComparisonValue::Single(s)
    }
}

impl From<Vec<String>> for ComparisonValue {
    fn from(values: Vec<String>) -> Self {
        ComparisonValue::Many(values)
    }
}

/// A single filter condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterClause {
    pub property_id: u32,
    pub operator: OperatorRef,
    #[serde(default)]
    pub value: ComparisonValue,
}

impl FilterClause {
    pub fn new(
        property_id: u32,
        operator: impl Into<OperatorRef>,
        value: impl Into<ComparisonValue>,
    ) -> Self {
        Self {
            property_id,
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Convenience: a clause for a zero-arity operator.
    pub fn presence(property_id: u32, operator: OperatorId) -> Self {
        Self::new(property_id, operator, ComparisonValue::None)
    }

    /// Convenience: an `in` clause.
    pub fn any_of<I, S>(property_id: u32, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        Self::new(property_id, OperatorId::In, values)
    }

    /// Check the clause against the property catalog.
    ///
    /// A clause is well-formed when its property exists, its operator is in
    /// the registry and legal for the property's type, and its value has the
    /// shape the operator's arity calls for.
    pub fn validate(&self, catalog: &AttributeCatalog<'_>) -> Result<()> {
        let attribute = catalog
            .get(self.property_id)
            .ok_or_else(|| ShelfError::UnknownAttribute(self.property_id.to_string()))?;
        let operator = self
            .operator
            .known()
            .ok_or_else(|| ShelfError::UnknownOperator(self.operator.to_string()))?;
        if !compat::is_legal(attribute.value_type, operator) {
            return Err(ShelfError::OperatorNotAllowed {
                operator,
                value_type: attribute.value_type,
            });
        }
        if !self.value.fits(operator.arity()) {
            return Err(ShelfError::IncompleteClause(format!(
                "'{}' expects {} but the filter has {}",
                operator,
                describe_arity(operator.arity()),
                describe_value(&self.value)
            )));
        }
        Ok(())
    }
}

fn describe_arity(arity: Arity) -> &'static str {
    match arity {
        Arity::Zero => "no value",
        Arity::Single => "a single value",
        Arity::Many => "a list of values",
    }
}

fn describe_value(value: &ComparisonValue) -> &'static str {
    match value {
        ComparisonValue::None => "no value",
        ComparisonValue::Single(_) => "a single value",
        ComparisonValue::Many(_) => "a list of values",
    }
}

/// Does `product` satisfy `clause`?
pub fn evaluate(clause: &FilterClause, product: &Product) -> bool {
    let OperatorRef::Known(operator) = &clause.operator else {
        tracing::debug!(
            operator = %clause.operator,
            product = product.id,
            "unknown operator, treating as non-match"
        );
        return false;
    };
    let value = product.value_of(clause.property_id);

    let comparison = match operator.arity() {
        Arity::Zero => Comparison::Nothing,
        Arity::Single | Arity::Many => clause.value.as_comparison(),
    };
    operator.matches(value, comparison)
}
