//! # Operator Registry
//!
//! The fixed set of comparison operators. Each operator has an arity class
//! (how many comparison values it consumes) and a pure matching function,
//! see [`OperatorId::matches`].
//!
//! | Operator | Wire id | Arity | Default label |
//! |----------|---------|-------|---------------|
//! | `Equals` | `equals` | single | Is equal to |
//! | `GreaterThan` | `greater_than` | single | Is greater than |
//! | `LessThan` | `less_than` | single | Is less than |
//! | `Any` | `any` | zero | Has any value |
//! | `None` | `none` | zero | Has no value |
//! | `In` | `in` | many | Is any of |
//! | `Contains` | `contains` | single | Contains |
//!
//! Clauses refer to operators through [`OperatorRef`], which keeps ids that
//! are not in the registry instead of failing to parse them. The evaluator
//! treats those as a non-match.

pub mod compat;
mod matching;

use crate::error::ShelfError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many comparison values an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arity {
    Zero,
    Single,
    Many,
}

/// The closed set of operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorId {
    Equals,
    GreaterThan,
    LessThan,
    Any,
    None,
    In,
    Contains,
}

impl OperatorId {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorId::Equals => "equals",
            OperatorId::GreaterThan => "greater_than",
            OperatorId::LessThan => "less_than",
            OperatorId::Any => "any",
            OperatorId::None => "none",
            OperatorId::In => "in",
            OperatorId::Contains => "contains",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            OperatorId::Any | OperatorId::None => Arity::Zero,
            OperatorId::In => Arity::Many,
            OperatorId::Equals
            | OperatorId::GreaterThan
            | OperatorId::LessThan
            | OperatorId::Contains => Arity::Single,
        }
    }
}

impl fmt::Display for OperatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatorId {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OPERATORS
            .iter()
            .find(|spec| spec.id.as_str() == s)
            .map(|spec| spec.id)
            .ok_or_else(|| ShelfError::UnknownOperator(s.to_string()))
    }
}

/// Registry entry for an operator. Arity is not stored here; it comes from
/// [`OperatorId::arity`].
#[derive(Debug, Clone)]
pub struct OperatorSpec {
    pub id: OperatorId,
    pub label: &'static str,
}

impl OperatorSpec {
    const fn new(id: OperatorId, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// All operators, in the order they are offered to users.
pub const OPERATORS: &[OperatorSpec] = &[
    OperatorSpec::new(OperatorId::Equals, "Is equal to"),
    OperatorSpec::new(OperatorId::GreaterThan, "Is greater than"),
    OperatorSpec::new(OperatorId::LessThan, "Is less than"),
    OperatorSpec::new(OperatorId::Any, "Has any value"),
    OperatorSpec::new(OperatorId::None, "Has no value"),
    OperatorSpec::new(OperatorId::In, "Is any of"),
    OperatorSpec::new(OperatorId::Contains, "Contains"),
];

/// An operator as referenced by a clause: either a registry member or an id
/// nothing knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OperatorRef {
    Known(OperatorId),
    Unknown(String),
}

impl OperatorRef {
    pub fn known(&self) -> Option<OperatorId> {
        match self {
            OperatorRef::Known(id) => Some(*id),
            OperatorRef::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OperatorRef::Known(id) => id.as_str(),
            OperatorRef::Unknown(raw) => raw,
        }
    }
}

impl From<OperatorId> for OperatorRef {
    fn from(id: OperatorId) -> Self {
        OperatorRef::Known(id)
    }
}

impl From<&str> for OperatorRef {
    fn from(s: &str) -> Self {
        match s.parse::<OperatorId>() {
            Ok(id) => OperatorRef::Known(id),
            Err(_) => OperatorRef::Unknown(s.to_string()),
        }
    }
}

impl From<String> for OperatorRef {
    fn from(s: String) -> Self {
        OperatorRef::from(s.as_str())
    }
}

impl From<OperatorRef> for String {
    fn from(op: OperatorRef) -> Self {
        op.as_str().to_string()
    }
}

impl fmt::Display for OperatorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator record as listed by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub id: String,
    pub text: String,
}

impl Operator {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Registry operator this record refers to, if any.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.id.parse().ok()
    }
}

impl From<&OperatorSpec> for Operator {
    fn from(spec: &OperatorSpec) -> Self {
        Operator::new(spec.id.as_str(), spec.label)
    }
}

/// Comparison operand handed to a matching function, shaped by arity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison<'a> {
    Nothing,
    One(&'a str),
    Many(&'a [String]),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_operator() {
        for id in [
            OperatorId::Equals,
            OperatorId::GreaterThan,
            OperatorId::LessThan,
            OperatorId::Any,
            OperatorId::None,
            OperatorId::In,
            OperatorId::Contains,
        ] {
            let entries = OPERATORS.iter().filter(|spec| spec.id == id).count();
            assert_eq!(entries, 1, "{id} should be listed exactly once");
            assert_eq!(id.as_str().parse::<OperatorId>().unwrap(), id);
        }
        assert_eq!(OPERATORS.len(), 7);
    }

    #[test]
    fn arity_classes() {
        assert_eq!(OperatorId::Any.arity(), Arity::Zero);
        assert_eq!(OperatorId::None.arity(), Arity::Zero);
        assert_eq!(OperatorId::In.arity(), Arity::Many);
        assert_eq!(OperatorId::Equals.arity(), Arity::Single);
        assert_eq!(OperatorId::Contains.arity(), Arity::Single);
    }

    #[test]
    fn parse_wire_ids() {
        assert_eq!("greater_than".parse::<OperatorId>().unwrap(), OperatorId::GreaterThan);
        assert_eq!("in".parse::<OperatorId>().unwrap(), OperatorId::In);
        assert!(matches!(
            "between".parse::<OperatorId>(),
            Err(ShelfError::UnknownOperator(id)) if id == "between"
        ));
        // Ids are case-sensitive, as in the data source
        assert!("Equals".parse::<OperatorId>().is_err());
    }

    #[test]
    fn serde_ids_match_as_str() {
        for spec in OPERATORS {
            let json = serde_json::to_string(&spec.id).unwrap();
            assert_eq!(json, format!("\"{}\"", spec.id.as_str()));
        }
    }

    #[test]
    fn operator_ref_keeps_unknown_ids() {
        assert_eq!(OperatorRef::from("none"), OperatorRef::Known(OperatorId::None));
        let unknown = OperatorRef::from("starts_with");
        assert_eq!(unknown, OperatorRef::Unknown("starts_with".into()));
        assert_eq!(unknown.known(), None);
        assert_eq!(unknown.to_string(), "starts_with");

        let parsed: OperatorRef = serde_json::from_str("\"starts_with\"").unwrap();
        assert_eq!(parsed, unknown);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"starts_with\"");
    }

    #[test]
    fn operator_record_resolves_registry_id() {
        assert_eq!(
            Operator::new("contains", "Contains").operator_id(),
            Some(OperatorId::Contains)
        );
        assert_eq!(Operator::new("regex", "Matches").operator_id(), None);
    }
}
