//! Matching functions for each operator.
//!
//! Equality rules:
//! - A number equals a comparison string when the string parses to the same
//!   number (`10` equals `"10"` and `"10.0"`).
//! - Text equals a comparison string only when the strings are identical
//!   (case-sensitive, no numeric coercion).
//! - An absent value equals nothing.
//!
//! Ordering operators parse both sides as numbers; if either side does not
//! parse, the result is `false`.

use super::{Comparison, OperatorId};
use crate::model::{parse_number, Value};
use std::cmp::Ordering;

impl OperatorId {
    /// Apply this operator to a product value.
    ///
    /// A comparison whose shape does not fit the operator's arity never
    /// matches. Zero-arity operators ignore the comparison.
    pub fn matches(self, value: Value<'_>, comparison: Comparison<'_>) -> bool {
        match (self, comparison) {
            (OperatorId::Any, _) => value.is_present(),
            (OperatorId::None, _) => !value.is_present(),
            (OperatorId::Equals, Comparison::One(expected)) => equals(value, expected),
            (OperatorId::GreaterThan, Comparison::One(bound)) => {
                compare(value, bound) == Some(Ordering::Greater)
            }
            (OperatorId::LessThan, Comparison::One(bound)) => {
                compare(value, bound) == Some(Ordering::Less)
            }
            (OperatorId::In, Comparison::Many(candidates)) => {
                candidates.iter().any(|c| equals(value, c))
            }
            (OperatorId::Contains, Comparison::One(needle)) => contains(value, needle),
            _ => false,
        }
    }
}

fn equals(value: Value<'_>, expected: &str) -> bool {
    match value {
        Value::Absent => false,
        Value::Text(s) => s == expected,
        Value::Number(n) => parse_number(expected) == Some(n),
    }
}

fn compare(value: Value<'_>, bound: &str) -> Option<Ordering> {
    let lhs = value.as_number()?;
    let rhs = parse_number(bound)?;
    lhs.partial_cmp(&rhs)
}

fn contains(value: Value<'_>, needle: &str) -> bool {
    if !value.is_present() {
        return false;
    }
    value
        .render()
        .is_some_and(|haystack| haystack.to_lowercase().contains(&needle.to_lowercase()))
}
