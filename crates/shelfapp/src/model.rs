//! # Data Model
//!
//! Products are the entities being filtered. Each product carries an ordered
//! list of `(property_id, value)` pairs; a product need not have a value for
//! every property.
//!
//! Two value types live here:
//!
//! - [`Scalar`]: the owned value as stored in the data source (a JSON string or
//!   number).
//! - [`Value`]: a borrowed, tagged view used by the evaluator. It adds an
//!   explicit `Absent` case so that every matcher handles "no value" by
//!   pattern matching instead of relying on a sentinel.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Property id reserved for the product's display name.
pub const NAME_PROPERTY_ID: u32 = 0;

/// A stored property value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    pub fn as_value(&self) -> Value<'_> {
        match self {
            Scalar::Number(n) => Value::Number(*n),
            Scalar::Text(s) => Value::Text(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(f64::from(n))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", format_number(*n)),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

// Integral numbers go back out as JSON integers so that a datastore
// round-trips without gaining `.0` suffixes.
impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Number(n) if is_safe_integer(*n) => serializer.serialize_i64(*n as i64),
            Scalar::Number(n) => serializer.serialize_f64(*n),
            Scalar::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Tagged view of a product's value for one property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Absent,
    Text(&'a str),
    Number(f64),
}

impl<'a> Value<'a> {
    /// True when the value exists and is not the empty string.
    ///
    /// Numbers are always present, including zero.
    pub fn is_present(&self) -> bool {
        match self {
            Value::Absent => false,
            Value::Text(s) => !s.is_empty(),
            Value::Number(_) => true,
        }
    }

    /// Numeric reading of the value; text is parsed with [`parse_number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Absent => None,
            Value::Text(s) => parse_number(s),
            Value::Number(n) if n.is_nan() => None,
            Value::Number(n) => Some(*n),
        }
    }

    /// String form used for substring matching and display.
    pub fn render(&self) -> Option<String> {
        match self {
            Value::Absent => None,
            Value::Text(s) => Some((*s).to_string()),
            Value::Number(n) => Some(format_number(*n)),
        }
    }
}

/// Strict numeric parse: surrounding whitespace is allowed, trailing garbage
/// is not. Only finite numbers count; `NaN`, `inf` and `Infinity` (any case)
/// are unparsable.
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Integral numbers print without a fractional part (`10`, not `10.0`).
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // Normalizes -0
        return "0".to_string();
    }
    format!("{}", n)
}

fn is_safe_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0
}

/// One `(property, value)` pair on a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    pub property_id: u32,
    pub value: Scalar,
}

impl PropertyValue {
    pub fn new(property_id: u32, value: impl Into<Scalar>) -> Self {
        Self {
            property_id,
            value: value.into(),
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    #[serde(default)]
    pub property_values: Vec<PropertyValue>,
}

impl Product {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            property_values: Vec::new(),
        }
    }

    /// Builder-style helper to attach a value.
    pub fn with(mut self, property_id: u32, value: impl Into<Scalar>) -> Self {
        self.property_values
            .push(PropertyValue::new(property_id, value));
        self
    }

    /// The product's value for a property, or `Value::Absent` when it has none.
    pub fn value_of(&self, property_id: u32) -> Value<'_> {
        self.property_values
            .iter()
            .find(|pv| pv.property_id == property_id)
            .map(|pv| pv.value.as_value())
            .unwrap_or(Value::Absent)
    }

    /// Name shown for the product: its name property, or `Product {id}`.
    pub fn display_name(&self) -> String {
        self.property_values
            .iter()
            .find(|pv| pv.property_id == NAME_PROPERTY_ID)
            .map(|pv| pv.value.to_string())
            .unwrap_or_else(|| format!("Product {}", self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_of_missing_property_is_absent() {
        let product = Product::new(1).with(0, "Widget");
        assert_eq!(product.value_of(1), Value::Absent);
        assert_eq!(product.value_of(0), Value::Text("Widget"));
    }

    #[test]
    fn is_present_rules() {
        assert!(!Value::Absent.is_present());
        assert!(!Value::Text("").is_present());
        assert!(Value::Text(" ").is_present());
        assert!(Value::Number(0.0).is_present());
    }

    #[test]
    fn as_number_parses_text_strictly() {
        assert_eq!(Value::Text(" 12.5 ").as_number(), Some(12.5));
        assert_eq!(Value::Text("12abc").as_number(), None);
        assert_eq!(Value::Text("N/A").as_number(), None);
        assert_eq!(Value::Text("").as_number(), None);
        assert_eq!(Value::Number(f64::NAN).as_number(), None);
        assert_eq!(Value::Text("inf").as_number(), None);
        assert_eq!(Value::Text("+Infinity").as_number(), None);
        assert_eq!(Value::Text("-INF").as_number(), None);
        assert_eq!(Value::Text("NaN").as_number(), None);
        assert_eq!(Value::Absent.as_number(), None);
    }

    #[test]
    fn numbers_render_without_trailing_zero() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(10.5), "10.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(Value::Number(14.0).render().as_deref(), Some("14"));
    }

    #[test]
    fn display_name_falls_back_to_id() {
        assert_eq!(Product::new(7).display_name(), "Product 7");
        assert_eq!(Product::new(7).with(0, "Lamp").display_name(), "Lamp");
        assert_eq!(Product::new(7).with(0, 42).display_name(), "42");
    }

    #[test]
    fn scalar_deserializes_strings_and_numbers() {
        let pv: PropertyValue =
            serde_json::from_str(r#"{"property_id": 1, "value": 15}"#).unwrap();
        assert_eq!(pv.value, Scalar::Number(15.0));

        let pv: PropertyValue =
            serde_json::from_str(r#"{"property_id": 1, "value": "15"}"#).unwrap();
        assert_eq!(pv.value, Scalar::Text("15".into()));
    }

    #[test]
    fn integral_numbers_serialize_as_integers() {
        let json = serde_json::to_string(&PropertyValue::new(1, 15)).unwrap();
        assert_eq!(json, r#"{"property_id":1,"value":15}"#);

        let json = serde_json::to_string(&PropertyValue::new(1, 2.5)).unwrap();
        assert_eq!(json, r#"{"property_id":1,"value":2.5}"#);
    }
}
