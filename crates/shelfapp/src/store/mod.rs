//! # Data Source
//!
//! The engine consumes three read-only lists: properties, operators and
//! products. [`DataSource`] abstracts where they come from:
//!
//! - [`fs::JsonFileStore`]: a datastore JSON document on disk.
//! - [`memory::InMemoryStore`]: built in code, used by tests and embedders.
//!
//! ## Document Format
//!
//! ```json
//! {
//!   "properties": [{"id": 0, "name": "Product Name", "type": "string"}],
//!   "operators": [{"id": "equals", "text": "Is equal to"}],
//!   "products": [{"id": 1, "property_values": [{"property_id": 0, "value": "Headphones"}]}]
//! }
//! ```
//!
//! `operators` may be omitted, in which case every registry operator is
//! offered with its default label.

pub mod fs;
pub mod memory;

use crate::attributes::{Attribute, AttributeCatalog, ValueType};
use crate::error::{Result, ShelfError};
use crate::model::Product;
use crate::operators::{Operator, OPERATORS};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Read access to the loaded catalog.
pub trait DataSource {
    fn properties(&self) -> &[Attribute];

    fn operators(&self) -> &[Operator];

    fn products(&self) -> &[Product];

    fn catalog(&self) -> AttributeCatalog<'_> {
        AttributeCatalog::new(self.properties())
    }
}

/// The whole data source as one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Datastore {
    #[serde(default)]
    pub properties: Vec<Attribute>,
    #[serde(default = "default_operators")]
    pub operators: Vec<Operator>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Every registry operator with its default label.
pub fn default_operators() -> Vec<Operator> {
    OPERATORS.iter().map(Operator::from).collect()
}

impl Datastore {
    /// Check the structural invariants a loaded datastore must satisfy.
    ///
    /// Operators the registry does not know are allowed here; they are never
    /// offered for any property and evaluate as non-matches.
    pub fn validate(&self) -> Result<()> {
        let mut property_ids = HashSet::new();
        for property in &self.properties {
            if !property_ids.insert(property.id) {
                return Err(ShelfError::InvalidDatastore(format!(
                    "duplicate property id {}",
                    property.id
                )));
            }
            if property.values.is_some() && property.value_type != ValueType::Enumerated {
                return Err(ShelfError::InvalidDatastore(format!(
                    "property '{}' lists values but is of type {}",
                    property.name, property.value_type
                )));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &self.products {
            if !product_ids.insert(product.id) {
                return Err(ShelfError::InvalidDatastore(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            let mut seen = HashSet::new();
            for pv in &product.property_values {
                if !seen.insert(pv.property_id) {
                    return Err(ShelfError::InvalidDatastore(format!(
                        "product {} has more than one value for property {}",
                        product.id, pv.property_id
                    )));
                }
            }
        }

        for operator in &self.operators {
            if operator.operator_id().is_none() {
                tracing::warn!(operator = %operator.id, "datastore lists an unknown operator");
            }
        }
        Ok(())
    }
}

impl DataSource for Datastore {
    fn properties(&self) -> &[Attribute] {
        &self.properties
    }

    fn operators(&self) -> &[Operator] {
        &self.operators
    }

    fn products(&self) -> &[Product] {
        &self.products
    }
}
