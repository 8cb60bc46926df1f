//! # Attribute Catalog
//!
//! Properties are the named, typed fields a product may carry a value for.
//! The catalog is loaded once from the data source and is read-only afterwards.
//!
//! ## Value Types
//!
//! | Type | Wire name | Description |
//! |------|-----------|-------------|
//! | `Text` | `string` | Free text |
//! | `Number` | `number` | Numeric, compared as `f64` |
//! | `Enumerated` | `enumerated` | One of a closed list of `values` |
//!
//! Property `0` holds the product's name by convention; nothing enforces it.

mod catalog;
mod spec;

pub use catalog::AttributeCatalog;
pub use spec::{Attribute, ValueType};
