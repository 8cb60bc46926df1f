//! Shared fixtures: a small catalog of household products.

use crate::attributes::{Attribute, ValueType};
use crate::model::Product;
use crate::store::memory::InMemoryStore;
use crate::store::Datastore;

pub const NAME: u32 = 0;
pub const COLOR: u32 = 1;
pub const WEIGHT: u32 = 2;
pub const CATEGORY: u32 = 3;
pub const WIRELESS: u32 = 4;

pub fn sample_properties() -> Vec<Attribute> {
    vec![
        Attribute::new(NAME, "Product Name", ValueType::Text),
        Attribute::new(COLOR, "color", ValueType::Text),
        Attribute::new(WEIGHT, "weight (oz)", ValueType::Number),
        Attribute::enumerated(CATEGORY, "category", ["tools", "electronics", "kitchenware"]),
        Attribute::enumerated(WIRELESS, "wireless", ["true", "false"]),
    ]
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(0)
            .with(NAME, "Headphones")
            .with(COLOR, "black")
            .with(WEIGHT, 5)
            .with(CATEGORY, "electronics")
            .with(WIRELESS, "false"),
        Product::new(1)
            .with(NAME, "Cell Phone")
            .with(COLOR, "black")
            .with(WEIGHT, 3)
            .with(CATEGORY, "electronics")
            .with(WIRELESS, "true"),
        Product::new(2)
            .with(NAME, "Keyboard")
            .with(COLOR, "grey")
            .with(WEIGHT, 5)
            .with(CATEGORY, "electronics")
            .with(WIRELESS, "false"),
        Product::new(3)
            .with(NAME, "Cup")
            .with(COLOR, "white")
            .with(WEIGHT, 3)
            .with(CATEGORY, "kitchenware"),
        Product::new(4)
            .with(NAME, "Key")
            .with(COLOR, "silver")
            .with(WEIGHT, 0.1)
            .with(CATEGORY, "tools"),
        Product::new(5)
            .with(NAME, "Hammer")
            .with(COLOR, "brown")
            .with(WEIGHT, 19)
            .with(CATEGORY, "tools"),
        // Missing color, weight recorded as text
        Product::new(6)
            .with(NAME, "Mystery Box")
            .with(WEIGHT, "N/A"),
    ]
}

pub fn sample_store() -> InMemoryStore {
    let store = sample_properties()
        .into_iter()
        .fold(InMemoryStore::new(), InMemoryStore::with_property);
    sample_products()
        .into_iter()
        .fold(store, InMemoryStore::with_product)
}

pub fn sample_datastore() -> Datastore {
    sample_store().into_datastore()
}

pub fn sample_datastore_json() -> String {
    serde_json::to_string_pretty(&sample_datastore()).expect("fixture serializes")
}
