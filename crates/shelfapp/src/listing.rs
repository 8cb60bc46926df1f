//! Display-ready projection of a product list.
//!
//! The listing resolves names (product names from property `0`, property
//! labels from the catalog) so that renderers only lay the data out.

use crate::attributes::AttributeCatalog;
use crate::model::Product;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: u32,
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListing {
    pub count: usize,
    pub products: Vec<ProductCard>,
}

impl ProductListing {
    pub fn build(products: &[&Product], catalog: &AttributeCatalog<'_>) -> Self {
        let products: Vec<ProductCard> = products
            .iter()
            .map(|product| ProductCard::build(product, catalog))
            .collect();
        Self {
            count: products.len(),
            products,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCard {
    pub fn build(product: &Product, catalog: &AttributeCatalog<'_>) -> Self {
        let fields = product
            .property_values
            .iter()
            .map(|pv| Field {
                label: catalog.name_of(pv.property_id),
                value: pv.value.to_string(),
            })
            .collect();
        Self {
            id: product.id,
            name: product.display_name(),
            fields,
        }
    }
}
