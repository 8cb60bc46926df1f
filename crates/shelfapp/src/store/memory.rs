use super::{default_operators, DataSource, Datastore};
use crate::attributes::Attribute;
use crate::error::Result;
use crate::model::Product;
use crate::operators::Operator;

/// In-memory data source.
///
/// Starts with the registry's default operators and no properties or
/// products; fill it with the `with_*` builders.
pub struct InMemoryStore {
    data: Datastore,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            data: Datastore {
                operators: default_operators(),
                ..Default::default()
            },
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing document after checking it.
    pub fn from_datastore(data: Datastore) -> Result<Self> {
        data.validate()?;
        Ok(Self { data })
    }

    pub fn with_property(mut self, attribute: Attribute) -> Self {
        self.data.properties.push(attribute);
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.data.products.push(product);
        self
    }

    pub fn with_operators(mut self, operators: Vec<Operator>) -> Self {
        self.data.operators = operators;
        self
    }

    pub fn into_datastore(self) -> Datastore {
        self.data
    }
}

impl DataSource for InMemoryStore {
    fn properties(&self) -> &[Attribute] {
        &self.data.properties
    }

    fn operators(&self) -> &[Operator] {
        &self.data.operators
    }

    fn products(&self) -> &[Product] {
        &self.data.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::ValueType;
    use crate::error::ShelfError;

    #[test]
    fn builder_keeps_insertion_order() {
        let store = InMemoryStore::new()
            .with_property(Attribute::new(0, "name", ValueType::Text))
            .with_product(Product::new(2))
            .with_product(Product::new(1));
        assert_eq!(store.properties().len(), 1);
        let ids: Vec<u32> = store.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(store.operators().len(), 7);
    }

    #[test]
    fn from_datastore_validates() {
        let data = Datastore {
            products: vec![Product::new(1), Product::new(1)],
            ..Default::default()
        };
        assert!(matches!(
            InMemoryStore::from_datastore(data),
            Err(ShelfError::InvalidDatastore(_))
        ));
    }
}
