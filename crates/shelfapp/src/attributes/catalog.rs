//! Read-only lookup over the loaded property list.

use super::Attribute;

/// Ordered view over the data source's properties.
#[derive(Debug, Clone, Copy)]
pub struct AttributeCatalog<'a> {
    attributes: &'a [Attribute],
}

impl<'a> AttributeCatalog<'a> {
    pub fn new(attributes: &'a [Attribute]) -> Self {
        Self { attributes }
    }

    pub fn get(&self, id: u32) -> Option<&'a Attribute> {
        self.attributes.iter().find(|a| a.id == id)
    }

    /// Resolve a user-supplied key: a numeric id first, then a
    /// case-insensitive name.
    pub fn resolve(&self, key: &str) -> Option<&'a Attribute> {
        let key = key.trim();
        if let Ok(id) = key.parse::<u32>() {
            if let Some(attr) = self.get(id) {
                return Some(attr);
            }
        }
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(key))
    }

    /// Property name for display, or `Property {id}` when it is not in the catalog.
    pub fn name_of(&self, id: u32) -> String {
        self.get(id)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| format!("Property {}", id))
    }
}
