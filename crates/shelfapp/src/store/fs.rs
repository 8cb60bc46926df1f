use super::{DataSource, Datastore};
use crate::attributes::Attribute;
use crate::error::{Result, ShelfError};
use crate::model::Product;
use crate::operators::Operator;
use std::fs;
use std::path::{Path, PathBuf};

/// Data source backed by a datastore JSON file.
///
/// The file is read once in [`JsonFileStore::open`]; later changes on disk
/// are not picked up.
pub struct JsonFileStore {
    path: PathBuf,
    data: Datastore,
}

impl JsonFileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let raw = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ShelfError::InvalidDatastore(format!("{} does not exist", path.display()))
            } else {
                ShelfError::Io(e)
            }
        })?;
        let data: Datastore = serde_json::from_str(&raw)?;
        data.validate()?;
        tracing::debug!(
            path = %path.display(),
            properties = data.properties.len(),
            products = data.products.len(),
            "loaded datastore"
        );
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for JsonFileStore {
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
    use tempfile::TempDir;

    const DOC: &str = r#"{
        "properties": [
            {"id": 0, "name": "Product Name", "type": "string"},
            {"id": 1, "name": "weight (oz)", "type": "number"},
            {"id": 2, "name": "category", "type": "enumerated", "values": ["tools", "electronics"]}
        ],
        "products": [
            {"id": 0, "property_values": [
                {"property_id": 0, "value": "Headphones"},
                {"property_id": 1, "value": 5},
                {"property_id": 2, "value": "electronics"}
            ]},
            {"id": 1, "property_values": [{"property_id": 0, "value": "Hammer"}]}
        ]
    }"#;

    fn write(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("datastore.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn open_reads_document() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(write(&dir, DOC)).unwrap();
        assert_eq!(store.properties().len(), 3);
        assert_eq!(store.products().len(), 2);
        assert_eq!(store.operators().len(), 7);
        assert_eq!(store.products()[1].display_name(), "Hammer");
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let result = JsonFileStore::open(dir.path().join("nope.json"));
        assert!(matches!(result, Err(ShelfError::InvalidDatastore(_))));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let result = JsonFileStore::open(write(&dir, "{ not json"));
        assert!(matches!(result, Err(ShelfError::Serialization(_))));
    }

    #[test]
    fn invalid_document_is_rejected() {
        let dir = TempDir::new().unwrap();
        let doc = r#"{"products": [{"id": 1}, {"id": 1}]}"#;
        let result = JsonFileStore::open(write(&dir, doc));
        assert!(matches!(result, Err(ShelfError::InvalidDatastore(_))));
    }
}
