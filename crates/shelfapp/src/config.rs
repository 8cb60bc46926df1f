//! # Configuration
//!
//! Shelf configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Command line**: `--data <path>` overrides `datastore`.
//! 2. **Environment variables**: `SHELF__DATASTORE`, `SHELF__SEPARATOR`.
//! 3. **Local Config**: `shelf.toml` in the working directory.
//! 4. **Global Config**: OS-appropriate config directory (via `directories` crate),
//!    or `$SHELF_CONFIG_DIR` when set.
//! 5. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `datastore` | `datastore.json` | Path of the datastore document, relative to the working directory |
//! | `separator` | `,` | Separator between values of an `in` filter |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for shelf, stored in `shelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Path of the datastore JSON document.
    #[config(default = "datastore.json")]
    pub datastore: String,

    /// Separator between the values of an `in` filter.
    #[config(default = ",")]
    pub separator: String,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            datastore: "datastore.json".to_string(),
            separator: ",".to_string(),
        }
    }
}

impl ShelfConfig {
    /// Datastore path, resolved against `cwd` when relative.
    pub fn datastore_path(&self, cwd: &Path) -> PathBuf {
        let path = PathBuf::from(&self.datastore);
        if path.is_absolute() {
            path
        } else {
            cwd.join(path)
        }
    }

    /// Separator for `in` values; a blank setting falls back to `,`.
    pub fn separator(&self) -> &str {
        if self.separator.trim().is_empty() {
            ","
        } else {
            &self.separator
        }
    }
}
