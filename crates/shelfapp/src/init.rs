//! # Initialization
//!
//! Builds a ready-to-use [`ShelfContext`]: configuration is loaded, the
//! datastore document is opened and an API is wrapped around it.
//!
//! ## Config Search Paths
//!
//! Both locations are merged, later ones overriding earlier ones:
//! 1. the global config directory (`$SHELF_CONFIG_DIR`, else the OS config dir),
//! 2. the working directory.
//!
//! ## Datastore Location
//!
//! `data_override` (the CLI's `--data`) wins over the configured `datastore`.
//! Relative paths are resolved against the working directory.

use crate::api::ShelfApi;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::store::fs::JsonFileStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct ShelfContext {
    pub api: ShelfApi<JsonFileStore>,
    pub config: ShelfConfig,
}

/// Global config directory: `$SHELF_CONFIG_DIR` if set, else the OS default.
pub fn global_config_dir() -> Option<PathBuf> {
    std::env::var("SHELF_CONFIG_DIR")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            ProjectDirs::from("com", "shelf", "shelf").map(|dirs| dirs.config_dir().to_path_buf())
        })
}

pub fn config_search_paths(cwd: &Path) -> Vec<SearchPath> {
    let mut paths = Vec::new();
    if let Some(global) = global_config_dir() {
        paths.push(SearchPath::Path(global));
    }
    paths.push(SearchPath::Path(cwd.to_path_buf()));
    paths
}

/// Load configuration, falling back to defaults when nothing is configured.
pub fn load_config(cwd: &Path) -> ShelfConfig {
    Clapfig::builder::<ShelfConfig>()
        .app_name("shelf")
        .file_name("shelf.toml")
        .search_paths(config_search_paths(cwd))
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not load configuration, using defaults");
            ShelfConfig::default()
        })
}

/// Initialize the shelf context.
///
/// # Arguments
///
/// * `cwd` - Directory config files and relative paths are resolved from
/// * `data_override` - Explicit datastore path, bypassing configuration
pub fn initialize(cwd: &Path, data_override: Option<PathBuf>) -> Result<ShelfContext> {
    let config = load_config(cwd);
    let datastore = match data_override {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => config.datastore_path(cwd),
    };
    tracing::debug!(datastore = %datastore.display(), "initializing");

    let store = JsonFileStore::open(&datastore)?;
    let api = ShelfApi::new(store).with_separator(config.separator());
    Ok(ShelfContext { api, config })
}
