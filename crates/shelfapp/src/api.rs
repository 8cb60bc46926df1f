//! # API Facade
//!
//! The API layer is the single entry point for UI clients. It owns the data
//! source and the filter state: at most one clause is active at a time.
//!
//! ## Filter State
//!
//! - [`ShelfApi::set_filter`] replaces any active clause.
//! - [`ShelfApi::apply`] builds a clause from raw form input, then sets it.
//! - [`ShelfApi::clear_filter`] returns to "no active filter", where every
//!   product is listed.
//!
//! The filtered list is recomputed on each call; it is a linear scan and
//! nothing is cached.
//!
//! ## Generic Over DataSource
//!
//! `ShelfApi<S: DataSource>` is generic over where the catalog comes from:
//! - Production: `ShelfApi<JsonFileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`
//!
//! ## What the API Does NOT Do
//!
//! - **I/O**: no stdout or stderr, no formatting.
//! - **Filtering semantics**: those live in [`crate::filter`] and [`crate::matcher`].

use crate::attributes::Attribute;
use crate::editor::{available_operators, FilterForm, DEFAULT_SEPARATOR};
use crate::error::{Result, ShelfError};
use crate::filter::FilterClause;
use crate::listing::ProductListing;
use crate::matcher::filter_products;
use crate::model::Product;
use crate::operators::Operator;
use crate::store::DataSource;

pub struct ShelfApi<S: DataSource> {
    store: S,
    filter: Option<FilterClause>,
    separator: String,
}

impl<S: DataSource> ShelfApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            filter: None,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Separator used by [`ShelfApi::apply`] to split `in` values.
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn properties(&self) -> &[Attribute] {
        self.store.properties()
    }

    /// Operators a user may pick for the property identified by `key`.
    pub fn operators_for(&self, key: &str) -> Result<Vec<&Operator>> {
        let attribute = self
            .store
            .catalog()
            .resolve(key)
            .ok_or_else(|| ShelfError::UnknownAttribute(key.to_string()))?;
        Ok(available_operators(self.store.operators(), attribute))
    }

    /// Replace the active clause.
    ///
    /// The clause is not rejected when ill-formed; it simply matches nothing.
    pub fn set_filter(&mut self, clause: FilterClause) {
        if let Err(e) = clause.validate(&self.store.catalog()) {
            tracing::warn!(error = %e, "active filter is ill-formed");
        }
        self.filter = Some(clause);
    }

    /// Build a clause from form input and make it the active one.
    ///
    /// On error the previous filter stays active.
    pub fn apply(&mut self, form: &FilterForm) -> Result<&FilterClause> {
        let clause = form.build_with_separator(&self.store, &self.separator)?;
        tracing::debug!(?clause, "filter applied");
        Ok(self.filter.insert(clause))
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    pub fn current_filter(&self) -> Option<&FilterClause> {
        self.filter.as_ref()
    }

    pub fn filtered_products(&self) -> Vec<&Product> {
        filter_products(self.store.products(), self.filter.as_ref())
    }

    pub fn listing(&self) -> ProductListing {
        ProductListing::build(&self.filtered_products(), &self.store.catalog())
    }
}
