//! # Shelf
//!
//! A typed filtering engine for product catalogs. A catalog is a list of
//! properties (typed fields), a list of operators and a list of products
//! carrying property values. A single clause (property, operator, value)
//! selects the products that satisfy it.
//!
//! ## Layers
//!
//! ```text
//! attributes ─┐
//! operators ──┼─> filter (evaluate one product) ─> matcher (filter a list)
//! model ──────┘
//!
//! store (data source) ─> editor (form -> clause) ─> api (filter state) ─> listing
//! ```
//!
//! - [`attributes`]: property definitions and the catalog lookup.
//! - [`operators`]: the operator registry, matching functions and the
//!   type compatibility table ([`operators::compat`]).
//! - [`filter`]: clauses and [`filter::evaluate`].
//! - [`matcher`]: [`matcher::filter_products`], order-preserving.
//! - [`editor`]: raw form input to a validated clause.
//! - [`api`]: [`api::ShelfApi`], the facade UI clients talk to.
//!
//! Filtering never fails: ill-formed clauses match nothing. Errors come only
//! from loading data and from building clauses out of user input.

pub mod api;
pub mod attributes;
pub mod config;
pub mod editor;
pub mod error;
pub mod filter;
pub mod init;
pub mod listing;
pub mod matcher;
pub mod model;
pub mod operators;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
