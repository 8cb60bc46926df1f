//! # Collection Matcher
//!
//! Projects a product list through the active clause. With no clause the
//! projection is the identity; otherwise it is the subsequence of products
//! for which [`evaluate`] holds, in their original order.
//!
//! The projection is pure: the same `(products, clause)` pair always yields
//! the same result, so callers may recompute it on every change.

use crate::filter::{evaluate, FilterClause};
use crate::model::Product;
use crate::operators::OperatorRef;

pub fn filter_products<'a>(
    products: &'a [Product],
    clause: Option<&FilterClause>,
) -> Vec<&'a Product> {
    let Some(clause) = clause else {
        return products.iter().collect();
    };

    if let OperatorRef::Unknown(raw) = &clause.operator {
        tracing::warn!(
            operator = %raw,
            property = clause.property_id,
            "filter uses an unknown operator; no products match"
        );
        return Vec::new();
    }

    products
        .iter()
        .filter(|product| evaluate(clause, product))
        .collect()
}
