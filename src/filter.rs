//! Referential filter between reviews and products
//!
//! Reviews survive only when their `asin` names a product in the loaded
//! catalog, so the review output never references a missing product.

use crate::ingest::products::ASIN_FIELD;
use crate::table::{Record, Table};
use serde_json::Value;
use std::collections::HashSet;

/// Pure: Whether a review references a known product
///
/// A review with no `asin`, or a non-string one, references nothing.
pub fn references_known_product(review: &Record, valid_asins: &HashSet<String>) -> bool {
    review
        .get(ASIN_FIELD)
        .and_then(Value::as_str)
        .is_some_and(|asin| valid_asins.contains(asin))
}

/// Pure: Keep the reviews that reference a known product, in order
pub fn filter_orphans(reviews: Table, valid_asins: &HashSet<String>) -> Table {
    reviews
        .into_iter()
        .filter(|review| references_known_product(review, valid_asins))
        .collect()
}
