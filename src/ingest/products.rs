//! Product metadata loading
//!
//! Reads the leading product records, adds cleaned copies of the free-text
//! fields and collects the result into a [`ProductCatalog`].

use super::jsonl::JsonLinesSource;
use super::progress::LineProgress;
use crate::clean::normalize_value;
use crate::error::Result;
use crate::table::{Record, Table};
use std::collections::HashSet;
use tracing::info;

pub const ASIN_FIELD: &str = "asin";
pub const TITLE_FIELD: &str = "title";
pub const DESCRIPTION_FIELD: &str = "description";
pub const TITLE_CLEAN_FIELD: &str = "title_clean";
pub const DESCRIPTION_CLEAN_FIELD: &str = "description_clean";

/// Loaded product table together with its identifier set
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    table: Table,
    asins: HashSet<String>,
}

impl ProductCatalog {
    /// Build the catalog and derive the identifier set once
    pub fn new(table: Table) -> Self {
        let asins = table
            .string_column(ASIN_FIELD)
            .map(str::to_string)
            .collect();
        Self { table, asins }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Every string `asin` present in the table
    pub fn asins(&self) -> &HashSet<String> {
        &self.asins
    }

    pub fn contains(&self, asin: &str) -> bool {
        self.asins.contains(asin)
    }
}

/// Pure: Add the derived cleaned-text fields to a product
///
/// A derived field is only added when its source key exists. A present but
/// non-string source yields an empty derived value.
pub fn enrich_product(mut product: Record) -> Record {
    if let Some(title) = product.get(TITLE_FIELD) {
        let cleaned = normalize_value(title);
        product.insert(TITLE_CLEAN_FIELD.to_string(), cleaned.into());
    }
    if let Some(description) = product.get(DESCRIPTION_FIELD) {
        let cleaned = normalize_value(description);
        product.insert(DESCRIPTION_CLEAN_FIELD.to_string(), cleaned.into());
    }
    product
}

/// Load and enrich the leading products of `source`
///
/// The first malformed line aborts the load.
pub fn load_products(source: &JsonLinesSource) -> Result<ProductCatalog> {
    info!("Cleaning product metadata from {}", source.path().display());

    let progress = LineProgress::new("products", source.limit());
    let table = source
        .open()?
        .inspect(|_| progress.tick())
        .map(|record| record.map(enrich_product))
        .collect::<Result<Table>>()?;
    progress.finish();

    let catalog = ProductCatalog::new(table);
    info!("Cleaned {} products", catalog.len());
    Ok(catalog)
}
