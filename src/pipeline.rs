//! The cleaning run
//!
//! Both corpora are fully loaded and filtered before anything is written, so
//! a malformed input line never leaves partial output behind. Writes happen
//! products first; a failure on the reviews file leaves the products file in
//! place.

use crate::config::PipelineConfig;
use crate::error::{RecprepError, Result};
use crate::filter::filter_orphans;
use crate::ingest::reviews::REVIEWER_FIELD;
use crate::ingest::{load_products, load_reviews, JsonLinesSource, ProductCatalog};
use crate::output::{write_table_csv, write_table_json};
use crate::table::Table;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info};

pub const PRODUCTS_JSON_FILE: &str = "products.json";
pub const REVIEWS_JSON_FILE: &str = "reviews.json";

/// Counts and output locations for a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub products: usize,
    pub review_lines_read: usize,
    pub reviews_valid_rating: usize,
    pub reviews_kept: usize,
    pub orphans_dropped: usize,
    pub distinct_reviewers: usize,
    pub products_output: PathBuf,
    pub reviews_output: PathBuf,
    pub json_exports: Vec<PathBuf>,
}

/// Output of the load and filter stages, before anything is written
#[derive(Debug, Clone)]
pub struct CleanedTables {
    pub catalog: ProductCatalog,
    pub reviews: Table,
    pub review_lines_read: usize,
    pub reviews_valid_rating: usize,
}

impl CleanedTables {
    pub fn distinct_reviewers(&self) -> usize {
        self.reviews
            .string_column(REVIEWER_FIELD)
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Load both corpora and apply the rating and referential filters
pub fn clean(config: &PipelineConfig) -> Result<CleanedTables> {
    config.validate()?;

    let products = JsonLinesSource::new(&config.products_input, config.max_products);
    let catalog = load_products(&products)?;

    let reviews = JsonLinesSource::new(&config.reviews_input, config.max_reviews);
    let loaded = load_reviews(&reviews, &config.rating_range())?;
    let reviews_valid_rating = loaded.table.len();

    let kept = filter_orphans(loaded.table, catalog.asins());
    debug!(
        "Referential filter dropped {} of {} reviews",
        reviews_valid_rating - kept.len(),
        reviews_valid_rating
    );

    Ok(CleanedTables {
        catalog,
        reviews: kept,
        review_lines_read: loaded.lines_read,
        reviews_valid_rating,
    })
}

/// Run the whole job: load, filter, write
pub fn run(config: &PipelineConfig) -> Result<RunReport> {
    let tables = clean(config)?;
    let distinct_reviewers = tables.distinct_reviewers();

    info!("After cleaning:");
    info!("  - Products: {}", tables.catalog.len());
    info!("  - Valid reviews: {}", tables.reviews.len());
    info!("  - Reviewers: {}", distinct_reviewers);

    write_table_csv(tables.catalog.table(), &config.products_output)?;
    write_table_csv(&tables.reviews, &config.reviews_output)?;

    let mut json_exports = Vec::new();
    if let Some(dir) = &config.json_export_dir {
        std::fs::create_dir_all(dir).map_err(|source| RecprepError::Write {
            path: dir.clone(),
            source,
        })?;

        let products_json = dir.join(PRODUCTS_JSON_FILE);
        write_table_json(tables.catalog.table(), &products_json)?;
        json_exports.push(products_json);

        let reviews_json = dir.join(REVIEWS_JSON_FILE);
        write_table_json(&tables.reviews, &reviews_json)?;
        json_exports.push(reviews_json);
    }

    info!("Saved cleaned data");
    Ok(RunReport {
        products: tables.catalog.len(),
        review_lines_read: tables.review_lines_read,
        reviews_valid_rating: tables.reviews_valid_rating,
        reviews_kept: tables.reviews.len(),
        orphans_dropped: tables.reviews_valid_rating - tables.reviews.len(),
        distinct_reviewers,
        products_output: config.products_output.clone(),
        reviews_output: config.reviews_output.clone(),
        json_exports,
    })
}
