//! Corpus ingestion
//!
//! This module loads the two input corpora:
//! - `jsonl` - Bounded reader for gzip JSON-lines files
//! - `products` - Product metadata loader and identifier set
//! - `reviews` - Review loader with rating validation

pub mod jsonl;
mod progress;
pub mod products;
pub mod reviews;

pub use jsonl::{JsonLines, JsonLinesSource};
pub use products::{enrich_product, load_products, ProductCatalog};
pub use reviews::{has_valid_rating, load_reviews, RatingRange, ReviewLoad};
