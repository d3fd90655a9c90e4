//! Text cleaning for product fields
//!
//! Provides the pure normalizer applied to product titles and descriptions
//! before they are written out for content-based filtering.

pub mod normalizer;

pub use normalizer::{clean_text, normalize_value};
