//! Review loading with rating validation

use super::jsonl::JsonLinesSource;
use super::progress::LineProgress;
use crate::error::Result;
use crate::table::{Record, Table};
use serde_json::Value;
use tracing::{info, trace};

pub const RATING_FIELD: &str = "overall";
pub const REVIEWER_FIELD: &str = "reviewerID";

/// Closed interval of accepted `overall` ratings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingRange {
    pub min: f64,
    pub max: f64,
}

impl RatingRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, rating: f64) -> bool {
        self.min <= rating && rating <= self.max
    }
}

impl Default for RatingRange {
    fn default() -> Self {
        Self { min: 1.0, max: 5.0 }
    }
}

/// Pure: Whether a review carries a numeric rating inside `range`
///
/// Absent keys and non-numeric values (strings, bools, null) are rejected
/// rather than coerced.
pub fn has_valid_rating(review: &Record, range: &RatingRange) -> bool {
    match review.get(RATING_FIELD) {
        Some(Value::Number(number)) => number.as_f64().is_some_and(|r| range.contains(r)),
        _ => false,
    }
}

/// Reviews that passed the rating check, plus load statistics
#[derive(Debug, Clone, Default)]
pub struct ReviewLoad {
    pub table: Table,
    /// Lines decoded from the source (bounded by the cap)
    pub lines_read: usize,
    /// Lines dropped for a missing or out-of-range rating
    pub invalid_rating: usize,
}

/// Load the leading reviews of `source`, keeping only valid ratings
///
/// The first malformed line aborts the load.
pub fn load_reviews(source: &JsonLinesSource, range: &RatingRange) -> Result<ReviewLoad> {
    info!("Cleaning reviews from {}", source.path().display());

    let progress = LineProgress::new("reviews", source.limit());
    let mut lines = source.open()?;
    let mut table = Table::new();
    let mut invalid_rating = 0;

    for review in lines.by_ref() {
        let review = review?;
        progress.tick();
        if has_valid_rating(&review, range) {
            table.push(review);
        } else {
            trace!("Dropping review with rating {:?}", review.get(RATING_FIELD));
            invalid_rating += 1;
        }
    }
    progress.finish();

    info!("Cleaned {} reviews", table.len());
    Ok(ReviewLoad {
        table,
        lines_read: lines.lines_read(),
        invalid_rating,
    })
}
