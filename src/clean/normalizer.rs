//! Text normalizer for free-text product fields
//!
//! Lowercases the input and strips everything that is not an ASCII letter,
//! an ASCII digit or whitespace.
//!
//! # Examples
//!
//! ```
//! use recprep::clean::normalizer::clean_text;
//!
//! assert_eq!(clean_text("USB-C Cable, 2m!"), "usbc cable 2m");
//! assert_eq!(clean_text("Café Crème"), "caf crme");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Everything outside `[a-zA-Z0-9\s]`
static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("Valid regex pattern"));

/// Pure: Normalize a piece of text
///
/// The character filter is ASCII-only, so accented letters and other
/// non-ASCII text are removed rather than transliterated. Unicode
/// `White_Space` characters are kept as-is (no collapsing or trimming);
/// the ASCII information separators U+001C..U+001F are not whitespace
/// here and are stripped.
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    DISALLOWED_CHARS.replace_all(&lowered, "").into_owned()
}

/// Pure: Normalize an arbitrary JSON value
///
/// Strings go through [`clean_text`]; every other value (number, bool,
/// null, array, object) becomes the empty string.
pub fn normalize_value(value: &Value) -> String {
    match value {
        Value::String(text) => clean_text(text),
        _ => String::new(),
    }
}
