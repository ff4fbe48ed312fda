//! Text normalization used for every identifier and label comparison.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalizes text for comparison.
///
/// Applies Unicode NFD decomposition, strips combining diacritical marks,
/// lower-cases, and trims surrounding whitespace. Every identifier and label
/// comparison in the catalog goes through this function so that accents and
/// case never affect matching.
///
/// # Examples
///
/// ```
/// use icd10_types::text::normalize;
///
/// assert_eq!(normalize("México"), "mexico");
/// assert_eq!(normalize("  A00-A09 "), "a00-a09");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(input: &str) -> String {
    let decomposed: String = input.nfd().filter(|c| !is_combining_mark(*c)).collect();
    decomposed.trim().to_lowercase()
}
