//! Roman numeral chapter identifiers.
//!
//! ICD-10 chapters are stored with roman numeral identifiers (I–XXII), but
//! callers frequently supply the decimal form. This module holds the fixed
//! mapping between the two conventions and the tolerant comparison used by
//! chapter lookups.

use crate::text::normalize;

/// Roman numerals for the 22 ICD-10 chapters, indexed by `chapter - 1`.
pub const ROMAN_NUMERALS: [&str; 22] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV", "XV",
    "XVI", "XVII", "XVIII", "XIX", "XX", "XXI", "XXII",
];

/// Returns the roman numeral for a chapter number, or `None` outside 1–22.
pub fn roman_for(number: u8) -> Option<&'static str> {
    if (1..=22).contains(&number) {
        Some(ROMAN_NUMERALS[number as usize - 1])
    } else {
        None
    }
}

/// Returns the chapter number for a roman numeral, or `None` if it is not
/// one of I–XXII. Comparison is case-insensitive.
pub fn decimal_for(roman: &str) -> Option<u8> {
    let needle = normalize(roman);
    ROMAN_NUMERALS
        .iter()
        .position(|r| normalize(r) == needle)
        .map(|i| i as u8 + 1)
}

/// Tests whether a stored chapter identifier matches a queried one.
///
/// A match holds when, after normalization, the stored identifier equals the
/// queried one directly, or equals the roman numeral expansion of the queried
/// value interpreted as a decimal integer. Numbers outside 1–22 fail to
/// expand and fall back to the direct comparison.
///
/// # Examples
///
/// ```
/// use icd10_types::roman::chapter_matches;
///
/// assert!(chapter_matches("IV", "IV"));
/// assert!(chapter_matches("IV", "iv"));
/// assert!(chapter_matches("IV", "4"));
/// assert!(!chapter_matches("IV", "5"));
/// assert!(!chapter_matches("IV", "23"));
/// ```
pub fn chapter_matches(stored: &str, queried: &str) -> bool {
    let stored = normalize(stored);
    let queried = normalize(queried);
    if stored == queried {
        return true;
    }
    queried
        .parse::<u8>()
        .ok()
        .and_then(roman_for)
        .map(|roman| stored == normalize(roman))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roman_for_bounds() {
        assert_eq!(roman_for(1), Some("I"));
        assert_eq!(roman_for(4), Some("IV"));
        assert_eq!(roman_for(22), Some("XXII"));
        assert_eq!(roman_for(0), None);
        assert_eq!(roman_for(23), None);
    }

    #[test]
    fn test_decimal_for() {
        assert_eq!(decimal_for("I"), Some(1));
        assert_eq!(decimal_for("xxii"), Some(22));
        assert_eq!(decimal_for(" ix "), Some(9));
        assert_eq!(decimal_for("XXIII"), None);
        assert_eq!(decimal_for(""), None);
    }

    #[test]
    fn test_chapter_matches_direct() {
        assert!(chapter_matches("IX", "IX"));
        assert!(chapter_matches("IX", "ix"));
        assert!(!chapter_matches("IX", "X"));
    }

    #[test]
    fn test_chapter_matches_decimal() {
        assert!(chapter_matches("I", "1"));
        assert!(chapter_matches("XXII", "22"));
        assert!(!chapter_matches("I", "2"));
    }

    #[test]
    fn test_chapter_matches_out_of_range_falls_back() {
        assert!(!chapter_matches("I", "0"));
        assert!(!chapter_matches("I", "23"));
        // A stored decimal id still matches itself directly.
        assert!(chapter_matches("23", "23"));
    }
}
