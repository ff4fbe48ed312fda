//! ICD-10 Chapter type.

use crate::roman;

/// A top-level ICD-10 chapter.
///
/// Chapters are identified by roman numerals I–XXII in the backing dataset.
///
/// # Examples
///
/// ```
/// use icd10_types::Chapter;
///
/// let chapter = Chapter {
///     id: "IV".to_string(),
///     label: "Endocrine, nutritional and metabolic diseases".to_string(),
/// };
///
/// assert_eq!(chapter.number(), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chapter {
    /// Roman numeral identifier (I–XXII).
    pub id: String,
    /// Human-readable chapter label.
    pub label: String,
}

impl Chapter {
    /// Returns the decimal chapter number, or `None` if the identifier is
    /// not a roman numeral in I–XXII.
    pub fn number(&self) -> Option<u8> {
        roman::decimal_for(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_number() {
        let chapter = Chapter {
            id: "X".to_string(),
            label: "Diseases of the respiratory system".to_string(),
        };
        assert_eq!(chapter.number(), Some(10));
    }

    #[test]
    fn test_chapter_number_invalid() {
        let chapter = Chapter {
            id: "not-roman".to_string(),
            label: String::new(),
        };
        assert_eq!(chapter.number(), None);
    }
}
