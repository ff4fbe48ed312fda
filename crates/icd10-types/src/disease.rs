//! ICD-10 Disease (subcategory) type.

/// A disease, the most specific coding level — also called a subcategory
/// or diagnosis.
///
/// Category membership is not stored in the dataset: it is derived by
/// truncating the code to its first 3 characters. This derivation is a
/// structural property of the coding scheme.
///
/// # Examples
///
/// ```
/// use icd10_types::Disease;
///
/// let disease = Disease {
///     code: "A009".to_string(),
///     name: "Cholera, unspecified".to_string(),
/// };
///
/// assert_eq!(disease.category_id(), "A00");
/// assert_eq!(disease.dotted_code(), "A00.9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disease {
    /// Full subcategory code, e.g. `A009`.
    pub code: String,
    /// Human-readable disease name.
    pub name: String,
}

impl Disease {
    /// Returns the derived category identifier: the first 3 characters of
    /// the code. Codes shorter than 3 characters are returned whole.
    pub fn category_id(&self) -> &str {
        self.code.get(..3).unwrap_or(&self.code)
    }

    /// Returns the display form of the code, with a `.` inserted after the
    /// third character: `A009` becomes `A00.9`. Codes of 3 characters or
    /// fewer are returned unchanged.
    pub fn dotted_code(&self) -> String {
        match (self.code.get(..3), self.code.get(3..)) {
            (Some(head), Some(tail)) if !tail.is_empty() => format!("{head}.{tail}"),
            _ => self.code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_disease(code: &str) -> Disease {
        Disease {
            code: code.to_string(),
            name: "Test disease".to_string(),
        }
    }

    #[test]
    fn test_category_derivation() {
        assert_eq!(make_disease("A009").category_id(), "A00");
        assert_eq!(make_disease("B9689").category_id(), "B96");
    }

    #[test]
    fn test_category_derivation_short_code() {
        assert_eq!(make_disease("A0").category_id(), "A0");
    }

    #[test]
    fn test_dotted_code() {
        assert_eq!(make_disease("A009").dotted_code(), "A00.9");
        assert_eq!(make_disease("B9689").dotted_code(), "B96.89");
    }

    #[test]
    fn test_dotted_code_bare_category() {
        assert_eq!(make_disease("A00").dotted_code(), "A00");
    }
}
