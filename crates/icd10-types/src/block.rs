//! ICD-10 Block type.

/// A block of category codes within a chapter, e.g. `A00-A09`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Block {
    /// Range code: two 3-character codes joined by `-`.
    pub id: String,
    /// Human-readable block label.
    pub label: String,
    /// Roman numeral identifier of the owning chapter.
    pub chapter_id: String,
}

impl Block {
    /// Splits the range code into its start and end category codes.
    ///
    /// Returns `None` if the identifier is not a `-`-joined pair.
    pub fn code_range(&self) -> Option<(&str, &str)> {
        self.id.split_once('-')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_range() {
        let block = Block {
            id: "A00-A09".to_string(),
            label: "Intestinal infectious diseases".to_string(),
            chapter_id: "I".to_string(),
        };
        assert_eq!(block.code_range(), Some(("A00", "A09")));
    }

    #[test]
    fn test_code_range_malformed() {
        let block = Block {
            id: "A00".to_string(),
            label: String::new(),
            chapter_id: "I".to_string(),
        };
        assert_eq!(block.code_range(), None);
    }
}
