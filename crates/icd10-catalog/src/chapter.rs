//! Chapter dataset records.

use csv::StringRecord;
use icd10_types::Chapter;

use crate::dataset::Dataset;
use crate::page::FieldView;
use crate::parser::CatalogRecord;
use crate::types::CatalogResult;

impl CatalogRecord for Chapter {
    const DATASET: Dataset = Dataset::Chapters;

    fn from_record(record: &StringRecord) -> CatalogResult<Self> {
        Ok(Chapter {
            id: record.get(0).unwrap_or("").to_string(),
            label: record.get(1).unwrap_or("").to_string(),
        })
    }
}

impl FieldView for Chapter {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "label" => Some(&self.label),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(fields: &[&str]) -> StringRecord {
        let mut record = StringRecord::new();
        for field in fields {
            record.push_field(field);
        }
        record
    }

    #[test]
    fn test_parse_chapter_record() {
        let record = make_record(&["I", "Certain infectious and parasitic diseases"]);
        let chapter = Chapter::from_record(&record).unwrap();
        assert_eq!(chapter.id, "I");
        assert_eq!(chapter.label, "Certain infectious and parasitic diseases");
    }

    #[test]
    fn test_field_view() {
        let chapter = Chapter {
            id: "II".to_string(),
            label: "Neoplasms".to_string(),
        };
        assert_eq!(chapter.field("id"), Some("II"));
        assert_eq!(chapter.field("label"), Some("Neoplasms"));
        assert_eq!(chapter.field("chapterId"), None);
    }
}
