//! Disease dataset records.

use csv::StringRecord;
use icd10_types::Disease;

use crate::dataset::Dataset;
use crate::page::FieldView;
use crate::parser::CatalogRecord;
use crate::types::CatalogResult;

impl CatalogRecord for Disease {
    const DATASET: Dataset = Dataset::Diseases;

    fn from_record(record: &StringRecord) -> CatalogResult<Self> {
        Ok(Disease {
            code: record.get(0).unwrap_or("").to_string(),
            name: record.get(1).unwrap_or("").to_string(),
        })
    }
}

impl FieldView for Disease {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "code" => Some(&self.code),
            "name" => Some(&self.name),
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
    fn test_parse_disease_record() {
        let record = make_record(&["A009", "Cholera, unspecified"]);
        let disease = Disease::from_record(&record).unwrap();
        assert_eq!(disease.code, "A009");
        assert_eq!(disease.name, "Cholera, unspecified");
        assert_eq!(disease.category_id(), "A00");
    }

    #[test]
    fn test_field_view() {
        let disease = Disease {
            code: "A009".to_string(),
            name: "Cholera, unspecified".to_string(),
        };
        assert_eq!(disease.field("code"), Some("A009"));
        assert_eq!(disease.field("name"), Some("Cholera, unspecified"));
        assert_eq!(disease.field("label"), None);
    }
}
