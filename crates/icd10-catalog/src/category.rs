//! Category dataset records.

use csv::StringRecord;
use icd10_types::Category;

use crate::dataset::Dataset;
use crate::page::FieldView;
use crate::parser::CatalogRecord;
use crate::types::CatalogResult;

impl CatalogRecord for Category {
    const DATASET: Dataset = Dataset::Categories;

    fn from_record(record: &StringRecord) -> CatalogResult<Self> {
        Ok(Category {
            id: record.get(0).unwrap_or("").to_string(),
            label: record.get(1).unwrap_or("").to_string(),
            block_id: record.get(2).unwrap_or("").to_string(),
        })
    }
}

impl FieldView for Category {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "label" => Some(&self.label),
            "blockId" => Some(&self.block_id),
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
    fn test_parse_category_record() {
        let record = make_record(&["A00", "Cholera", "A00-A09"]);
        let category = Category::from_record(&record).unwrap();
        assert_eq!(category.id, "A00");
        assert_eq!(category.block_id, "A00-A09");
    }
}
