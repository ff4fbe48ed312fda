//! Block dataset records.

use csv::StringRecord;
use icd10_types::Block;

use crate::dataset::Dataset;
use crate::page::FieldView;
use crate::parser::CatalogRecord;
use crate::types::CatalogResult;

impl CatalogRecord for Block {
    const DATASET: Dataset = Dataset::Blocks;

    fn from_record(record: &StringRecord) -> CatalogResult<Self> {
        Ok(Block {
            id: record.get(0).unwrap_or("").to_string(),
            label: record.get(1).unwrap_or("").to_string(),
            chapter_id: record.get(2).unwrap_or("").to_string(),
        })
    }
}

impl FieldView for Block {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "label" => Some(&self.label),
            "chapterId" => Some(&self.chapter_id),
            _ => None,
        }
    }
}
