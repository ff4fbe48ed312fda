//! Field search over catalog datasets.
//!
//! Substring/prefix queries against a fixed per-dataset field allow-list.
//! Both the query and every candidate value are normalized before matching,
//! so accents and case never affect results. Searches always scan the whole
//! dataset: completeness requires visiting every record.

use icd10_types::text::normalize;
use icd10_types::{Block, Category, Chapter, Disease};

use crate::dataset::Dataset;
use crate::lookup::Catalog;
use crate::page::FieldView;
use crate::parser::CatalogRecord;
use crate::types::{CatalogError, CatalogResult};

/// How a query string must match a candidate field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The query must anchor the start of the normalized value.
    Prefix,
    /// The query may appear anywhere in the normalized value.
    Substring,
}

impl MatchMode {
    /// Parses `prefix`/`substring`, case-insensitively.
    pub fn parse(value: &str) -> CatalogResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "prefix" => Ok(MatchMode::Prefix),
            "substring" => Ok(MatchMode::Substring),
            _ => Err(CatalogError::InvalidMatchMode {
                value: value.to_string(),
            }),
        }
    }

    fn matches(self, haystack: &str, needle: &str) -> bool {
        match self {
            MatchMode::Prefix => haystack.starts_with(needle),
            MatchMode::Substring => haystack.contains(needle),
        }
    }
}

/// A searchable field, scoped by the per-dataset allow-list.
///
/// Chapters, blocks and categories expose `{id, label}`; diseases expose
/// `{code, name}`. Anything else is a validation failure, never a silent
/// empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Entity identifier (chapters, blocks, categories).
    Id,
    /// Entity label (chapters, blocks, categories).
    Label,
    /// Disease code.
    Code,
    /// Disease name.
    Name,
}

impl SearchField {
    /// Parses a field name against the dataset's allow-list.
    pub fn parse(dataset: Dataset, name: &str) -> CatalogResult<Self> {
        let field = match (dataset, name) {
            (Dataset::Chapters | Dataset::Blocks | Dataset::Categories, "id") => SearchField::Id,
            (Dataset::Chapters | Dataset::Blocks | Dataset::Categories, "label") => {
                SearchField::Label
            }
            (Dataset::Diseases, "code") => SearchField::Code,
            (Dataset::Diseases, "name") => SearchField::Name,
            _ => {
                return Err(CatalogError::UnknownField {
                    dataset,
                    field: name.to_string(),
                })
            }
        };
        Ok(field)
    }

    /// The field name as it appears in dataset headers.
    pub fn name(self) -> &'static str {
        match self {
            SearchField::Id => "id",
            SearchField::Label => "label",
            SearchField::Code => "code",
            SearchField::Name => "name",
        }
    }

    /// Whether this field belongs to the dataset's allow-list.
    pub fn applies_to(self, dataset: Dataset) -> bool {
        SearchField::parse(dataset, self.name()).is_ok()
    }
}

/// Minimum query length per dataset and field.
///
/// The policy is deliberately asymmetric:
///
/// | dataset    | field     | minimum |
/// |------------|-----------|---------|
/// | chapters   | label     | 2       |
/// | chapters   | id        | 1       |
/// | blocks     | id, label | 1       |
/// | categories | id, label | 1       |
/// | diseases   | code, name| 2       |
pub fn min_query_len(dataset: Dataset, field: SearchField) -> usize {
    match (dataset, field) {
        (Dataset::Chapters, SearchField::Label) => 2,
        (Dataset::Diseases, _) => 2,
        _ => 1,
    }
}

impl Catalog {
    /// Searches chapters by field.
    pub fn search_chapters(
        &self,
        field: SearchField,
        query: &str,
        mode: MatchMode,
    ) -> CatalogResult<Vec<Chapter>> {
        self.scan_matches(field, query, mode)
    }

    /// Searches blocks by field.
    pub fn search_blocks(
        &self,
        field: SearchField,
        query: &str,
        mode: MatchMode,
    ) -> CatalogResult<Vec<Block>> {
        self.scan_matches(field, query, mode)
    }

    /// Searches categories by field.
    pub fn search_categories(
        &self,
        field: SearchField,
        query: &str,
        mode: MatchMode,
    ) -> CatalogResult<Vec<Category>> {
        self.scan_matches(field, query, mode)
    }

    /// Searches diseases by code or name.
    pub fn search_diseases(
        &self,
        field: SearchField,
        query: &str,
        mode: MatchMode,
    ) -> CatalogResult<Vec<Disease>> {
        self.scan_matches(field, query, mode)
    }

    /// Shared scan: validates, then accumulates every matching record over
    /// a full pass of the dataset.
    fn scan_matches<T>(
        &self,
        field: SearchField,
        query: &str,
        mode: MatchMode,
    ) -> CatalogResult<Vec<T>>
    where
        T: CatalogRecord + FieldView,
    {
        // Validation happens before any I/O.
        if !field.applies_to(T::DATASET) {
            return Err(CatalogError::UnknownField {
                dataset: T::DATASET,
                field: field.name().to_string(),
            });
        }
        let minimum = min_query_len(T::DATASET, field);
        let length = query.chars().count();
        if length < minimum {
            return Err(CatalogError::QueryTooShort { minimum, length });
        }

        let needle = normalize(query);
        let mut matches = Vec::new();
        for record in self.open::<T>()? {
            let record = record?;
            let Some(value) = record.field(field.name()) else {
                continue;
            };
            if mode.matches(&normalize(value), &needle) {
                matches.push(record);
            }
        }
        Ok(matches)
    }
}
