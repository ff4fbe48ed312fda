//! Point lookups and parent-filtered enumerations.
//!
//! Every operation opens its own independent stream over the backing file
//! and re-scans from the beginning; there is no cache and no shared mutable
//! state, so concurrent queries are safe by construction. Point lookups
//! stop at the first match, which drops the reader and releases the file;
//! enumerations always scan to the end.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use icd10_types::roman::chapter_matches;
use icd10_types::text::normalize;
use icd10_types::{Block, Category, Chapter, Disease};

use crate::dataset::CatalogPaths;
use crate::parser::{CatalogRecord, CatalogReader};
use crate::types::CatalogResult;

/// Handle onto the four catalog dataset files.
///
/// Cheap to clone and `Send + Sync`: it holds only the resolved file paths.
/// Each query method opens a fresh stream.
///
/// # Example
///
/// ```ignore
/// use icd10_catalog::{Catalog, CatalogPaths};
///
/// let catalog = Catalog::from_dir("/data/icd10")?;
///
/// // Chapters resolve by roman numeral or decimal form.
/// let chapter = catalog.chapter("4")?;
/// let same = catalog.chapter("IV")?;
/// assert_eq!(chapter, same);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    paths: CatalogPaths,
}

impl Catalog {
    /// Creates a catalog over already-resolved paths.
    pub fn new(paths: CatalogPaths) -> Self {
        Self { paths }
    }

    /// Resolves and verifies the dataset files inside a data directory.
    ///
    /// # Errors
    /// Returns an error naming every missing dataset file.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> CatalogResult<Self> {
        let paths = CatalogPaths::from_dir(dir);
        paths.verify()?;
        Ok(Self::new(paths))
    }

    /// Returns the resolved dataset paths.
    pub fn paths(&self) -> &CatalogPaths {
        &self.paths
    }

    /// Opens a fresh stream over the dataset backing `T`.
    pub(crate) fn open<T: CatalogRecord>(
        &self,
    ) -> CatalogResult<CatalogReader<BufReader<File>, T>> {
        CatalogReader::from_path(self.paths.path(T::DATASET))
    }

    // ── Point lookups ───────────────────────────────────────────────────

    /// Finds a chapter by identifier, accepting the roman numeral form or
    /// its decimal equivalent (1–22) interchangeably.
    ///
    /// Returns `Ok(None)` when the stream is exhausted without a match.
    pub fn chapter(&self, id: &str) -> CatalogResult<Option<Chapter>> {
        for record in self.open::<Chapter>()? {
            let chapter = record?;
            if chapter_matches(&chapter.id, id) {
                return Ok(Some(chapter));
            }
        }
        Ok(None)
    }

    /// Finds a block by its exact range-code identifier.
    pub fn block(&self, id: &str) -> CatalogResult<Option<Block>> {
        let needle = normalize(id);
        for record in self.open::<Block>()? {
            let block = record?;
            if normalize(&block.id) == needle {
                return Ok(Some(block));
            }
        }
        Ok(None)
    }

    /// Finds a category by its exact 3-character code.
    pub fn category(&self, id: &str) -> CatalogResult<Option<Category>> {
        let needle = normalize(id);
        for record in self.open::<Category>()? {
            let category = record?;
            if normalize(&category.id) == needle {
                return Ok(Some(category));
            }
        }
        Ok(None)
    }

    /// Finds a disease by its full subcategory code.
    pub fn disease(&self, code: &str) -> CatalogResult<Option<Disease>> {
        let needle = normalize(code);
        for record in self.open::<Disease>()? {
            let disease = record?;
            if normalize(&disease.code) == needle {
                return Ok(Some(disease));
            }
        }
        Ok(None)
    }

    // ── Enumerations ────────────────────────────────────────────────────

    /// Returns every chapter, in file order.
    pub fn all_chapters(&self) -> CatalogResult<Vec<Chapter>> {
        self.open::<Chapter>()?.collect()
    }

    /// Returns every block, optionally filtered to one chapter.
    ///
    /// The chapter filter is roman/decimal tolerant. A filter naming no
    /// existing chapter yields `Ok(vec![])`, not an error.
    pub fn all_blocks(&self, chapter: Option<&str>) -> CatalogResult<Vec<Block>> {
        let mut blocks = Vec::new();
        for record in self.open::<Block>()? {
            let block = record?;
            if chapter.map_or(true, |c| chapter_matches(&block.chapter_id, c)) {
                blocks.push(block);
            }
        }
        Ok(blocks)
    }

    /// Returns every category, optionally filtered to one block.
    pub fn all_categories(&self, block: Option<&str>) -> CatalogResult<Vec<Category>> {
        let needle = block.map(normalize);
        let mut categories = Vec::new();
        for record in self.open::<Category>()? {
            let category = record?;
            if needle.as_deref().map_or(true, |b| normalize(&category.block_id) == b) {
                categories.push(category);
            }
        }
        Ok(categories)
    }

    /// Returns every disease, optionally filtered to one category.
    ///
    /// The category of a disease is never stored; the filter compares
    /// against the first 3 characters of each code.
    pub fn all_diseases(&self, category: Option<&str>) -> CatalogResult<Vec<Disease>> {
        let needle = category.map(normalize);
        let mut diseases = Vec::new();
        for record in self.open::<Disease>()? {
            let disease = record?;
            if needle.as_deref().map_or(true, |c| normalize(disease.category_id()) == c) {
                diseases.push(disease);
            }
        }
        Ok(diseases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::types::CatalogError;
    use tempfile::TempDir;

    fn write_dataset(dir: &TempDir, dataset: Dataset, contents: &str) {
        std::fs::write(dir.path().join(dataset.file_name()), contents).unwrap();
    }

    fn fixture_catalog() -> (TempDir, Catalog) {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(
            &dir,
            Dataset::Chapters,
            "id;label\n\
             I;Certain infectious and parasitic diseases\n\
             II;Neoplasms\n\
             IV;Endocrine, nutritional and metabolic diseases\n",
        );
        write_dataset(
            &dir,
            Dataset::Blocks,
            "id;label;chapterId\n\
             A00-A09;Intestinal infectious diseases;I\n\
             A15-A19;Tuberculosis;I\n\
             C00-C14;Malignant neoplasms of lip, oral cavity and pharynx;II\n\
             Z99-Z99;Dangling block;XXX\n",
        );
        write_dataset(
            &dir,
            Dataset::Categories,
            "id;label;blockId\n\
             A00;Cholera;A00-A09\n\
             A01;Typhoid and paratyphoid fevers;A00-A09\n\
             A15;Respiratory tuberculosis;A15-A19\n",
        );
        write_dataset(
            &dir,
            Dataset::Diseases,
            "code,name\n\
             A009,\"Cholera, unspecified\"\n\
             A010,Typhoid fever\n\
             A011,Paratyphoid fever A\n\
             A150,\"Tuberculosis of lung, confirmed\"\n",
        );
        let catalog = Catalog::from_dir(dir.path()).unwrap();
        (dir, catalog)
    }

    #[test]
    fn test_chapter_by_roman_and_decimal() {
        let (_dir, catalog) = fixture_catalog();
        let by_roman = catalog.chapter("IV").unwrap().unwrap();
        let by_decimal = catalog.chapter("4").unwrap().unwrap();
        assert_eq!(by_roman, by_decimal);
        assert_eq!(by_roman.id, "IV");
    }

    #[test]
    fn test_chapter_not_found_is_none() {
        let (_dir, catalog) = fixture_catalog();
        assert_eq!(catalog.chapter("XXI").unwrap(), None);
        assert_eq!(catalog.chapter("21").unwrap(), None);
    }

    #[test]
    fn test_block_lookup_case_insensitive() {
        let (_dir, catalog) = fixture_catalog();
        let block = catalog.block("a00-a09").unwrap().unwrap();
        assert_eq!(block.id, "A00-A09");
        assert_eq!(block.chapter_id, "I");
    }

    #[test]
    fn test_category_and_disease_lookup() {
        let (_dir, catalog) = fixture_catalog();
        let category = catalog.category("A01").unwrap().unwrap();
        assert_eq!(category.block_id, "A00-A09");

        let disease = catalog.disease("A009").unwrap().unwrap();
        assert_eq!(disease.name, "Cholera, unspecified");
        assert_eq!(catalog.disease("Z999").unwrap(), None);
    }

    #[test]
    fn test_all_chapters() {
        let (_dir, catalog) = fixture_catalog();
        let chapters = catalog.all_chapters().unwrap();
        assert_eq!(chapters.len(), 3);
    }

    #[test]
    fn test_all_blocks_chapter_filter_tolerates_decimal() {
        let (_dir, catalog) = fixture_catalog();
        let by_roman = catalog.all_blocks(Some("I")).unwrap();
        let by_decimal = catalog.all_blocks(Some("1")).unwrap();
        assert_eq!(by_roman, by_decimal);
        assert_eq!(by_roman.len(), 2);
    }

    #[test]
    fn test_all_blocks_unfiltered_includes_dangling() {
        let (_dir, catalog) = fixture_catalog();
        // The block pointing at a nonexistent chapter still enumerates.
        let blocks = catalog.all_blocks(None).unwrap();
        assert_eq!(blocks.len(), 4);
    }

    #[test]
    fn test_all_blocks_empty_filter_result() {
        let (_dir, catalog) = fixture_catalog();
        let blocks = catalog.all_blocks(Some("XXII")).unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_all_categories_block_filter() {
        let (_dir, catalog) = fixture_catalog();
        let categories = catalog.all_categories(Some("A00-A09")).unwrap();
        assert_eq!(categories.len(), 2);
        let all = catalog.all_categories(None).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_all_diseases_category_derived_filter() {
        let (_dir, catalog) = fixture_catalog();
        let diseases = catalog.all_diseases(Some("A01")).unwrap();
        assert_eq!(diseases.len(), 2);
        assert!(diseases.iter().all(|d| d.category_id() == "A01"));

        let cholera = catalog.all_diseases(Some("A00")).unwrap();
        assert_eq!(cholera.len(), 1);
        assert_eq!(cholera[0].code, "A009");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let (dir, catalog) = fixture_catalog();
        std::fs::remove_file(dir.path().join(Dataset::Diseases.file_name())).unwrap();
        let err = catalog.disease("A009").unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_dir_verifies() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Catalog::from_dir(dir.path()),
            Err(CatalogError::MissingDatasets { .. })
        ));
    }

    // ── Search (fixture-backed) ─────────────────────────────────────────

    use crate::search::{MatchMode, SearchField};

    #[test]
    fn test_search_normalizes_both_sides() {
        let (_dir, catalog) = fixture_catalog();
        let hits = catalog
            .search_chapters(SearchField::Label, "ENDOCRINE", MatchMode::Prefix)
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "IV");
    }

    #[test]
    fn test_search_substring_vs_prefix() {
        let (_dir, catalog) = fixture_catalog();
        let substring = catalog
            .search_diseases(SearchField::Name, "fever", MatchMode::Substring)
            .unwrap();
        assert_eq!(substring.len(), 2);

        let prefix = catalog
            .search_diseases(SearchField::Name, "fever", MatchMode::Prefix)
            .unwrap();
        assert!(prefix.is_empty());
    }

    #[test]
    fn test_search_code_prefix() {
        let (_dir, catalog) = fixture_catalog();
        let hits = catalog
            .search_diseases(SearchField::Code, "A01", MatchMode::Prefix)
            .unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_search_minimum_length_asymmetry() {
        let (_dir, catalog) = fixture_catalog();
        // Chapter label search requires 2 characters.
        let err = catalog
            .search_chapters(SearchField::Label, "a", MatchMode::Prefix)
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::QueryTooShort {
                minimum: 2,
                length: 1
            }
        ));

        // Block id search accepts a single character.
        let hits = catalog
            .search_blocks(SearchField::Id, "a", MatchMode::Prefix)
            .unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_search_rejects_field_outside_allow_list() {
        let (_dir, catalog) = fixture_catalog();
        let err = catalog
            .search_blocks(SearchField::Code, "a0", MatchMode::Prefix)
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownField { .. }));
        assert!(err.is_validation());
    }

    #[test]
    fn test_search_empty_result_is_ok() {
        let (_dir, catalog) = fixture_catalog();
        let hits = catalog
            .search_categories(SearchField::Label, "nonexistent condition", MatchMode::Substring)
            .unwrap();
        assert!(hits.is_empty());
    }
}
