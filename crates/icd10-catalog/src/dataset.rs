//! The four fixed catalog datasets and their backing files.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::types::{CatalogError, CatalogResult};

/// One of the four catalog datasets.
///
/// Each dataset is backed by a single flat delimited file with a header row.
/// Chapters, blocks and categories use `;` as delimiter so that commas inside
/// labels never collide; the diseases file is standard comma-separated with
/// RFC 4180 quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// ICD-10 chapters (`id;label`).
    Chapters,
    /// Blocks of categories (`id;label;chapterId`).
    Blocks,
    /// 3-character categories (`id;label;blockId`).
    Categories,
    /// Subcategory/disease codes (`code,name`).
    Diseases,
}

impl Dataset {
    /// All datasets, in hierarchy order.
    pub const ALL: [Dataset; 4] = [
        Dataset::Chapters,
        Dataset::Blocks,
        Dataset::Categories,
        Dataset::Diseases,
    ];

    /// Field delimiter of the backing file.
    pub fn delimiter(self) -> u8 {
        match self {
            Dataset::Diseases => b',',
            _ => b';',
        }
    }

    /// File name of the dataset within the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Chapters => "icd10-chapters.csv",
            Dataset::Blocks => "icd10-blocks.csv",
            Dataset::Categories => "icd10-categories.csv",
            Dataset::Diseases => "icd10-diseases.csv",
        }
    }

    /// Expected header columns, in order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Dataset::Chapters => &["id", "label"],
            Dataset::Blocks => &["id", "label", "chapterId"],
            Dataset::Categories => &["id", "label", "blockId"],
            Dataset::Diseases => &["code", "name"],
        }
    }

    /// Short lowercase name, used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Dataset::Chapters => "chapters",
            Dataset::Blocks => "blocks",
            Dataset::Categories => "categories",
            Dataset::Diseases => "diseases",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved paths of the four dataset files.
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    directory: PathBuf,
    chapters: PathBuf,
    blocks: PathBuf,
    categories: PathBuf,
    diseases: PathBuf,
}

impl CatalogPaths {
    /// Resolves the dataset files inside a data directory using the fixed
    /// per-dataset file names.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            directory: dir.to_path_buf(),
            chapters: dir.join(Dataset::Chapters.file_name()),
            blocks: dir.join(Dataset::Blocks.file_name()),
            categories: dir.join(Dataset::Categories.file_name()),
            diseases: dir.join(Dataset::Diseases.file_name()),
        }
    }

    /// Returns the path of one dataset's backing file.
    pub fn path(&self, dataset: Dataset) -> &Path {
        match dataset {
            Dataset::Chapters => &self.chapters,
            Dataset::Blocks => &self.blocks,
            Dataset::Categories => &self.categories,
            Dataset::Diseases => &self.diseases,
        }
    }

    /// Checks that all four dataset files exist.
    ///
    /// Reports every missing file at once rather than failing on the first.
    pub fn verify(&self) -> CatalogResult<()> {
        let missing: Vec<&str> = Dataset::ALL
            .into_iter()
            .filter(|d| !self.path(*d).exists())
            .map(Dataset::as_str)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::MissingDatasets {
                missing: missing.join(", "),
                directory: self.directory.display().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiters() {
        assert_eq!(Dataset::Chapters.delimiter(), b';');
        assert_eq!(Dataset::Blocks.delimiter(), b';');
        assert_eq!(Dataset::Categories.delimiter(), b';');
        assert_eq!(Dataset::Diseases.delimiter(), b',');
    }

    #[test]
    fn test_columns() {
        assert_eq!(Dataset::Chapters.columns(), &["id", "label"]);
        assert_eq!(Dataset::Diseases.columns(), &["code", "name"]);
    }

    #[test]
    fn test_paths_from_dir() {
        let paths = CatalogPaths::from_dir("/data/icd10");
        assert!(paths
            .path(Dataset::Blocks)
            .ends_with(Dataset::Blocks.file_name()));
    }

    #[test]
    fn test_verify_reports_all_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(Dataset::Chapters.file_name()), "id;label\n").unwrap();

        let paths = CatalogPaths::from_dir(dir.path());
        let err = paths.verify().unwrap_err();
        match err {
            CatalogError::MissingDatasets { missing, .. } => {
                assert_eq!(missing, "blocks, categories, diseases");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
