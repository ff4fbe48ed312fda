//! Generic streaming reader for catalog files.
//!
//! Provides a lazy, forward-only reader over one of the four delimited
//! dataset files. Each logical query opens its own reader; dropping a reader
//! before exhaustion releases the underlying file, which is how point
//! lookups terminate early.

use std::fs::File;
use std::io::{BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::dataset::Dataset;
use crate::types::{CatalogError, CatalogResult};

/// Trait for types that can be parsed from catalog file records.
///
/// Implemented by the four entity types; each names its dataset, which
/// determines the delimiter and the expected header columns.
pub trait CatalogRecord: Sized {
    /// The dataset this record type is read from.
    const DATASET: Dataset;

    /// Parse a record from a CSV StringRecord.
    fn from_record(record: &StringRecord) -> CatalogResult<Self>;
}

/// A streaming reader over one catalog file.
///
/// Reads record-by-record; the sequence is finite, single-pass and not
/// restartable once released.
pub struct CatalogReader<R: Read, T: CatalogRecord> {
    reader: Reader<R>,
    records_read: usize,
    _marker: PhantomData<T>,
}

impl<R: Read, T: CatalogRecord> std::fmt::Debug for CatalogReader<R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogReader")
            .field("records_read", &self.records_read)
            .finish()
    }
}

impl<T: CatalogRecord> CatalogReader<BufReader<File>, T> {
    /// Creates a reader from a file path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or has an
    /// invalid header row.
    pub fn from_path<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read, T: CatalogRecord> CatalogReader<R, T> {
    /// Creates a reader from any `Read` source.
    pub fn from_reader(reader: R) -> CatalogResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(T::DATASET.delimiter())
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::None)
            .from_reader(reader);

        Self::validate_headers(&mut csv_reader)?;

        Ok(Self {
            reader: csv_reader,
            records_read: 0,
            _marker: PhantomData,
        })
    }

    /// Validates that the file names the expected columns.
    fn validate_headers(reader: &mut Reader<R>) -> CatalogResult<()> {
        let headers = reader.headers()?;
        let expected = T::DATASET.columns();

        if headers.len() < expected.len() {
            return Err(CatalogError::InvalidHeader {
                expected: expected.len(),
                found: headers.len(),
            });
        }

        for (i, expected_col) in expected.iter().enumerate() {
            let found = headers.get(i).unwrap_or("");
            // Handle UTF-8 BOM at start of file
            let found = found.trim_start_matches('\u{feff}');
            if found != *expected_col {
                return Err(CatalogError::UnexpectedColumn {
                    position: i,
                    expected: expected_col.to_string(),
                    found: found.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Returns the number of records read so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }
}

impl<R: Read, T: CatalogRecord> Iterator for CatalogReader<R, T> {
    type Item = CatalogResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    self.records_read += 1;

                    // Skip empty records
                    if record.is_empty() || record.iter().all(|f| f.trim().is_empty()) {
                        continue;
                    }

                    return Some(T::from_record(&record));
                }
                Ok(false) => return None, // End of file
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
