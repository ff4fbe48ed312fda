//! # icd10-catalog
//!
//! Streaming lookup and search engine over the four ICD-10 catalog files
//! (chapters, blocks, categories, diseases).
//!
//! Every query opens its own lazy, forward-only stream over a flat delimited
//! file and re-scans from the beginning: no cache, no index, no shared
//! mutable state. Point lookups stop at the first match; searches and
//! enumerations scan the whole dataset. Results are ordered and windowed by
//! the generic sort/pagination utility in [`page`] before they leave the
//! engine.
//!
//! ## Usage
//!
//! ```ignore
//! use icd10_catalog::{paginate, sort_by_field, Catalog, MatchMode, Order, SearchField};
//!
//! let catalog = Catalog::from_dir("/data/icd10")?;
//!
//! // Chapter lookups take roman numerals or decimals interchangeably.
//! let chapter = catalog.chapter("4")?;
//!
//! // Accent- and case-insensitive search.
//! let mut hits = catalog.search_diseases(SearchField::Name, "colera", MatchMode::Substring)?;
//!
//! sort_by_field(&mut hits, "code", Order::Asc);
//! let page = paginate(hits, Some(1), Some(20));
//! ```

#![warn(missing_docs)]

mod block;
mod category;
mod chapter;
pub mod dataset;
mod disease;
pub mod lookup;
pub mod page;
pub mod parser;
pub mod search;
mod types;

pub use dataset::{CatalogPaths, Dataset};
pub use lookup::Catalog;
pub use page::{paginate, sort_by_field, FieldView, Order, Page};
pub use parser::{CatalogReader, CatalogRecord};
pub use search::{min_query_len, MatchMode, SearchField};
pub use types::{CatalogError, CatalogResult};

// Re-export the entity types for convenience
pub use icd10_types::{Block, Category, Chapter, Disease};
