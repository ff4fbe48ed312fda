//! # icd10-types
//!
//! Type definitions for the ICD-10 classification hierarchy.
//!
//! This crate provides the four entity types of the hierarchy
//! (chapter → block → category → subcategory/disease), the roman numeral
//! chapter-identifier table, and the text normalization primitive applied
//! before every identifier and label comparison.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via
//!   serde. Disable this feature if you only need the plain types.
//!
//! ## Usage
//!
//! ```rust
//! use icd10_types::{Chapter, Disease};
//! use icd10_types::roman::chapter_matches;
//! use icd10_types::text::normalize;
//!
//! let chapter = Chapter {
//!     id: "I".to_string(),
//!     label: "Certain infectious and parasitic diseases".to_string(),
//! };
//!
//! // Chapters match by roman numeral or decimal form.
//! assert!(chapter_matches(&chapter.id, "1"));
//!
//! // Category membership is derived from the code.
//! let disease = Disease {
//!     code: "A009".to_string(),
//!     name: "Cholera, unspecified".to_string(),
//! };
//! assert_eq!(disease.category_id(), "A00");
//!
//! // Comparisons are accent- and case-insensitive.
//! assert_eq!(normalize("Cólera"), "colera");
//! ```

#![warn(missing_docs)]

mod block;
mod category;
mod chapter;
mod disease;
pub mod roman;
pub mod text;

// Re-export all entity types at crate root
pub use block::Block;
pub use category::Category;
pub use chapter::Chapter;
pub use disease::Disease;
