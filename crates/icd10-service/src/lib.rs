//! # icd10-service
//!
//! HTTP JSON API for ICD-10 catalog queries.
//!
//! This crate is the boundary layer over the engine in `icd10-catalog`: it
//! wires routes, shapes request/response JSON, maps error kinds to status
//! codes, and reads configuration from the environment. It contains no
//! query logic of its own — lookups, searches, sorting and pagination all
//! happen in the catalog crate.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod params;
pub mod routes;

pub use config::Config;
pub use error::ApiError;
pub use routes::{router, AppState};
