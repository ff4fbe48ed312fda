//! HTTP route wiring for the catalog API.

use std::sync::Arc;

use axum::Router;
use icd10_catalog::{Catalog, FieldView};
use serde::Serialize;

use crate::error::ApiError;

pub mod blocks;
pub mod categories;
pub mod chapters;
pub mod diseases;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The catalog every handler queries.
    pub catalog: Arc<Catalog>,
}

/// Builds the versioned API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/v1/chapters", chapters::router())
        .nest("/v1/blocks", blocks::router())
        .nest("/v1/categories", categories::router())
        .nest("/v1/diseases", diseases::router())
        .with_state(state)
}

/// Runs a catalog scan on the blocking thread pool.
///
/// Each request clones the (path-only) catalog handle, so concurrent
/// queries own independent streams with no shared mutable state.
pub(crate) async fn blocking<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&Catalog) -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    let catalog = Arc::clone(&state.catalog);
    match tokio::task::spawn_blocking(move || f(&catalog)).await {
        Ok(result) => result,
        Err(err) => Err(ApiError::internal(format!("catalog task failed: {err}"))),
    }
}

/// An entity reduced to its id and label, as the nested listing routes
/// present children with the parent reference stripped.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct EntitySummary {
    pub id: String,
    pub label: String,
}

impl FieldView for EntitySummary {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "label" => Some(&self.label),
            _ => None,
        }
    }
}
