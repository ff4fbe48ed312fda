//! Routes for diseases (`/v1/diseases/**`).

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use icd10_catalog::{Disease, MatchMode, Page, SearchField};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::routes::{blocking, AppState};

/// Upper bound on elements per page for disease searches.
const MAX_ELEMENTS_PER_PAGE: i64 = 100;

/// Values of the `strict` parameter that select prefix matching.
const STRICT_VALUES: [&str; 3] = ["true", "yes", "on"];

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/code/{code}", get(get_by_code))
        .route("/search/code", get(search_code))
        .route("/search/name", get(search_name))
}

#[derive(Serialize)]
struct DiseaseDetail {
    id: String,
    label: String,
    #[serde(rename = "categoryId")]
    category_id: String,
    #[serde(rename = "categoryLabel")]
    category_label: String,
    #[serde(rename = "blockId")]
    block_id: String,
    #[serde(rename = "blockLabel")]
    block_label: String,
    #[serde(rename = "chapterId")]
    chapter_id: String,
    #[serde(rename = "chapterLabel")]
    chapter_label: String,
}

/// Retrieves one disease by code, enriched with its full parent chain.
///
/// The category is derived from the first 3 characters of the code; a chain
/// broken by a missing parent is an internal error, since the dataset is
/// expected to be complete for any disease it contains.
async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DiseaseDetail>, ApiError> {
    blocking(&state, move |catalog| {
        let disease = catalog
            .disease(&code)?
            .ok_or_else(|| ApiError::not_found("Disease not found for given code"))?;
        let category = catalog
            .category(disease.category_id())?
            .ok_or_else(|| ApiError::internal("Category not found for given disease code"))?;
        let block = catalog
            .block(&category.block_id)?
            .ok_or_else(|| ApiError::internal("Block not found for given disease code"))?;
        let chapter = catalog
            .chapter(&block.chapter_id)?
            .ok_or_else(|| ApiError::internal("Chapter not found for given disease code"))?;
        Ok(Json(DiseaseDetail {
            id: disease.code,
            label: disease.name,
            category_id: category.id,
            category_label: category.label,
            block_id: block.id,
            block_label: block.label,
            chapter_id: chapter.id,
            chapter_label: chapter.label,
        }))
    })
    .await
}

#[derive(Debug, Default, Deserialize)]
struct DiseaseSearchQuery {
    q: Option<String>,
    page: Option<i64>,
    count: Option<i64>,
    #[serde(alias = "strictQuery")]
    strict: Option<String>,
}

impl DiseaseSearchQuery {
    fn query_string(&self) -> Result<&str, ApiError> {
        self.q
            .as_deref()
            .ok_or_else(|| ApiError::bad_request("code to query (q parameter) is required"))
    }

    fn check_count_cap(&self) -> Result<(), ApiError> {
        if self.count.is_some_and(|c| c > MAX_ELEMENTS_PER_PAGE) {
            return Err(ApiError::bad_request(format!(
                "Elements per page (count parameter) must be less than {MAX_ELEMENTS_PER_PAGE}"
            )));
        }
        Ok(())
    }

    fn strict(&self) -> bool {
        self.strict
            .as_deref()
            .is_some_and(|v| STRICT_VALUES.contains(&v.to_lowercase().as_str()))
    }
}

/// Searches diseases whose code starts with the query.
async fn search_code(
    State(state): State<AppState>,
    Query(query): Query<DiseaseSearchQuery>,
) -> Result<Json<Page<Disease>>, ApiError> {
    let code = query.query_string()?.to_string();
    query.check_count_cap()?;

    let matches = blocking(&state, move |catalog| {
        Ok(catalog.search_diseases(SearchField::Code, &code, MatchMode::Prefix)?)
    })
    .await?;
    if matches.is_empty() {
        return Err(ApiError::not_found("Diseases not found for given parameter"));
    }
    Ok(Json(icd10_catalog::paginate(
        matches, query.page, query.count,
    )))
}

/// Searches diseases by name: substring by default, prefix when `strict`.
async fn search_name(
    State(state): State<AppState>,
    Query(query): Query<DiseaseSearchQuery>,
) -> Result<Json<Page<Disease>>, ApiError> {
    let name = query.query_string()?.to_string();
    query.check_count_cap()?;
    let mode = if query.strict() {
        MatchMode::Prefix
    } else {
        MatchMode::Substring
    };

    let matches = blocking(&state, move |catalog| {
        Ok(catalog.search_diseases(SearchField::Name, &name, mode)?)
    })
    .await?;
    if matches.is_empty() {
        return Err(ApiError::not_found("Diseases not found for given parameter"));
    }
    Ok(Json(icd10_catalog::paginate(
        matches, query.page, query.count,
    )))
}
