//! Routes for categories (`/v1/categories/**`).

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use icd10_catalog::{Category, Dataset, MatchMode, Page, SearchField};
use serde::Serialize;

use crate::error::ApiError;
use crate::params::{sort_and_paginate, ListQuery};
use crate::routes::{blocking, AppState, EntitySummary};

const DEFAULT_COUNT: i64 = 10;
const SEARCH_DEFAULT_COUNT: i64 = 20;

/// Accepted aliases for the subcategory listing path segment.
const SUBCATEGORY_KEYS: [&str; 4] = ["subcategories", "diseases", "diagnosis", "dx"];

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/{category_id}", get(get_one))
        .route("/{category_id}/{key}", get(list_subcategories))
        .route("/search/{field}/{query}", get(search))
}

/// Retrieves all categories, sorted and paginated.
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Category>>, ApiError> {
    let categories = blocking(&state, |catalog| Ok(catalog.all_categories(None)?)).await?;
    let page = sort_and_paginate(categories, &query, "id", DEFAULT_COUNT)?;
    Ok(Json(page))
}

#[derive(Serialize)]
struct CategoryDetail {
    id: String,
    label: String,
    #[serde(rename = "blockId")]
    block_id: Option<String>,
    #[serde(rename = "blockLabel")]
    block_label: Option<String>,
    #[serde(rename = "chapterId")]
    chapter_id: Option<String>,
    #[serde(rename = "chapterLabel")]
    chapter_label: Option<String>,
    #[serde(rename = "totalSubcategories")]
    total_subcategories: usize,
}

/// Retrieves one category with its parent block/chapter and subcategory
/// count. Dangling parent references yield partial results.
async fn get_one(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<CategoryDetail>, ApiError> {
    blocking(&state, move |catalog| {
        let category = catalog
            .category(&category_id)?
            .ok_or_else(|| ApiError::not_found("No category was found for given ID"))?;
        let block = catalog.block(&category.block_id)?;
        let chapter = match &block {
            Some(block) => catalog.chapter(&block.chapter_id)?,
            None => None,
        };
        let subcategories = catalog.all_diseases(Some(&category.id))?;
        Ok(Json(CategoryDetail {
            id: category.id,
            label: category.label,
            block_id: block.as_ref().map(|b| b.id.clone()),
            block_label: block.map(|b| b.label),
            chapter_id: chapter.as_ref().map(|c| c.id.clone()),
            chapter_label: chapter.map(|c| c.label),
            total_subcategories: subcategories.len(),
        }))
    })
    .await
}

#[derive(Serialize)]
struct CategorySubcategories {
    #[serde(rename = "chapterId")]
    chapter_id: Option<String>,
    #[serde(rename = "chapterLabel")]
    chapter_label: Option<String>,
    #[serde(rename = "blockId")]
    block_id: Option<String>,
    #[serde(rename = "blockLabel")]
    block_label: Option<String>,
    #[serde(rename = "categoryId")]
    category_id: String,
    #[serde(rename = "categoryLabel")]
    category_label: String,
    #[serde(flatten)]
    page: Page<EntitySummary>,
}

/// Retrieves the subcategories of one category, with codes in dotted
/// display form (`A00.9`), sorted and paginated.
async fn list_subcategories(
    State(state): State<AppState>,
    Path((category_id, key)): Path<(String, String)>,
    Query(query): Query<ListQuery>,
) -> Result<Json<CategorySubcategories>, ApiError> {
    if !SUBCATEGORY_KEYS.contains(&key.to_lowercase().as_str()) {
        return Err(ApiError::invalid_route());
    }

    let (category, block, chapter, diseases) = blocking(&state, move |catalog| {
        let category = catalog
            .category(&category_id)?
            .ok_or_else(|| ApiError::not_found("No category was found for given ID"))?;
        let block = catalog.block(&category.block_id)?;
        let chapter = match &block {
            Some(block) => catalog.chapter(&block.chapter_id)?,
            None => None,
        };
        let diseases = catalog.all_diseases(Some(&category.id))?;
        Ok((category, block, chapter, diseases))
    })
    .await?;

    let summaries: Vec<EntitySummary> = diseases
        .iter()
        .map(|d| EntitySummary {
            id: d.dotted_code(),
            label: d.name.clone(),
        })
        .collect();
    let page = sort_and_paginate(summaries, &query, "id", DEFAULT_COUNT)?;

    Ok(Json(CategorySubcategories {
        chapter_id: chapter.as_ref().map(|c| c.id.clone()),
        chapter_label: chapter.map(|c| c.label),
        block_id: block.as_ref().map(|b| b.id.clone()),
        block_label: block.map(|b| b.label),
        category_id: category.id,
        category_label: category.label,
        page,
    }))
}

/// Searches categories by id or label.
async fn search(
    State(state): State<AppState>,
    Path((field, query_string)): Path<(String, String)>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Category>>, ApiError> {
    let field = SearchField::parse(Dataset::Categories, &field)
        .map_err(|_| ApiError::invalid_route())?;
    let mode = match field {
        SearchField::Id => MatchMode::Prefix,
        _ => MatchMode::Substring,
    };
    let matches = blocking(&state, move |catalog| {
        Ok(catalog.search_categories(field, &query_string, mode)?)
    })
    .await?;
    let page = sort_and_paginate(matches, &query, "id", SEARCH_DEFAULT_COUNT)?;
    Ok(Json(page))
}
