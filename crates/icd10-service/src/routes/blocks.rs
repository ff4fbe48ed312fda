//! Routes for blocks (`/v1/blocks/**`).

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use icd10_catalog::{Block, Dataset, MatchMode, Page, SearchField};
use serde::Serialize;

use crate::error::ApiError;
use crate::params::{sort_and_paginate, ListQuery};
use crate::routes::{blocking, AppState, EntitySummary};

const DEFAULT_COUNT: i64 = 10;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/{block_id}", get(get_one))
        .route("/{block_id}/categories", get(list_categories))
        .route("/search/{field}/{query}", get(search))
}

/// Retrieves all blocks, sorted and paginated.
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Block>>, ApiError> {
    let blocks = blocking(&state, |catalog| Ok(catalog.all_blocks(None)?)).await?;
    let page = sort_and_paginate(blocks, &query, "id", DEFAULT_COUNT)?;
    Ok(Json(page))
}

#[derive(Serialize)]
struct BlockDetail {
    id: String,
    label: String,
    #[serde(rename = "chapterId")]
    chapter_id: Option<String>,
    #[serde(rename = "chapterLabel")]
    chapter_label: Option<String>,
    #[serde(rename = "totalCategories")]
    total_categories: usize,
}

/// Retrieves one block with its parent chapter and category count.
///
/// A dangling chapter reference yields a partial result with null parent
/// fields rather than a failure.
async fn get_one(
    State(state): State<AppState>,
    Path(block_id): Path<String>,
) -> Result<Json<BlockDetail>, ApiError> {
    blocking(&state, move |catalog| {
        let block = catalog
            .block(&block_id)?
            .ok_or_else(|| ApiError::not_found("No block was found for given ID"))?;
        let chapter = catalog.chapter(&block.chapter_id)?;
        let categories = catalog.all_categories(Some(&block.id))?;
        Ok(Json(BlockDetail {
            id: block.id,
            label: block.label,
            chapter_id: chapter.as_ref().map(|c| c.id.clone()),
            chapter_label: chapter.map(|c| c.label),
            total_categories: categories.len(),
        }))
    })
    .await
}

#[derive(Serialize)]
struct BlockCategories {
    #[serde(rename = "chapterId")]
    chapter_id: Option<String>,
    #[serde(rename = "chapterLabel")]
    chapter_label: Option<String>,
    #[serde(rename = "blockId")]
    block_id: String,
    #[serde(rename = "blockLabel")]
    block_label: String,
    #[serde(flatten)]
    page: Page<EntitySummary>,
}

/// Retrieves the categories of one block, sorted and paginated.
async fn list_categories(
    State(state): State<AppState>,
    Path(block_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<BlockCategories>, ApiError> {
    let (block, chapter, categories) = blocking(&state, move |catalog| {
        let block = catalog
            .block(&block_id)?
            .ok_or_else(|| ApiError::not_found("No block was found for given ID"))?;
        let chapter = catalog.chapter(&block.chapter_id)?;
        let categories = catalog.all_categories(Some(&block.id))?;
        Ok((block, chapter, categories))
    })
    .await?;

    let summaries: Vec<EntitySummary> = categories
        .into_iter()
        .map(|c| EntitySummary {
            id: c.id,
            label: c.label,
        })
        .collect();
    let page = sort_and_paginate(summaries, &query, "id", DEFAULT_COUNT)?;

    Ok(Json(BlockCategories {
        chapter_id: chapter.as_ref().map(|c| c.id.clone()),
        chapter_label: chapter.map(|c| c.label),
        block_id: block.id,
        block_label: block.label,
        page,
    }))
}

/// Searches blocks by id or label.
///
/// An unknown field in the path is an invalid route, not an empty result.
async fn search(
    State(state): State<AppState>,
    Path((field, query_string)): Path<(String, String)>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Block>>, ApiError> {
    let field = SearchField::parse(Dataset::Blocks, &field)
        .map_err(|_| ApiError::invalid_route())?;
    let mode = match field {
        SearchField::Id => MatchMode::Prefix,
        _ => MatchMode::Substring,
    };
    let matches = blocking(&state, move |catalog| {
        Ok(catalog.search_blocks(field, &query_string, mode)?)
    })
    .await?;
    let page = sort_and_paginate(matches, &query, "id", DEFAULT_COUNT)?;
    Ok(Json(page))
}
