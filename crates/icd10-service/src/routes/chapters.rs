//! Routes for chapters (`/v1/chapters/**`).

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use icd10_catalog::{Chapter, MatchMode, Page, SearchField};
use serde::Serialize;

use crate::error::ApiError;
use crate::params::{paginate_only, sort_and_paginate, ListQuery};
use crate::routes::{blocking, AppState, EntitySummary};

const DEFAULT_COUNT: i64 = 10;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/{chapter_id}", get(get_one))
        .route("/{chapter_id}/blocks", get(list_blocks))
        .route("/search/label/{query}", get(search_label))
}

/// Retrieves all chapters, paginated in file order.
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Chapter>>, ApiError> {
    let chapters = blocking(&state, |catalog| Ok(catalog.all_chapters()?)).await?;
    Ok(Json(paginate_only(chapters, &query, DEFAULT_COUNT)))
}

#[derive(Serialize)]
struct ChapterDetail {
    #[serde(flatten)]
    chapter: Chapter,
    #[serde(rename = "totalBlocks")]
    total_blocks: usize,
}

/// Retrieves one chapter (by roman numeral or decimal id) and its block count.
async fn get_one(
    State(state): State<AppState>,
    Path(chapter_id): Path<String>,
) -> Result<Json<ChapterDetail>, ApiError> {
    blocking(&state, move |catalog| {
        let chapter = catalog
            .chapter(&chapter_id)?
            .ok_or_else(|| ApiError::not_found("No chapter was found for given chapter ID"))?;
        let blocks = catalog.all_blocks(Some(&chapter.id))?;
        Ok(Json(ChapterDetail {
            chapter,
            total_blocks: blocks.len(),
        }))
    })
    .await
}

#[derive(Serialize)]
struct ChapterBlocks {
    #[serde(rename = "chapterId")]
    chapter_id: String,
    #[serde(rename = "chapterLabel")]
    chapter_label: String,
    #[serde(flatten)]
    page: Page<EntitySummary>,
}

/// Retrieves the blocks of one chapter, sorted and paginated.
async fn list_blocks(
    State(state): State<AppState>,
    Path(chapter_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ChapterBlocks>, ApiError> {
    let (chapter, blocks) = blocking(&state, move |catalog| {
        let chapter = catalog
            .chapter(&chapter_id)?
            .ok_or_else(|| ApiError::not_found("No chapter was found for given chapter ID"))?;
        let blocks = catalog.all_blocks(Some(&chapter.id))?;
        Ok((chapter, blocks))
    })
    .await?;

    let summaries: Vec<EntitySummary> = blocks
        .into_iter()
        .map(|b| EntitySummary {
            id: b.id,
            label: b.label,
        })
        .collect();
    let page = sort_and_paginate(summaries, &query, "id", DEFAULT_COUNT)?;

    Ok(Json(ChapterBlocks {
        chapter_id: chapter.id,
        chapter_label: chapter.label,
        page,
    }))
}

/// Searches chapters whose label matches the query string.
async fn search_label(
    State(state): State<AppState>,
    Path(query_string): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Chapter>>, ApiError> {
    let matches = blocking(&state, move |catalog| {
        Ok(catalog.search_chapters(SearchField::Label, &query_string, MatchMode::Substring)?)
    })
    .await?;
    Ok(Json(paginate_only(matches, &query, DEFAULT_COUNT)))
}
