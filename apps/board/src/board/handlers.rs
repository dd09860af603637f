//! Axum route handlers for the board API.
//!
//! Each handler maps one user action onto the session's controller and answers with
//! the re-rendered board.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::filter::matches;
use crate::errors::AppError;
use crate::render::{render_board, render_card, BoardView, ListingCard};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AddFilterRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct OpenBoardResponse {
    pub board_id: Uuid,
    pub view: BoardView,
}

#[derive(Debug, Default, Deserialize)]
pub struct JobsQuery {
    /// Comma-separated filter names, matched exactly as sent.
    pub filters: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub listings: Vec<ListingCard>,
    pub total: usize,
    pub visible: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/boards
pub async fn handle_open_board(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<OpenBoardResponse>), AppError> {
    let board_id = state.sessions.open().await?;
    let view = state
        .sessions
        .with_board(board_id, |c| render_board(c, &state.logos))
        .await?;
    Ok((StatusCode::CREATED, Json(OpenBoardResponse { board_id, view })))
}

/// GET /api/v1/boards/:id
pub async fn handle_get_board(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BoardView>, AppError> {
    let view = state
        .sessions
        .with_board(id, |c| render_board(c, &state.logos))
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/boards/:id/filters
///
/// Skill chip click. The name is stored exactly as sent.
pub async fn handle_add_filter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddFilterRequest>,
) -> Result<Json<BoardView>, AppError> {
    if request.name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let view = state
        .sessions
        .with_board(id, |c| {
            c.add_filter(&request.name);
            render_board(c, &state.logos)
        })
        .await?;
    Ok(Json(view))
}

/// DELETE /api/v1/boards/:id/filters/:name
pub async fn handle_remove_filter(
    State(state): State<AppState>,
    Path((id, name)): Path<(Uuid, String)>,
) -> Result<Json<BoardView>, AppError> {
    let view = state
        .sessions
        .with_board(id, |c| {
            c.remove_filter(&name);
            render_board(c, &state.logos)
        })
        .await?;
    Ok(Json(view))
}

/// PUT /api/v1/boards/:id/search
///
/// Sent on every keystroke; no debounce.
pub async fn handle_set_search(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<BoardView>, AppError> {
    let view = state
        .sessions
        .with_board(id, |c| {
            c.set_search(&request.text);
            render_board(c, &state.logos)
        })
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/boards/:id/clear
///
/// Rejected with 409 when there is nothing to clear, like the disabled button.
pub async fn handle_clear(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BoardView>, AppError> {
    state
        .sessions
        .with_board(id, |c| {
            if !c.can_clear() {
                return Err(AppError::Conflict("No filters or search to clear".to_string()));
            }
            c.clear_all();
            Ok(render_board(c, &state.logos))
        })
        .await?
        .map(Json)
}

/// DELETE /api/v1/boards/:id
pub async fn handle_close_board(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.close(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/jobs?filters=React,Sass&search=acme
///
/// One-shot evaluation over the full listing set without opening a board.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobsQuery>,
) -> Result<Json<JobsResponse>, AppError> {
    let filters: Vec<&str> = query
        .filters
        .as_deref()
        .map(|raw| raw.split(',').filter(|f| !f.is_empty()).collect())
        .unwrap_or_default();
    let search = query.search.as_deref().unwrap_or("");

    let all = state.sessions.listings();
    let listings: Vec<ListingCard> = all
        .iter()
        .filter(|listing| matches(listing, filters.iter(), search))
        .map(|listing| render_card(listing, &state.logos))
        .collect();

    Ok(Json(JobsResponse {
        total: all.len(),
        visible: listings.len(),
        listings,
    }))
}
