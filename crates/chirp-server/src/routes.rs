use std::sync::Arc;

use axum::{
    Router,
    extract::{Form, State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use chirp_db::Database;
use chirp_db::models::VoteOutcome;

use crate::error::AppError;
use crate::push::PushClient;
use crate::render;

/// Shared application state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub push: PushClient,
}

/// The closed set of known (method, action) pairs. Anything else,
/// including a wrong method on a known path, gets an empty 404.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/index", get(index).fallback(not_found))
        .route("/addChirp", post(add_chirp).fallback(not_found))
        .route("/upvote", post(upvote).fallback(not_found))
        .route("/downvote", post(downvote).fallback(not_found))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

// ── Request types ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AddChirpForm {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct VoteForm {
    pub id: i64,
}

// ── Handlers ────────────────────────────────────────────────────────────

/// GET /index — the full listing, rendered server-side.
async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let chirps = state.db.list_chirps()?;
    Ok(Html(render::render_index(&chirps)))
}

/// POST /addChirp — insert, notify, redirect back to the index.
async fn add_chirp(
    State(state): State<AppState>,
    form: Result<Form<AddChirpForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(req) = form.map_err(|_| AppError::BadRequest)?;

    let id = state.db.insert_chirp(&req.text)?;
    info!("Chirp {} added", id);

    state.push.notify(id).await;
    Ok(Redirect::to("/index"))
}

/// POST /upvote — always applied when the chirp exists.
async fn upvote(
    State(state): State<AppState>,
    form: Result<Form<VoteForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(req) = form.map_err(|_| AppError::BadRequest)?;

    state.db.get_chirp(req.id)?.ok_or(AppError::NotFound)?;
    state.db.upvote(req.id)?;

    state.push.notify(req.id).await;
    Ok(Redirect::to("/index"))
}

/// POST /downvote — a downvote at zero is a no-op and must not notify.
async fn downvote(
    State(state): State<AppState>,
    form: Result<Form<VoteForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(req) = form.map_err(|_| AppError::BadRequest)?;

    state.db.get_chirp(req.id)?.ok_or(AppError::NotFound)?;
    let outcome = state.db.downvote(req.id)?;

    if outcome == VoteOutcome::Applied {
        state.push.notify(req.id).await;
    }
    Ok(Redirect::to("/index"))
}
