//! Router for the public widget feed

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::api::state::AppState;
use crate::feed::{FeedResponse, find_display_config, find_notifications, find_website};

type SharedState = Arc<RwLock<AppState>>;

/// Serve a website's notification list and resolved display config.
/// This is the single fetch the embedded widget performs at page load;
/// a website with no stored config gets the documented defaults.
async fn feed(
    State(state): State<SharedState>,
    Path(website_id): Path<String>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let db = state.read().expect("Unable to read shared state").db.clone();

    if find_website(&db, &website_id).await?.is_none() {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("Website {} not found", website_id),
        )
            .into_response());
    }

    let notifications = find_notifications(&db, &website_id).await?;
    let config = find_display_config(&db, &website_id)
        .await?
        .unwrap_or_default();

    Ok(Json(FeedResponse {
        notifications,
        config,
    })
    .into_response())
}

/// Create the embed router
pub fn router() -> Router<SharedState> {
    Router::new().route("/{website_id}", get(feed))
}
