//! Router for the site admin API
//!
//! Plan-tier gating happens here, at write time. The display engine
//! trusts whatever the feed serves it.

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{post, put},
};
use chrono::Utc;
use uuid::Uuid;

use super::public;
use crate::api::state::AppState;
use crate::feed::models::{DisplayConfig, Website};
use crate::feed::{
    find_website, gate_config, gate_notifications, insert_website, replace_notifications,
    upsert_display_config,
};

type SharedState = Arc<RwLock<AppState>>;

/// Register a new website and return its generated identifier
async fn create_site(
    State(state): State<SharedState>,
    Json(payload): Json<public::CreateSiteRequest>,
) -> Result<Json<Website>, crate::api::public::ApiError> {
    let db = state.read().expect("Unable to read shared state").db.clone();

    let website = Website {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        plan: payload.plan,
        created_at: Utc::now().to_rfc3339(),
    };
    insert_website(&db, website.clone()).await?;

    Ok(Json(website))
}

/// Replace a website's entire notification list
async fn replace_list(
    State(state): State<SharedState>,
    Path(website_id): Path<String>,
    Json(payload): Json<public::ReplaceNotificationsRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let db = state.read().expect("Unable to read shared state").db.clone();

    let Some(website) = find_website(&db, &website_id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("Website {} not found", website_id),
        )
            .into_response());
    };

    let mut items = payload.notifications;
    for item in items.iter_mut() {
        if item.id.is_empty() {
            item.id = Uuid::new_v4().to_string();
        }
    }

    if let Err(violation) = gate_notifications(website.plan, &mut items) {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, violation).into_response());
    }

    let count = items.len();
    replace_notifications(&db, &website_id, items).await?;

    Ok(Json(serde_json::json!({"success": true, "count": count})).into_response())
}

/// Replace a website's display configuration. Missing fields resolve to
/// the documented defaults before storing.
async fn replace_config(
    State(state): State<SharedState>,
    Path(website_id): Path<String>,
    Json(mut config): Json<DisplayConfig>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let db = state.read().expect("Unable to read shared state").db.clone();

    let Some(website) = find_website(&db, &website_id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("Website {} not found", website_id),
        )
            .into_response());
    };

    gate_config(website.plan, &mut config);
    upsert_display_config(&db, &website_id, config).await?;

    Ok(Json(serde_json::json!({"success": true})).into_response())
}

/// Create the site router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(create_site))
        .route("/{website_id}/notifications", put(replace_list))
        .route("/{website_id}/config", put(replace_config))
}
