//! API routes module

pub mod assist;
pub mod embed;
pub mod site;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Public feed consumed by the embedded widget
        .nest("/embed", embed::router())
        // Admin-side website and notification management
        .nest("/site", site::router())
        // Content-assist completion proxy
        .nest("/assist", assist::router())
}
