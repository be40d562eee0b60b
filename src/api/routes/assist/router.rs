//! Router for the content-assist API

use std::convert::Infallible;
use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, sse::Event, sse::KeepAlive, sse::Sse},
    routing::post,
};
use tokio::sync::mpsc;
use tokio_stream::StreamExt as _;
use tokio_stream::wrappers::UnboundedReceiverStream;

use super::public;
use crate::api::state::AppState;
use crate::assist;

type SharedState = Arc<RwLock<AppState>>;

/// Proxy a completion request to the configured provider, rotating over
/// the key pool. Streaming requests are relayed as SSE.
async fn completion_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::CompletionRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let (api_hostname, model) = {
        let shared_state = state.read().expect("Unable to read shared state");
        (
            shared_state.config.assist_api_hostname.clone(),
            shared_state.config.assist_model.clone(),
        )
    };

    let lease = {
        let mut shared_state = state.write().expect("Unable to write shared state");
        shared_state.keypool.acquire()
    };
    let Some(lease) = lease else {
        return Ok((
            StatusCode::SERVICE_UNAVAILABLE,
            "No completion provider key configured".to_string(),
        )
            .into_response());
    };

    if payload.stream {
        let upstream =
            assist::completion_stream(&payload.messages, &api_hostname, &lease.key, &model)
                .await;
        let mut upstream = match upstream {
            Ok(rx) => rx,
            Err(err) => {
                let mut shared_state =
                    state.write().expect("Unable to write shared state");
                shared_state.keypool.release(lease);
                return Err(err.into());
            }
        };

        // Relay chunks and return the lease once the upstream stream
        // runs dry
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        let relay_state = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(chunk) = upstream.recv().await {
                if tx.send(chunk).is_err() {
                    break;
                }
            }
            let mut shared_state = relay_state
                .write()
                .expect("Unable to write shared state");
            shared_state.keypool.release(lease);
        });

        let sse_stream = UnboundedReceiverStream::new(rx)
            .map(|chunk| Ok::<Event, Infallible>(Event::default().data(chunk)));
        return Ok(Sse::new(sse_stream)
            .keep_alive(KeepAlive::default())
            .into_response());
    }

    let result = assist::completion(&payload.messages, &api_hostname, &lease.key, &model).await;
    {
        let mut shared_state = state.write().expect("Unable to write shared state");
        shared_state.keypool.release(lease);
    }

    Ok(Json(result?).into_response())
}

/// Create the assist router
pub fn router() -> Router<SharedState> {
    Router::new().route("/completion", post(completion_handler))
}
