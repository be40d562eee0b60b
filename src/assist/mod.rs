//! Content-assist completion proxy
//!
//! Thin client for an OpenAI-compatible chat completion API, used by the
//! admin UI to draft notification copy. Streaming responses are exposed
//! as a finite sequence of chunks on a channel; the channel closing is
//! the end of the stream.
pub mod keypool;
pub use keypool::{KeyPool, Lease};

use std::time::Duration;

use anyhow::{Error, Result};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::sync::mpsc;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

pub async fn completion(
    messages: &Vec<Message>,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Value, Error> {
    let payload = json!({
        "model": model,
        "messages": messages,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 2))
        .json(&payload)
        .send()
        .await?
        .json()
        .await?;

    Ok(response)
}

/// Request a streamed completion. Returns a receiver of raw data chunks;
/// the stream is finite and ends (channel closes) at the upstream
/// `[DONE]` marker or when the connection drops.
pub async fn completion_stream(
    messages: &Vec<Message>,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<mpsc::UnboundedReceiver<String>, Error> {
    let payload = json!({
        "model": model,
        "messages": messages,
        "stream": true,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 2))
        .json(&payload)
        .send()
        .await?
        .error_for_status()?;

    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut stream = response.bytes_stream();
        let mut buffer = String::new();

        while let Some(chunk) = stream.next().await {
            let Ok(chunk) = chunk else {
                break;
            };
            let Ok(chunk_str) = std::str::from_utf8(&chunk) else {
                break;
            };

            // Buffering is necessary to handle SSE fragmentation over
            // HTTP/2 frames.
            buffer.push_str(chunk_str);

            // Process all complete SSE events in the buffer
            while let Some(event_end) = buffer.find("\n\n") {
                let event_data = buffer[..event_end].trim().to_string();
                buffer = buffer[event_end + 2..].to_string();

                let Some(data) = event_data.strip_prefix("data: ") else {
                    continue;
                };
                let data = data.trim();
                if data.is_empty() {
                    continue;
                }
                if data == "[DONE]" {
                    return;
                }
                if tx.send(data.to_string()).is_err() {
                    return;
                }
            }
        }
    });

    Ok(rx)
}
