//! Public types for the content-assist API
use serde::Deserialize;

use crate::assist::Message;

#[derive(Deserialize)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    #[serde(default)]
    pub stream: bool,
}
