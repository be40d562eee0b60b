//! Terminal host for the display engine
//!
//! Plays the embedding contract: one required website identifier, a
//! single startup fetch, then the engine drives the cycle. A failed
//! fetch logs and leaves the host inert, it is never fatal.
use std::collections::HashMap;

use anyhow::Result;

use crate::core::AppConfig;
use crate::engine::{DisplayEngine, Handle, RenderOptions, Surface, ViewportMode};
use crate::feed::{self, models::NotificationItem};

/// Surface that renders notifications as terminal output
#[derive(Default)]
struct ConsoleSurface {
    titles: HashMap<Handle, String>,
}

impl Surface for ConsoleSurface {
    fn insert(&mut self, handle: Handle, item: &NotificationItem, options: &RenderOptions) {
        self.titles.insert(handle, item.title.clone());
        let timestamp = item.timestamp.as_deref().unwrap_or("");
        println!("┌─ {} [{}]", item.title, options.theme.as_str());
        if !item.message.is_empty() {
            println!("│  {}", item.message);
        }
        if !timestamp.is_empty() {
            println!("│  {}", timestamp);
        }
        if options.clickable {
            println!("│  ({})", item.url.as_deref().unwrap_or(""));
        }
        println!("└─");
    }

    fn reveal(&mut self, _handle: Handle) {}

    fn begin_exit(&mut self, _handle: Handle) {}

    fn detach(&mut self, handle: Handle) {
        if let Some(title) = self.titles.remove(&handle) {
            println!("   ({} gone)", title);
        }
    }

    fn open_url(&mut self, url: &str) {
        println!("   (would open {})", url);
    }
}

pub async fn run(website_id: String, width: u32, api_url: Option<String>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let api_url = api_url.unwrap_or_else(|| AppConfig::default().feed_api_url);

    let feed = match feed::fetch_feed(&api_url, &website_id).await {
        Ok(feed) => feed,
        Err(err) => {
            // The widget never breaks its host: log and stay inert
            tracing::error!("Failed to fetch the notification feed: {}", err);
            return Ok(());
        }
    };

    let mode = ViewportMode::classify(width);
    let (engine, _handle) = DisplayEngine::new(
        feed.notifications,
        feed.config,
        mode,
        ConsoleSurface::default(),
    );
    engine.run().await;

    Ok(())
}
