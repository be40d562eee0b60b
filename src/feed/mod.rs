pub mod db;
pub mod models;
pub mod plan;
pub use db::*;
pub use models::*;
pub use plan::*;

use anyhow::{Result, anyhow};

/// Fetch the notification feed for a website. This is the single startup
/// fetch the display engine depends on; callers treat any error as
/// "remain inert", never as fatal to the host.
pub async fn fetch_feed(api_url: &str, website_id: &str) -> Result<FeedResponse> {
    let url = format!(
        "{}/api/embed/{}",
        api_url.trim_end_matches('/'),
        website_id
    );
    let response = reqwest::Client::new().get(url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "Feed request for website {} failed with status {}",
            website_id,
            response.status()
        ));
    }

    Ok(response.json().await?)
}
