use anyhow::Result;
use popcue::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
