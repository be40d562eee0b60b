use anyhow::Result;
use clap::{Parser, Subcommand};
use std::env;

pub mod init;
pub mod preview;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Initialize the notification store
    Init {},
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "3344")]
        port: String,
    },
    /// Fetch a website's feed and play its notification cycle in the
    /// terminal
    Preview {
        /// Website identifier the feed is scoped to
        #[arg(long)]
        website_id: String,

        /// Viewport width used for the narrow/wide classification
        #[arg(long, default_value = "1280")]
        width: u32,

        /// Base URL of the feed API (defaults to the configured server)
        #[arg(long)]
        api_url: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    let storage_path = env::var("POPCUE_STORAGE_PATH").unwrap_or("./".to_string());
    let db_path = format!("{}/db", storage_path);

    // Handle each sub command
    match args.command {
        Some(Command::Init {}) => {
            init::run(&db_path).await?;
        }
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await;
        }
        Some(Command::Preview {
            website_id,
            width,
            api_url,
        }) => {
            preview::run(website_id, width, api_url).await?;
        }
        None => {}
    }

    Ok(())
}
