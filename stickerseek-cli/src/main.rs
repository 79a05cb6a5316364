//! Interactive Giphy sticker-search sessions from the terminal.

mod format;
mod menu;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stickerseek::config::GiphyConfig;
use stickerseek::fetch::{GiphyFetcher, TracingFetchObserver};
use stickerseek::session::SearchSession;

use menu::MenuOptions;

/// Interactive menu over paginated Giphy sticker searches.
#[derive(Parser, Debug)]
#[command(name = "stickerseek", version, about)]
struct Cli {
    /// API key to use instead of the built-in public key
    #[arg(long)]
    api_key: Option<String>,

    /// Search endpoint to request against
    #[arg(long)]
    base_url: Option<String>,

    /// Results to request per page
    #[arg(long)]
    page_size: Option<u32>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_seconds: Option<f64>,

    /// Keep previous screens instead of clearing the terminal
    #[arg(long)]
    no_clear: bool,

    /// Increase log verbosity on stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> GiphyConfig {
        let mut config = GiphyConfig::new();
        if let Some(key) = self.api_key {
            config = config.with_api_key(key);
        }
        if let Some(url) = self.base_url {
            config = config.with_base_url(url);
        }
        if let Some(size) = self.page_size {
            config = config.with_page_size(size);
        }
        if let Some(seconds) = self.timeout_seconds {
            config = config.with_timeout(seconds);
        }
        config
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = MenuOptions {
        clear_screen: !cli.no_clear,
    };
    let fetcher =
        GiphyFetcher::with_config(cli.into_config()).context("building the HTTP client")?;
    let mut session =
        SearchSession::with_observer(Arc::new(fetcher), Arc::new(TracingFetchObserver));
    info!(session_id = %session.id(), "interactive session starting");

    menu::run(&mut session, &options).await
}
