#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use linkbio_core::logging::LoggingBuilder;
use linkbio_core::RefreshConfig;

use crate::context::LaunchOptions;

/// Link-in-bio profile page
#[derive(Parser, Debug)]
#[command(name = "linkbio-desktop")]
#[command(about = "Animated link-in-bio profile page")]
struct Args {
    /// Gemini API key (default: $GEMINI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Model used for the nickname lookup
    #[arg(long)]
    model: Option<String>,

    /// Base URL of the generative search service
    #[arg(long)]
    endpoint: Option<String>,

    /// Skip the nickname refresh and show the default profile
    #[arg(long)]
    no_refresh: bool,

    /// Directory for the JSONL diagnostic log (default: <data dir>/linkbio/logs)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn refresh_config(&self) -> RefreshConfig {
        let mut config = RefreshConfig::from_env();
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint);
        }
        config
    }
}

fn default_log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("linkbio")
        .join("logs")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_dir = args.log_dir.clone().unwrap_or_else(default_log_dir);
    // Logging problems never keep the page from opening
    let log_path = LoggingBuilder::new("desktop")
        .with_log_dir(&log_dir)
        .verbosity(args.verbose)
        .init()
        .unwrap_or_else(|e| {
            eprintln!("linkbio-desktop: logging disabled: {e}");
            None
        });

    let refresh = if args.no_refresh {
        None
    } else {
        Some(args.refresh_config())
    };

    tracing::info!(
        refresh = refresh.is_some(),
        log = ?log_path,
        "Starting profile page"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Skizoo")
            .with_inner_size(dioxus::desktop::LogicalSize::new(480.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(LaunchOptions { refresh })
        .launch(app::App);

    Ok(())
}
