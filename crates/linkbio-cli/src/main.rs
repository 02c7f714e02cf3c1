//! Link-in-bio CLI
//!
//! Thin wrapper around linkbio-core for checking the page's data without
//! opening a window.
//!
//! ## Usage
//!
//! ```bash
//! # Show the default profile
//! linkbio profile
//!
//! # List the outbound links
//! linkbio links
//!
//! # Run the nickname refresh once and print the resulting profile
//! GEMINI_API_KEY=... linkbio refresh
//!
//! # Same, as JSON, with failures appended to ./logs
//! linkbio --log-dir ./logs refresh --json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkbio_core::logging::LoggingBuilder;
use linkbio_core::{
    GeminiClient, ProfileState, RefreshConfig, RefreshOnce, SharedProfile, LINKS,
};
use serde::Serialize;

/// Link-in-bio profile tools
#[derive(Parser)]
#[command(name = "linkbio")]
#[command(version = "0.1.0")]
#[command(about = "Link-in-bio profile tools")]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Gemini API key (default: $GEMINI_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Model used for the nickname lookup
    #[arg(long, global = true)]
    model: Option<String>,

    /// Base URL of the generative search service
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Append warnings and errors to JSONL files in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the default profile
    Profile,

    /// List the outbound links
    Links,

    /// Run the nickname refresh once and print the resulting profile
    Refresh {
        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
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

/// JSON shape printed by `refresh --json`
#[derive(Serialize)]
struct RefreshReport {
    updated: bool,
    profile: ProfileState,
}

fn print_profile(profile: &ProfileState) {
    println!("Display name: {}", profile.display_name);
    println!("Avatar:       {}", profile.avatar_url);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingBuilder::new("cli").verbosity(cli.verbose);
    if let Some(dir) = &cli.log_dir {
        logging = logging.with_log_dir(dir);
    }
    logging.init()?;

    match &cli.command {
        Commands::Profile => {
            print_profile(&ProfileState::default());
        }

        Commands::Links => {
            let width = LINKS.iter().map(|l| l.name.len()).max().unwrap_or(0);
            for link in LINKS {
                println!("{:<width$}  {}", link.name, link.url, width = width);
                println!("{:<width$}  {}", "", link.label, width = width);
            }
        }

        Commands::Refresh { json } => {
            let profile = SharedProfile::default();
            let once = RefreshOnce::new();
            let client = GeminiClient::new(cli.refresh_config());

            // Enrichment failures are already logged; the default profile stands
            let updated = match once.spawn(client, profile.clone()) {
                Some(handle) => handle.await.unwrap_or_else(|e| {
                    tracing::error!(error = %e, "Refresh task did not complete");
                    false
                }),
                None => false,
            };

            let profile = profile.snapshot();
            if *json {
                let report = RefreshReport { updated, profile };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_profile(&profile);
                if !updated {
                    println!("(default kept)");
                }
            }
        }
    }

    Ok(())
}
