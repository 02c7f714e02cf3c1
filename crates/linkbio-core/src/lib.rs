//! Link-in-bio Core Library
//!
//! Profile model, outbound link table and the one-shot nickname refresh.
//!
//! ## Overview
//!
//! The page shows a [`ProfileState`] (display name + avatar) and a fixed list
//! of [`SocialLink`]s. Once per page lifecycle a background task asks a
//! generative search service for the current nickname of the profile owner
//! and, if the answer looks like a nickname, replaces the display name.
//! Every failure is contained: the worst case is the default name staying on
//! screen.
//!
//! ## Quick Start
//!
//! ```ignore
//! use linkbio_core::{refresh_profile, GeminiClient, ProfileState, RefreshConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = RefreshConfig::from_env();
//!     let client = GeminiClient::new(config);
//!
//!     let mut profile = ProfileState::default();
//!     let outcome = refresh_profile(&client).await;
//!     outcome.apply(&mut profile);
//!
//!     println!("{}", profile.display_name);
//! }
//! ```

pub mod config;
pub mod error;
pub mod gemini;
pub mod links;
pub mod logging;
pub mod refresh;
pub mod types;

// Re-exports
pub use config::RefreshConfig;
pub use error::{EnrichmentError, EnrichmentResult};
pub use gemini::GeminiClient;
pub use links::{LinkIcon, SocialLink, FOOTER_TAGLINE, LINKS};
pub use refresh::{
    accept_nickname, refresh_profile, NicknameSource, RefreshOnce, RefreshOutcome, RejectReason,
    SharedProfile, MAX_NICKNAME_LEN,
};
pub use types::ProfileState;
