//! One-shot nickname refresh.
//!
//! The task asks a [`NicknameSource`] once, filters the answer through
//! [`accept_nickname`] and reports a [`RefreshOutcome`]. Applying the outcome
//! is the only way the display name ever changes. Errors stop here: they are
//! logged to the diagnostic channel and the profile keeps its prior value.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::task::JoinHandle;

use crate::error::{EnrichmentError, EnrichmentResult};
use crate::types::ProfileState;

/// Accepted nicknames are strictly shorter than this many UTF-16 code units.
pub const MAX_NICKNAME_LEN: usize = 50;

/// Where a fresh nickname comes from.
///
/// `Ok(None)` means the service answered but carried no text.
pub trait NicknameSource: Send + Sync {
    fn fetch_nickname(&self) -> impl Future<Output = EnrichmentResult<Option<String>>> + Send;
}

/// Why a successful answer was not used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The response had no text at all
    Absent,
    /// Only whitespace or byte order marks
    Empty,
    /// Trimmed length, in UTF-16 code units, at or above [`MAX_NICKNAME_LEN`]
    TooLong(usize),
}

/// Result of one refresh attempt.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// A usable nickname, already trimmed
    Updated(String),
    Rejected(RejectReason),
    Failed(EnrichmentError),
}

impl RefreshOutcome {
    /// The new display name, if any.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            RefreshOutcome::Updated(name) => Some(name),
            _ => None,
        }
    }

    /// Write the outcome into `state`.
    ///
    /// Only `display_name` is touched, and only on `Updated`. Returns whether
    /// anything was written.
    pub fn apply(&self, state: &mut ProfileState) -> bool {
        match self.display_name() {
            Some(name) => {
                *state = state.with_display_name(name);
                true
            }
            None => false,
        }
    }
}

/// Whitespace as web runtimes trim it: Unicode `White_Space` minus NEL, plus
/// the byte order mark.
fn is_nickname_padding(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Trim `raw` and check it is a plausible nickname.
///
/// Length is measured in UTF-16 code units, so characters outside the Basic
/// Multilingual Plane count twice.
pub fn accept_nickname(raw: &str) -> Result<&str, RejectReason> {
    let trimmed = raw.trim_matches(is_nickname_padding);
    if trimmed.is_empty() {
        return Err(RejectReason::Empty);
    }
    let len = trimmed.encode_utf16().count();
    if len >= MAX_NICKNAME_LEN {
        return Err(RejectReason::TooLong(len));
    }
    Ok(trimmed)
}

/// Ask `source` once and classify the answer.
///
/// Failures are logged at error level exactly once per call; rejections only
/// at debug level. Nothing is propagated.
#[tracing::instrument(name = "profile_refresh", skip_all)]
pub async fn refresh_profile<S: NicknameSource>(source: &S) -> RefreshOutcome {
    let raw = match source.fetch_nickname().await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch dynamic profile data");
            return RefreshOutcome::Failed(e);
        }
    };

    let accepted = raw
        .as_deref()
        .ok_or(RejectReason::Absent)
        .and_then(accept_nickname);

    match accepted {
        Ok(name) => {
            tracing::info!(display_name = %name, "Profile nickname refreshed");
            RefreshOutcome::Updated(name.to_string())
        }
        Err(reason) => {
            tracing::debug!(?reason, "Ignoring nickname from service");
            RefreshOutcome::Rejected(reason)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Headless state + exactly-once launch
// ═══════════════════════════════════════════════════════════════════════════════

/// Profile state shared between the refresh task and its readers.
///
/// The UI keeps its own reactive signal; this handle serves the CLI and
/// anything else running without a renderer.
#[derive(Debug, Clone, Default)]
pub struct SharedProfile {
    inner: Arc<RwLock<ProfileState>>,
}

impl SharedProfile {
    pub fn new(state: ProfileState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    pub fn snapshot(&self) -> ProfileState {
        self.inner.read().clone()
    }

    /// The single setter: applies `outcome` under the write lock.
    pub fn apply(&self, outcome: &RefreshOutcome) -> bool {
        outcome.apply(&mut self.inner.write())
    }
}

/// Guard making sure the refresh runs once per page lifecycle.
#[derive(Debug, Default)]
pub struct RefreshOnce {
    started: AtomicBool,
}

impl RefreshOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` for the first caller only.
    pub fn try_start(&self) -> bool {
        !self.started.swap(true, Ordering::AcqRel)
    }

    /// Launch the refresh on the tokio runtime, first call only.
    ///
    /// The handle resolves to whether the profile was updated. Later calls
    /// return `None` without touching `source`.
    pub fn spawn<S>(&self, source: S, profile: SharedProfile) -> Option<JoinHandle<bool>>
    where
        S: NicknameSource + 'static,
    {
        if !self.try_start() {
            tracing::debug!("Profile refresh already started, skipping");
            return None;
        }
        Some(tokio::spawn(async move {
            let outcome = refresh_profile(&source).await;
            profile.apply(&outcome)
        }))
    }
}
