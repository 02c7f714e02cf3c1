//! Values shared with the component tree via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let profile = use_profile();
//! rsx! { "{profile().display_name}" }
//! ```

use dioxus::prelude::*;
use linkbio_core::{ProfileState, RefreshConfig};

/// Options handed from `main` to the root component at launch.
///
/// Passed through the launch context instead of a global so the refresh
/// credential reaches the task as an explicit value.
#[derive(Clone, Debug)]
pub struct LaunchOptions {
    /// `None` disables the nickname refresh
    pub refresh: Option<RefreshConfig>,
}

/// Hook to read the profile shown in the header.
///
/// Only the root component writes it, once, when the refresh succeeds.
pub fn use_profile() -> Signal<ProfileState> {
    use_context::<Signal<ProfileState>>()
}
