use std::rc::Rc;

use dioxus::prelude::*;
use linkbio_core::{refresh_profile, GeminiClient, ProfileState, RefreshOnce};

use crate::context::LaunchOptions;
use crate::pages::Bio;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The profile page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Bio {},
}

/// Root application component.
///
/// Owns the profile state, provides it to the page and launches the
/// nickname refresh once on mount.
#[component]
pub fn App() -> Element {
    let options = use_context::<LaunchOptions>();
    let mut profile: Signal<ProfileState> = use_signal(ProfileState::default);
    let refresh_once = use_hook(|| Rc::new(RefreshOnce::new()));

    use_context_provider(|| profile);

    // Best-effort enrichment; the page renders defaults meanwhile and keeps
    // them if anything goes wrong
    use_effect(move || {
        let Some(config) = options.refresh.clone() else {
            tracing::debug!("Profile refresh disabled");
            return;
        };
        if !refresh_once.try_start() {
            return;
        }
        spawn(async move {
            let client = GeminiClient::new(config);
            let outcome = refresh_profile(&client).await;
            profile.with_mut(|state| outcome.apply(state));
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
