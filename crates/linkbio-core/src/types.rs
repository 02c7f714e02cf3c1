//! Profile state shown in the page header.

use serde::{Deserialize, Serialize};

/// Display name shown until (and unless) the refresh task finds a better one.
pub const DEFAULT_DISPLAY_NAME: &str = "Skizoo";

/// Avatar image, proxied through unavatar from the TikTok account.
pub const DEFAULT_AVATAR_URL: &str = "https://unavatar.io/tiktok/inidoffy";

/// The mutable data driving the profile header.
///
/// `display_name` is never empty. `avatar_url` is fixed for the lifetime of
/// the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileState {
    /// Name rendered in the glitch title and as the avatar alt text
    pub display_name: String,

    /// Avatar image URL
    pub avatar_url: String,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
        }
    }
}

impl ProfileState {
    /// Copy of this state with a new display name and the same avatar.
    pub fn with_display_name(&self, display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = ProfileState::default();
        assert_eq!(profile.display_name, "Skizoo");
        assert_eq!(profile.avatar_url, "https://unavatar.io/tiktok/inidoffy");
    }

    #[test]
    fn test_with_display_name_keeps_avatar() {
        let profile = ProfileState {
            display_name: "Old".to_string(),
            avatar_url: "https://example.com/a.png".to_string(),
        };
        let updated = profile.with_display_name("Nova");
        assert_eq!(updated.display_name, "Nova");
        assert_eq!(updated.avatar_url, "https://example.com/a.png");
    }
}
