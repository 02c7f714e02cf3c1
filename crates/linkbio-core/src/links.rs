//! Fixed outbound link table and footer copy.

use serde::Serialize;

/// Icon drawn next to a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkIcon {
    Saweria,
    Discord,
}

/// One outbound link card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Headline of the card, also its key in the list
    pub name: &'static str,
    /// Secondary line under the name
    pub label: &'static str,
    /// Destination, opened in a new browsing context
    pub url: &'static str,
    pub icon: LinkIcon,
}

pub const LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Saweria",
        label: "Support the silence",
        url: "https://saweria.co/inidoffy",
        icon: LinkIcon::Saweria,
    },
    SocialLink {
        name: "Discord",
        label: "inidoffy",
        url: "https://discord.gg/dqcHDaEm",
        icon: LinkIcon::Discord,
    },
];

pub const FOOTER_TAGLINE: &str = "Free Thinker";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_names_are_unique() {
        let mut names: Vec<_> = LINKS.iter().map(|l| l.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), LINKS.len());
    }

    #[test]
    fn test_links_are_https() {
        for link in LINKS {
            assert!(link.url.starts_with("https://"), "{} is not https", link.url);
        }
    }

    #[test]
    fn test_link_order() {
        assert_eq!(LINKS[0].name, "Saweria");
        assert_eq!(LINKS[1].name, "Discord");
    }
}
