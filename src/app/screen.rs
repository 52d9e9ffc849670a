// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
///
/// `CardAnimation` is the daily draw's reveal animation. The set is closed:
/// navigation only ever happens through these variants, never through raw
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Shuffle,
    Draw,
    Daily,
    CardAnimation,
    Result,
    Chat,
    Calendar,
    Explore,
    Profile,
}

impl Screen {
    /// Parses an external screen name (the `--screen` flag). Accepts the
    /// page identifiers of the original navigation model; `"animation"` is
    /// the daily reveal screen.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "home" => Some(Screen::Home),
            "shuffle" => Some(Screen::Shuffle),
            "draw" => Some(Screen::Draw),
            "daily" => Some(Screen::Daily),
            "animation" => Some(Screen::CardAnimation),
            "result" => Some(Screen::Result),
            "chat" => Some(Screen::Chat),
            "calendar" => Some(Screen::Calendar),
            "explore" => Some(Screen::Explore),
            "profile" => Some(Screen::Profile),
            _ => None,
        }
    }

    /// Resolves an external screen name, falling back to `Home` for
    /// anything unrecognized. The fallback is policy, not error handling:
    /// an unknown name must never crash navigation.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::warn!(name, "unknown screen name, falling back to home");
            Screen::Home
        })
    }

    /// Whether the bottom navigation is visible on this screen. Full-screen
    /// transitions (shuffle, the daily reveal) and the reading result hide
    /// it.
    pub fn shows_bottom_nav(self) -> bool {
        !matches!(
            self,
            Screen::Shuffle | Screen::Result | Screen::CardAnimation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_maps_every_page_identifier() {
        let cases = [
            ("home", Screen::Home),
            ("shuffle", Screen::Shuffle),
            ("draw", Screen::Draw),
            ("daily", Screen::Daily),
            ("animation", Screen::CardAnimation),
            ("result", Screen::Result),
            ("chat", Screen::Chat),
            ("calendar", Screen::Calendar),
            ("explore", Screen::Explore),
            ("profile", Screen::Profile),
        ];
        for (name, screen) in cases {
            assert_eq!(Screen::from_name(name), Some(screen), "name {name}");
        }
    }

    #[test]
    fn from_name_rejects_unknown_identifiers() {
        assert_eq!(Screen::from_name(""), None);
        assert_eq!(Screen::from_name("settings"), None);
        assert_eq!(Screen::from_name("Home"), None);
    }

    #[test]
    fn resolve_falls_back_to_home() {
        assert_eq!(Screen::resolve("nonsense"), Screen::Home);
        assert_eq!(Screen::resolve("draw"), Screen::Draw);
    }

    #[test]
    fn bottom_nav_hidden_exactly_on_transition_screens() {
        // Of the original nine pages, only result and shuffle hide the bar.
        let original_pages = [
            ("home", true),
            ("shuffle", false),
            ("draw", true),
            ("daily", true),
            ("result", false),
            ("chat", true),
            ("calendar", true),
            ("explore", true),
            ("profile", true),
        ];
        for (name, visible) in original_pages {
            let screen = Screen::from_name(name).unwrap();
            assert_eq!(screen.shows_bottom_nav(), visible, "page {name}");
        }
        // The daily reveal screen is a transition like shuffle.
        assert!(!Screen::CardAnimation.shows_bottom_nav());
    }
}
