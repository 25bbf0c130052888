//! Presentation-only chrome: theme, header, tab bar, and the repository link.
//! Nothing here reads or writes the current book.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::process::Command;

use super::Route;

pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/Dinujaya-Sandaruwan/Sonora";
pub const HEADER_TITLE: &str = "Sonora Audiobooks";

/// Color table, hex strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub primary: &'static str,
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub notification: &'static str,
    pub inactive_tint: &'static str,
}

impl Theme {
    pub const SONORA: Theme = Theme {
        primary: "#4a8fff",
        background: "#0a192f",
        card: "#1e3a5f",
        text: "#ffffff",
        border: "#1e3a5f",
        notification: "#4a8fff",
        inactive_tint: "#6a8caf",
    };
}

impl Default for Theme {
    fn default() -> Self {
        Theme::SONORA
    }
}

/// Parse `#rrggbb` into components
pub fn rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: &'static str,
    pub left_icon: &'static str,
    pub right_action: HeaderAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderAction {
    pub icon: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabItem {
    pub route: Route,
    pub label: &'static str,
    pub icon: &'static str,
    pub tint: &'static str,
    pub focused: bool,
}

/// Static chrome bindings for the shell
#[derive(Debug, Clone)]
pub struct Chrome {
    pub theme: Theme,
    pub repository_url: String,
}

impl Chrome {
    pub fn new(repository_url: impl Into<String>) -> Self {
        Self {
            theme: Theme::SONORA,
            repository_url: repository_url.into(),
        }
    }

    pub fn header(&self) -> Header {
        Header {
            title: HEADER_TITLE,
            left_icon: "library",
            right_action: HeaderAction {
                icon: "github",
                url: self.repository_url.clone(),
            },
        }
    }

    pub fn tab_item(&self, route: Route, focused: bool) -> TabItem {
        TabItem {
            route,
            label: route.label(),
            icon: route.icon(),
            tint: if focused {
                self.theme.primary
            } else {
                self.theme.inactive_tint
            },
            focused,
        }
    }

    /// The header's right action
    pub fn open_repository(&self, opener: &dyn LinkOpener) -> Result<()> {
        opener.open(&self.repository_url)
    }
}

impl Default for Chrome {
    fn default() -> Self {
        Self::new(DEFAULT_REPOSITORY_URL)
    }
}

/// Hands a URL to something that can display it
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens links with the platform's default handler
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        let mut command = if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", ""]);
            c
        } else {
            Command::new("xdg-open")
        };

        let status = command
            .arg(url)
            .status()
            .with_context(|| format!("Failed to launch link opener for {}", url))?;

        if !status.success() {
            bail!("Link opener exited with error");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingOpener(RefCell<Vec<String>>);

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<()> {
            self.0.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_rgb() {
        assert_eq!(rgb("#4a8fff"), Some((0x4a, 0x8f, 0xff)));
        assert_eq!(rgb("#fff"), None);
        assert_eq!(rgb("4a8fff"), None);
        assert_eq!(rgb("#zz0000"), None);
    }

    #[test]
    fn test_theme_colors_parse() {
        let t = Theme::SONORA;
        for hex in [t.primary, t.background, t.card, t.text, t.border, t.notification, t.inactive_tint] {
            assert!(rgb(hex).is_some(), "{hex}");
        }
    }

    #[test]
    fn test_tab_tint_follows_focus() {
        let chrome = Chrome::default();
        assert_eq!(chrome.tab_item(Route::Player, true).tint, "#4a8fff");
        assert_eq!(chrome.tab_item(Route::AddBook, false).tint, "#6a8caf");
        assert_eq!(chrome.tab_item(Route::AddBook, false).icon, "add-circle-outline");
    }

    #[test]
    fn test_header_action_opens_repository() {
        let chrome = Chrome::new("https://example.com/repo");
        let opener = RecordingOpener(RefCell::new(Vec::new()));

        chrome.open_repository(&opener).unwrap();

        assert_eq!(*opener.0.borrow(), vec!["https://example.com/repo".to_string()]);
        assert_eq!(chrome.header().right_action.url, "https://example.com/repo");
        assert_eq!(chrome.header().title, "Sonora Audiobooks");
    }
}
