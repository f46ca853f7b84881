// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

use crate::{BackgroundCode, BackgroundRgbCode, ForegroundCode, ForegroundRgbCode,
            StyleCode};

/// A foreground color, either from the named table or 24-bit truecolor.
///
/// In config files a named color is a string (`"red"`) and truecolor is a map
/// (`{ "red": 1, "green": 2, "blue": 3 }`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Foreground {
    Named(ForegroundCode),
    Rgb(ForegroundRgbCode),
}

/// A background color, either from the named table or 24-bit truecolor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Background {
    Named(BackgroundCode),
    Rgb(BackgroundRgbCode),
}

/// Style descriptor. Every field is optional, and a descriptor with no fields means
/// "no styling". Compile it once with [`compose`](crate::compose) to get a reusable
/// [`Styler`](crate::Styler).
///
/// ```
/// use r3bl_ansi_compose::{BackgroundCode, ForegroundCode, Style, StyleCode, compose};
///
/// let style = Style::new()
///     .fg(ForegroundCode::Red)
///     .bg(BackgroundCode::Blue)
///     .with_style(StyleCode::Bold);
/// assert_eq!(compose(style).color_once("x", Default::default()), "\x1b[31;44;1mx\x1b[0m");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Foreground>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleCode>,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            foreground: None,
            background: None,
            style: None,
        }
    }

    #[must_use]
    pub fn fg(mut self, arg_color: impl Into<Foreground>) -> Self {
        self.foreground = Some(arg_color.into());
        self
    }

    #[must_use]
    pub fn bg(mut self, arg_color: impl Into<Background>) -> Self {
        self.background = Some(arg_color.into());
        self
    }

    #[must_use]
    pub const fn with_style(mut self, style: StyleCode) -> Self {
        self.style = Some(style);
        self
    }

    /// No fields present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && self.style.is_none()
    }
}

mod conversions {
    use super::{Background, BackgroundCode, BackgroundRgbCode, Foreground,
                ForegroundCode, ForegroundRgbCode, Style, StyleCode};

    impl From<ForegroundCode> for Foreground {
        fn from(it: ForegroundCode) -> Self { Foreground::Named(it) }
    }

    impl From<ForegroundRgbCode> for Foreground {
        fn from(it: ForegroundRgbCode) -> Self { Foreground::Rgb(it) }
    }

    impl From<BackgroundCode> for Background {
        fn from(it: BackgroundCode) -> Self { Background::Named(it) }
    }

    impl From<BackgroundRgbCode> for Background {
        fn from(it: BackgroundRgbCode) -> Self { Background::Rgb(it) }
    }

    impl From<ForegroundCode> for Style {
        fn from(it: ForegroundCode) -> Self { Style::new().fg(it) }
    }

    impl From<ForegroundRgbCode> for Style {
        fn from(it: ForegroundRgbCode) -> Self { Style::new().fg(it) }
    }

    impl From<BackgroundCode> for Style {
        fn from(it: BackgroundCode) -> Self { Style::new().bg(it) }
    }

    impl From<BackgroundRgbCode> for Style {
        fn from(it: BackgroundRgbCode) -> Self { Style::new().bg(it) }
    }

    impl From<StyleCode> for Style {
        fn from(it: StyleCode) -> Self { Style::new().with_style(it) }
    }
}

impl Display for Foreground {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Foreground::Named(it) => write!(f, "{it}"),
            Foreground::Rgb(it) => write!(f, "{it}"),
        }
    }
}

impl Display for Background {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Background::Named(it) => write!(f, "{it}"),
            Background::Rgb(it) => write!(f, "{it}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_builder() {
        let style = Style::new()
            .fg(ForegroundRgbCode::from_u8(1, 2, 3))
            .bg(BackgroundCode::BrightBlack)
            .with_style(StyleCode::Italic);
        assert_eq!(
            style,
            Style {
                foreground: Some(Foreground::Rgb(ForegroundRgbCode::from_u8(1, 2, 3))),
                background: Some(Background::Named(BackgroundCode::BrightBlack)),
                style: Some(StyleCode::Italic),
            }
        );
        assert!(!style.is_empty());
        assert!(Style::default().is_empty());
    }

    #[test]
    fn test_display_of_color_roles() {
        assert_eq!(Foreground::from(ForegroundCode::Cyan).to_string(), "36");
        assert_eq!(
            Background::from(BackgroundRgbCode::from_u8(9, 8, 7)).to_string(),
            "48;2;9;8;7"
        );
    }

    #[test]
    fn test_deserialize_style_from_config() {
        let json = r#"{
            "foreground": "bright_red",
            "background": { "red": 10, "green": 20, "blue": 30 },
            "style": "underline"
        }"#;
        let style: Style = serde_json::from_str(json).unwrap();
        assert_eq!(
            style,
            Style::new()
                .fg(ForegroundCode::BrightRed)
                .bg(BackgroundRgbCode::from_u8(10, 20, 30))
                .with_style(StyleCode::Underline)
        );
    }

    #[test]
    fn test_deserialize_empty_style() {
        let style: Style = serde_json::from_str("{}").unwrap();
        assert!(style.is_empty());
        assert_eq!(serde_json::to_string(&style).unwrap(), "{}");
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_rgb() {
        let json = r#"{ "foreground": { "red": 256, "green": 0, "blue": 0 } }"#;
        assert!(serde_json::from_str::<Style>(json).is_err());
    }
}
