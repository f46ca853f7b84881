// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// Whether styling is emitted at all. This is always an explicit argument; nothing in
/// this crate reads it from the environment or from a global. In
/// [`ColorMode::NoColor`] every styling operation is the identity function on its text.
///
/// Parses from and displays as `"color"` / `"no_color"`, so it can come straight from
/// a CLI flag or a config file.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    #[default]
    Color,
    NoColor,
}

impl ColorMode {
    #[must_use]
    pub const fn is_color(self) -> bool { matches!(self, ColorMode::Color) }
}

/// `true` means color is enabled.
impl From<bool> for ColorMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            ColorMode::Color
        } else {
            ColorMode::NoColor
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_default_is_color() {
        assert_eq!(ColorMode::default(), ColorMode::Color);
        assert!(ColorMode::default().is_color());
        assert!(!ColorMode::NoColor.is_color());
    }

    #[test_case("color", ColorMode::Color)]
    #[test_case("no_color", ColorMode::NoColor)]
    fn test_parse_and_display(input: &str, expected: ColorMode) {
        assert_eq!(ColorMode::from_str(input).unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[test]
    fn test_parse_unknown_fails() {
        assert!(ColorMode::from_str("maybe").is_err());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(ColorMode::from(true), ColorMode::Color);
        assert_eq!(ColorMode::from(false), ColorMode::NoColor);
    }

    #[test]
    fn test_serde() {
        let it: ColorMode = serde_json::from_str(r#""no_color""#).unwrap();
        assert_eq!(it, ColorMode::NoColor);
    }
}
