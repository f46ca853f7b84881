// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) codes.
//!
//! Channels arrive as `i64` so that out-of-range input can be rejected instead of
//! silently wrapping. Once constructed an RGB code is always valid, and renders as an
//! extended SGR parameter: `38;2;<r>;<g>;<b>` in the foreground role and
//! `48;2;<r>;<g>;<b>` in the background role. The `ESC [` ... `m` wrapper is added by
//! [`Styler`](crate::Styler).
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

use crate::{AnsiComposeError, AnsiComposeResult, RgbChannel};

/// Returns `value` as a `u8` if it is in `0..=255`.
///
/// # Errors
///
/// Returns [`AnsiComposeError::RgbChannelOutOfRange`] naming `channel` and `value`
/// otherwise.
pub fn check_rgb_range(channel: RgbChannel, value: i64) -> AnsiComposeResult<u8> {
    u8::try_from(value).map_err(|_| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🎨 rejected out of range RGB channel",
            channel = %channel,
            value = value
        );
        AnsiComposeError::RgbChannelOutOfRange { channel, value }
    })
}

/// Three validated channels. Shared by [`ForegroundRgbCode`] and
/// [`BackgroundRgbCode`], which only differ in the SGR introducer they render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedRgb")]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Wire shape of an [`RgbValue`] before range checks.
#[derive(Deserialize)]
struct UncheckedRgb {
    red: i64,
    green: i64,
    blue: i64,
}

impl RgbValue {
    /// Channels are checked in red, green, blue order, so the error always names the
    /// first one that is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiComposeError::RgbChannelOutOfRange`] if any channel is outside
    /// `0..=255`.
    pub fn try_new(red: i64, green: i64, blue: i64) -> AnsiComposeResult<Self> {
        Ok(Self {
            red: check_rgb_range(RgbChannel::Red, red)?,
            green: check_rgb_range(RgbChannel::Green, green)?,
            blue: check_rgb_range(RgbChannel::Blue, blue)?,
        })
    }

    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }
}

impl TryFrom<UncheckedRgb> for RgbValue {
    type Error = AnsiComposeError;

    fn try_from(it: UncheckedRgb) -> AnsiComposeResult<Self> {
        Self::try_new(it.red, it.green, it.blue)
    }
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// Truecolor in the foreground role. Renders as `38;2;<r>;<g>;<b>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForegroundRgbCode(pub RgbValue);

/// Truecolor in the background role. Renders as `48;2;<r>;<g>;<b>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackgroundRgbCode(pub RgbValue);

mod rgb_code_impl {
    use super::{AnsiComposeResult, BackgroundRgbCode, Display, ForegroundRgbCode,
                Formatter, Result, RgbValue};

    impl ForegroundRgbCode {
        /// # Errors
        ///
        /// Fails on the first channel (red, green, blue order) outside `0..=255`.
        pub fn try_new(red: i64, green: i64, blue: i64) -> AnsiComposeResult<Self> {
            RgbValue::try_new(red, green, blue).map(Self)
        }

        #[must_use]
        pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self {
            Self(RgbValue::from_u8(red, green, blue))
        }
    }

    impl BackgroundRgbCode {
        /// # Errors
        ///
        /// Fails on the first channel (red, green, blue order) outside `0..=255`.
        pub fn try_new(red: i64, green: i64, blue: i64) -> AnsiComposeResult<Self> {
            RgbValue::try_new(red, green, blue).map(Self)
        }

        #[must_use]
        pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self {
            Self(RgbValue::from_u8(red, green, blue))
        }
    }

    impl From<(u8, u8, u8)> for ForegroundRgbCode {
        fn from(it: (u8, u8, u8)) -> Self { Self(it.into()) }
    }

    impl From<(u8, u8, u8)> for BackgroundRgbCode {
        fn from(it: (u8, u8, u8)) -> Self { Self(it.into()) }
    }

    impl Display for ForegroundRgbCode {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let RgbValue { red, green, blue } = self.0;
            write!(f, "38;2;{red};{green};{blue}")
        }
    }

    impl Display for BackgroundRgbCode {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let RgbValue { red, green, blue } = self.0;
            write!(f, "48;2;{red};{green};{blue}")
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(0)]
    #[test_case(128)]
    #[test_case(255)]
    fn test_check_rgb_range_accepts(value: i64) {
        let it = check_rgb_range(RgbChannel::Red, value).unwrap();
        assert_eq!(i64::from(it), value);
    }

    #[test_case(-1)]
    #[test_case(256)]
    #[test_case(i64::MIN)]
    #[test_case(i64::MAX)]
    fn test_check_rgb_range_rejects(value: i64) {
        let result = check_rgb_range(RgbChannel::Blue, value);
        assert_eq!(
            result,
            Err(AnsiComposeError::RgbChannelOutOfRange {
                channel: RgbChannel::Blue,
                value
            })
        );
    }

    #[test]
    fn test_every_valid_channel_value_renders() {
        for value in 0..=255_u8 {
            let v = i64::from(value);
            let fg = ForegroundRgbCode::try_new(v, v, v).unwrap();
            let bg = BackgroundRgbCode::try_new(v, v, v).unwrap();
            assert_eq!(fg.to_string(), format!("38;2;{value};{value};{value}"));
            assert_eq!(bg.to_string(), format!("48;2;{value};{value};{value}"));
        }
    }

    #[test_case(1, 22, 255, "38;2;1;22;255")]
    #[test_case(0, 0, 0, "38;2;0;0;0")]
    fn test_foreground_render_no_padding(r: i64, g: i64, b: i64, expected: &str) {
        let it = ForegroundRgbCode::try_new(r, g, b).unwrap();
        assert_eq!(it.to_string(), expected);
    }

    #[test]
    fn test_background_render() {
        let it = BackgroundRgbCode::from((175, 215, 135));
        assert_eq!(it.to_string(), "48;2;175;215;135");
    }

    /// Red is valid, green and blue are not: green must be reported.
    #[test]
    fn test_first_bad_channel_wins() {
        let result = ForegroundRgbCode::try_new(10, 300, -5);
        assert_eq!(
            result,
            Err(AnsiComposeError::RgbChannelOutOfRange {
                channel: RgbChannel::Green,
                value: 300
            })
        );

        let result = BackgroundRgbCode::try_new(-1, 300, 999);
        assert_eq!(
            result,
            Err(AnsiComposeError::RgbChannelOutOfRange {
                channel: RgbChannel::Red,
                value: -1
            })
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: ForegroundRgbCode =
            serde_json::from_str(r#"{"red":1,"green":2,"blue":3}"#).unwrap();
        assert_eq!(ok, ForegroundRgbCode::from_u8(1, 2, 3));

        let err = serde_json::from_str::<BackgroundRgbCode>(
            r#"{"red":1,"green":2,"blue":256}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("got: 256 (blue)"));
    }
}
