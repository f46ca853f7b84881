// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// Which channel of an RGB triple a value belongs to. Used to report the first
/// out-of-range channel when constructing an RGB code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

impl Display for RgbChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RgbChannel::Red => write!(f, "red"),
            RgbChannel::Green => write!(f, "green"),
            RgbChannel::Blue => write!(f, "blue"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, miette::Diagnostic)]
pub enum AnsiComposeError {
    #[error("🎨 RGB codes should be between 0 & 255, got: {value} ({channel})")]
    #[diagnostic(
        code(r3bl_ansi_compose::rgb_channel_out_of_range),
        help("Each of red, green and blue must be in the inclusive range 0..=255")
    )]
    RgbChannelOutOfRange { channel: RgbChannel, value: i64 },
}

pub type AnsiComposeResult<T> = std::result::Result<T, AnsiComposeError>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_error_message_names_value_and_channel() {
        let error = AnsiComposeError::RgbChannelOutOfRange {
            channel: RgbChannel::Green,
            value: 256,
        };
        assert_eq!(
            error.to_string(),
            "🎨 RGB codes should be between 0 & 255, got: 256 (green)"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        use miette::Diagnostic;

        let error = AnsiComposeError::RgbChannelOutOfRange {
            channel: RgbChannel::Red,
            value: -1,
        };
        let code = error.code().map(|it| it.to_string());
        assert_eq!(
            code.as_deref(),
            Some("r3bl_ansi_compose::rgb_channel_out_of_range")
        );
        assert!(error.help().is_some());
    }
}
