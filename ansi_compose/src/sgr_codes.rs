// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Closed tables of SGR (Select Graphic Rendition) parameter numbers.
//!
//! Every variant carries the exact integer that a terminal expects between `ESC [`
//! and `m`. Foreground colors are `30..=37`, `39` (default) and `90..=97` (bright).
//! Background colors are the same table offset by `+10`. Text styles are `0..=29`.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};
use strum_macros::{EnumCount, EnumIter};

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR sequence.
pub const SGR: &str = "m";

/// Sentinel meaning "style back to terminal default". A compiled prefix that is
/// byte for byte equal to this is treated as "no style" by
/// [`wrap`](crate::wrap).
pub const SGR_RESET: &str = "\x1b[0m";

/// Offset between a foreground color number and its background counterpart.
const BACKGROUND_OFFSET: u8 = 10;

#[repr(u8)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ForegroundCode {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
    Default = 39,
    BrightBlack = 90,
    BrightRed = 91,
    BrightGreen = 92,
    BrightYellow = 93,
    BrightBlue = 94,
    BrightMagenta = 95,
    BrightCyan = 96,
    BrightWhite = 97,
}

#[repr(u8)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundCode {
    Black = 40,
    Red = 41,
    Green = 42,
    Yellow = 43,
    Blue = 44,
    Magenta = 45,
    Cyan = 46,
    White = 47,
    Default = 49,
    BrightBlack = 100,
    BrightRed = 101,
    BrightGreen = 102,
    BrightYellow = 103,
    BrightBlue = 104,
    BrightMagenta = 105,
    BrightCyan = 106,
    BrightWhite = 107,
}

const _: () = {
    assert!(BackgroundCode::Black as u8 == ForegroundCode::Black as u8 + BACKGROUND_OFFSET);
    assert!(
        BackgroundCode::BrightWhite as u8
            == ForegroundCode::BrightWhite as u8 + BACKGROUND_OFFSET
    );
};

/// Text attributes, including the codes that turn an attribute back off.
#[repr(u8)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StyleCode {
    Reset = 0,
    Bold = 1,
    Dim = 2,
    Italic = 3,
    Underline = 4,
    BlinkSlow = 5,
    BlinkFast = 6,
    ReverseVideo = 7,
    Conceal = 8,
    CrossedOut = 9,
    Primary = 10,
    AlternativeFont1 = 11,
    AlternativeFont2 = 12,
    AlternativeFont3 = 13,
    AlternativeFont4 = 14,
    AlternativeFont5 = 15,
    AlternativeFont6 = 16,
    AlternativeFont7 = 17,
    AlternativeFont8 = 18,
    AlternativeFont9 = 19,
    Fraktur = 20,
    DoubleUnderline = 21,
    Normal = 22,
    ItalicAndFrakturOff = 23,
    UnderlineOff = 24,
    BlinkOff = 25,
    ProportionalSpacing = 26,
    ReverseAndInvertOff = 27,
    RevealAndConcealOff = 28,
    CrossedOff = 29,
}

mod sgr_codes_impl {
    use super::{BackgroundCode, Display, ForegroundCode, Formatter,
                Result, StyleCode};

    impl ForegroundCode {
        /// The SGR parameter number for this color.
        #[must_use]
        pub const fn code(self) -> u8 { self as u8 }

        /// The same named color in the background role.
        #[rustfmt::skip]
        #[must_use]
        pub const fn to_background(self) -> BackgroundCode {
            match self {
                ForegroundCode::Black         => BackgroundCode::Black,
                ForegroundCode::Red           => BackgroundCode::Red,
                ForegroundCode::Green         => BackgroundCode::Green,
                ForegroundCode::Yellow        => BackgroundCode::Yellow,
                ForegroundCode::Blue          => BackgroundCode::Blue,
                ForegroundCode::Magenta       => BackgroundCode::Magenta,
                ForegroundCode::Cyan          => BackgroundCode::Cyan,
                ForegroundCode::White         => BackgroundCode::White,
                ForegroundCode::Default       => BackgroundCode::Default,
                ForegroundCode::BrightBlack   => BackgroundCode::BrightBlack,
                ForegroundCode::BrightRed     => BackgroundCode::BrightRed,
                ForegroundCode::BrightGreen   => BackgroundCode::BrightGreen,
                ForegroundCode::BrightYellow  => BackgroundCode::BrightYellow,
                ForegroundCode::BrightBlue    => BackgroundCode::BrightBlue,
                ForegroundCode::BrightMagenta => BackgroundCode::BrightMagenta,
                ForegroundCode::BrightCyan    => BackgroundCode::BrightCyan,
                ForegroundCode::BrightWhite   => BackgroundCode::BrightWhite,
            }
        }
    }

    impl BackgroundCode {
        /// The SGR parameter number for this color.
        #[must_use]
        pub const fn code(self) -> u8 { self as u8 }

        #[rustfmt::skip]
        #[must_use]
        pub const fn to_foreground(self) -> ForegroundCode {
            match self {
                BackgroundCode::Black         => ForegroundCode::Black,
                BackgroundCode::Red           => ForegroundCode::Red,
                BackgroundCode::Green         => ForegroundCode::Green,
                BackgroundCode::Yellow        => ForegroundCode::Yellow,
                BackgroundCode::Blue          => ForegroundCode::Blue,
                BackgroundCode::Magenta       => ForegroundCode::Magenta,
                BackgroundCode::Cyan          => ForegroundCode::Cyan,
                BackgroundCode::White         => ForegroundCode::White,
                BackgroundCode::Default       => ForegroundCode::Default,
                BackgroundCode::BrightBlack   => ForegroundCode::BrightBlack,
                BackgroundCode::BrightRed     => ForegroundCode::BrightRed,
                BackgroundCode::BrightGreen   => ForegroundCode::BrightGreen,
                BackgroundCode::BrightYellow  => ForegroundCode::BrightYellow,
                BackgroundCode::BrightBlue    => ForegroundCode::BrightBlue,
                BackgroundCode::BrightMagenta => ForegroundCode::BrightMagenta,
                BackgroundCode::BrightCyan    => ForegroundCode::BrightCyan,
                BackgroundCode::BrightWhite   => ForegroundCode::BrightWhite,
            }
        }
    }

    impl StyleCode {
        #[must_use]
        pub const fn code(self) -> u8 { self as u8 }
    }

    /// Named codes render as their bare integer, ready to be joined with `;`.
    impl Display for ForegroundCode {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.code()) }
    }

    impl Display for BackgroundCode {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.code()) }
    }

    impl Display for StyleCode {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.code()) }
    }
}
