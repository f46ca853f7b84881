// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_ansi_compose
//!
//! Compose styled text fragments into strings with ANSI SGR escape codes.
//!
//! There is no I/O here and no global state. You describe text plus an optional
//! foreground color, background color and text style, and get back the exact bytes a
//! terminal needs. Whether color is emitted at all is an explicit [`ColorMode`]
//! argument; detecting terminal capabilities is left to the caller.
//!
//! ## Pieces
//!
//! - [`ForegroundCode`], [`BackgroundCode`], [`StyleCode`]: closed tables of SGR
//!   parameter numbers.
//! - [`ForegroundRgbCode`], [`BackgroundRgbCode`]: validated 24-bit truecolor.
//! - [`Style`]: optional foreground, background and style.
//! - [`Styler`] (via [`compose`]): a [`Style`] compiled once into an `ESC[...m` prefix.
//! - [`wrap`]: folds a sequence of [`ColorFragment`]s into one string with the fewest
//!   resets.
//!
//! ## Example
//!
//! ```
//! use r3bl_ansi_compose::{BackgroundRgbCode, ColorMode, ForegroundCode, Style,
//!                         StyleCode, color_fragments, compose, wrap};
//!
//! # fn main() -> r3bl_ansi_compose::AnsiComposeResult<()> {
//! let warning = compose(Style::new().fg(ForegroundCode::Yellow).with_style(StyleCode::Bold));
//! let banner = Style::new().bg(BackgroundRgbCode::try_new(40, 40, 40)?);
//!
//! let line = color_fragments!(("warning:", &warning), " disk at ", ("91%", banner));
//! assert_eq!(
//!     wrap(&line, ColorMode::Color),
//!     "\x1b[33;1mwarning:\x1b[0m disk at \x1b[48;2;40;40;40m91%\x1b[0m"
//! );
//! assert_eq!(wrap(&line, ColorMode::NoColor), "warning: disk at 91%");
//! # Ok(())
//! # }
//! ```

// Enforce strict error handling in production code.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
mod color_fragment;
mod color_mode;
mod error;
mod rgb_code;
mod sgr_codes;
mod style;
mod styler;

// Re-export.
pub use color_fragment::*;
pub use color_mode::*;
pub use error::*;
pub use rgb_code::*;
pub use sgr_codes::*;
pub use style::*;
pub use styler::*;
