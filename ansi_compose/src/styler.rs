// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result, Write as _};

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{CSI, ColorMode, SGR, SGR_RESET, Style};

/// Fits the longest possible prefix: two truecolor params plus a two digit style, ie
/// `ESC[38;2;255;255;255;48;2;255;255;255;29m`, without spilling to the heap.
pub const SGR_PREFIX_STORAGE_SIZE: usize = 40;

pub type SgrPrefix = SmallString<[u8; SGR_PREFIX_STORAGE_SIZE]>;

/// A [`Style`] compiled into a single escape prefix, `ESC[<params>m`, where params
/// are the present fields in foreground, background, style order joined with `;`.
///
/// Build it once (with [`compose`] or [`Styler::new`]) and apply it to any number of
/// strings. It is immutable, so it can be shared freely, including across threads.
///
/// An all-empty [`Style`] compiles to `ESC[m`. This is a well formed prefix with no
/// parameters and is *not* the same as [`SGR_RESET`].
///
/// ```
/// use r3bl_ansi_compose::{ColorMode, ForegroundCode, compose};
///
/// let red = compose(ForegroundCode::Red);
/// assert_eq!(red.color_once("x", ColorMode::Color), "\x1b[31mx\x1b[0m");
/// assert_eq!(red.color("x", ColorMode::Color), "\x1b[31mx");
/// assert_eq!(red.color_once("x", ColorMode::NoColor), "x");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Styler {
    color_code: SgrPrefix,
}

/// Compile a style descriptor into a reusable [`Styler`].
#[must_use]
pub fn compose(arg_style: impl Into<Style>) -> Styler {
    let style: Style = arg_style.into();
    Styler::new(&style)
}

impl Styler {
    #[must_use]
    pub fn new(arg_style: &Style) -> Self {
        let Style {
            foreground,
            background,
            style,
        } = arg_style;

        let mut params: SmallVec<[&dyn Display; 3]> = SmallVec::new();
        if let Some(it) = foreground {
            params.push(it);
        }
        if let Some(it) = background {
            params.push(it);
        }
        if let Some(it) = style {
            params.push(it);
        }

        let mut acc = SgrPrefix::new();
        acc.push_str(CSI);
        for (index, param) in params.iter().enumerate() {
            if index > 0 {
                acc.push(';');
            }
            _ = write!(acc, "{param}");
        }
        acc.push_str(SGR);

        // ? is Debug, which makes the escape byte visible.
        tracing::trace!(
            message = "compiled styler",
            color_code = ?acc.as_str(),
            no_params = arg_style.is_empty()
        );

        Self { color_code: acc }
    }

    /// A styler whose prefix is exactly [`SGR_RESET`].
    #[must_use]
    pub fn reset() -> Self { Self::new(&Style::new().with_style(crate::StyleCode::Reset)) }

    #[must_use]
    pub fn color_code(&self) -> &str { self.color_code.as_str() }

    /// True only if the prefix is byte for byte [`SGR_RESET`]. An empty `ESC[m` prefix
    /// does not count.
    #[must_use]
    pub fn is_reset(&self) -> bool { self.color_code.as_str() == SGR_RESET }

    /// Prefix followed by `text`, with no trailing reset. Identity in
    /// [`ColorMode::NoColor`].
    #[must_use]
    pub fn color(&self, text: &str, mode: ColorMode) -> String {
        let mut acc = String::with_capacity(self.color_code.len() + text.len());
        self.color_into(&mut acc, text, mode);
        acc
    }

    /// Prefix followed by `text` followed by [`SGR_RESET`]. Identity in
    /// [`ColorMode::NoColor`].
    #[must_use]
    pub fn color_once(&self, text: &str, mode: ColorMode) -> String {
        let mut acc =
            String::with_capacity(self.color_code.len() + text.len() + SGR_RESET.len());
        self.color_into(&mut acc, text, mode);
        if mode.is_color() {
            acc.push_str(SGR_RESET);
        }
        acc
    }

    pub(crate) fn color_into(&self, acc: &mut String, text: &str, mode: ColorMode) {
        if mode.is_color() {
            acc.push_str(&self.color_code);
        }
        acc.push_str(text);
    }
}

impl Display for Styler {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(&self.color_code) }
}

impl From<Style> for Styler {
    fn from(style: Style) -> Self { Self::new(&style) }
}

impl From<&Style> for Styler {
    fn from(style: &Style) -> Self { Self::new(style) }
}
