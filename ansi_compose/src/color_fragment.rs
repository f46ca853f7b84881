// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Sequencing of styled and unstyled fragments into one escape coded string.
//!
//! [`wrap`] folds over the fragments while tracking one bit of state: whether the
//! terminal is currently at its default style. That bit decides where resets go:
//!
//! ```text
//!  fragment      state before   emitted                   state after
//!  ───────────   ────────────   ───────────────────────   ───────────
//!  "a" + red     default        ESC[31m a                 styled
//!  "b" + red     styled         ESC[31m b                 styled
//!  "c"           styled         ESC[0m c                  default
//!  "d"           default        d                         default
//!  (end)         default        -                         -
//! ```
//!
//! A sequence that ends styled gets exactly one trailing [`SGR_RESET`]. An empty
//! sequence produces `""`.

use smallvec::SmallVec;

use crate::{ColorMode, SGR_RESET, Style, Styler};

/// Number of fragments held inline by [`ColorFragments`] before spilling to the heap.
pub const INLINE_FRAGMENTS_SIZE: usize = 8;

pub type ColorFragments<'a> = SmallVec<[ColorFragment<'a>; INLINE_FRAGMENTS_SIZE]>;

/// How a fragment is styled: a raw descriptor that [`wrap`] compiles on the fly, or a
/// [`Styler`] compiled ahead of time and shared between fragments.
#[derive(Clone, Debug, PartialEq)]
pub enum FragmentStyle<'a> {
    Raw(Style),
    Compiled(&'a Styler),
}

/// One unit of output: some text and an optional style.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorFragment<'a> {
    pub text: &'a str,
    pub style: Option<FragmentStyle<'a>>,
}

impl<'a> ColorFragment<'a> {
    /// Text in the terminal's default style.
    #[must_use]
    pub const fn plain(text: &'a str) -> Self { Self { text, style: None } }

    #[must_use]
    pub fn styled(text: &'a str, arg_style: impl Into<Style>) -> Self {
        Self {
            text,
            style: Some(FragmentStyle::Raw(arg_style.into())),
        }
    }

    #[must_use]
    pub const fn with_styler(text: &'a str, styler: &'a Styler) -> Self {
        Self {
            text,
            style: Some(FragmentStyle::Compiled(styler)),
        }
    }
}

impl<'a> From<&'a str> for ColorFragment<'a> {
    fn from(text: &'a str) -> Self { Self::plain(text) }
}

impl<'a> From<(&'a str, Style)> for ColorFragment<'a> {
    fn from((text, style): (&'a str, Style)) -> Self { Self::styled(text, style) }
}

impl<'a> From<(&'a str, &'a Styler)> for ColorFragment<'a> {
    fn from((text, styler): (&'a str, &'a Styler)) -> Self {
        Self::with_styler(text, styler)
    }
}

/// Collect fragments into a [`ColorFragments`]. Each argument can be anything that
/// converts into a [`ColorFragment`]: a `&str`, a `(&str, Style)` or a
/// `(&str, &Styler)`.
///
/// ```
/// use r3bl_ansi_compose::{ColorMode, ForegroundCode, Style, color_fragments, wrap};
///
/// let fragments = color_fragments!(("a", Style::from(ForegroundCode::Red)), "b");
/// assert_eq!(wrap(&fragments, ColorMode::Color), "\x1b[31ma\x1b[0mb");
/// ```
#[macro_export]
macro_rules! color_fragments {
    (
        $( $fragment:expr ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut acc: $crate::ColorFragments<'_> = $crate::ColorFragments::new();
        $(
            acc.push($crate::ColorFragment::from($fragment));
        )*
        acc
    }};
}

/// Concatenate `fragments` into a single string, inserting the fewest resets needed.
///
/// - An unstyled fragment that follows a styled one is preceded by one
///   [`SGR_RESET`].
/// - A styled fragment emits its prefix with no reset after it.
/// - If the last active style is not the default, one [`SGR_RESET`] is appended.
/// - In [`ColorMode::NoColor`] the result is the plain concatenation of the texts.
///
/// Only a [`Styler`] whose prefix is exactly [`SGR_RESET`] brings the state back to
/// default. A styler compiled from an empty [`Style`] (`ESC[m`) leaves the state
/// "styled", so a reset still follows it.
#[must_use]
pub fn wrap(fragments: &[ColorFragment<'_>], mode: ColorMode) -> String {
    let mut acc = String::new();
    wrap_into(&mut acc, fragments, mode);
    acc
}

/// Same as [`wrap`] but appends to `acc`, so callers can reuse a buffer.
pub fn wrap_into(acc: &mut String, fragments: &[ColorFragment<'_>], mode: ColorMode) {
    if fragments.is_empty() {
        return;
    }

    let is_color = mode.is_color();
    let mut is_default_style = true;

    for ColorFragment { text, style } in fragments {
        let Some(style) = style else {
            if is_color && !is_default_style {
                acc.push_str(SGR_RESET);
                is_default_style = true;
            }
            acc.push_str(text);
            continue;
        };

        let compiled;
        let styler = match style {
            FragmentStyle::Compiled(it) => *it,
            FragmentStyle::Raw(it) => {
                compiled = Styler::new(it);
                &compiled
            }
        };

        styler.color_into(acc, text, mode);
        is_default_style = styler.is_reset();
    }

    let needs_trailing_reset = is_color && !is_default_style;
    if needs_trailing_reset {
        acc.push_str(SGR_RESET);
    }

    tracing::trace!(
        message = "wrapped color fragments",
        fragment_count = fragments.len(),
        color_mode = %mode,
        trailing_reset = needs_trailing_reset
    );
}
