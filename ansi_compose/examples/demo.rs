// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use r3bl_ansi_compose::{AnsiComposeResult, BackgroundCode, BackgroundRgbCode, ColorMode,
                        ForegroundCode, ForegroundRgbCode, Style, StyleCode,
                        color_fragments, compose, wrap};

/// Run with `cargo run --example demo -- no_color` to see the passthrough mode.
fn main() -> AnsiComposeResult<()> {
    let mode = std::env::args()
        .nth(1)
        .and_then(|arg| ColorMode::from_str(&arg).ok())
        .unwrap_or_default();

    // One styler, many fragments.
    {
        let label = compose(
            Style::new()
                .fg(ForegroundCode::BrightWhite)
                .bg(BackgroundCode::Blue)
                .with_style(StyleCode::Bold),
        );
        for (name, value) in [("cpu", "12%"), ("mem", "3.1G"), ("disk", "91%")] {
            let line = color_fragments!((name, &label), " ", value);
            println!("{}", wrap(&line, mode));
        }
    }

    // Truecolor.
    {
        let lizard_green = ForegroundRgbCode::try_new(20, 244, 0)?;
        let night_blue = BackgroundRgbCode::try_new(14, 17, 23)?;
        let line = color_fragments!(
            ("truecolor", Style::new().fg(lizard_green).bg(night_blue)),
            " then back to default"
        );
        println!("{}", wrap(&line, mode));
    }

    // Single strings.
    {
        let underline = compose(StyleCode::Underline);
        println!("{}", underline.color_once("underlined once", mode));
    }

    // Out of range channels are rejected.
    if let Err(error) = ForegroundRgbCode::try_new(0, 256, 0) {
        println!("{error}");
    }

    Ok(())
}
