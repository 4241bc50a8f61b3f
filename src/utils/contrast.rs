// SPDX-License-Identifier: MIT

//! Background/foreground contrast selection for colored list entries.
//!
//! Matches the site's admin widget: perceptual luminance over the sRGB
//! channels with a fixed threshold picking black or white text.

use anyhow::{Result, bail};

/// Foreground used on light backgrounds.
pub const FOREGROUND_DARK: &str = "#000000";
/// Foreground used on dark backgrounds.
pub const FOREGROUND_LIGHT: &str = "#FFFFFF";

/// Luminance above this value gets dark text.
const LUMINANCE_THRESHOLD: f32 = 186.0;

/// Parse a `#rrggbb` or `rrggbb` color string into channel values.
pub fn parse_hex_color(raw: &str) -> Result<(u8, u8, u8)> {
    let hex = raw.strip_prefix('#').unwrap_or(raw);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("'{raw}' is not a #rrggbb color");
    }

    // Length and digit checks above make these infallible.
    let r = u8::from_str_radix(&hex[0..2], 16)?;
    let g = u8::from_str_radix(&hex[2..4], 16)?;
    let b = u8::from_str_radix(&hex[4..6], 16)?;
    Ok((r, g, b))
}

/// Perceptual luminance of an sRGB triple, on the 0-255 scale.
pub fn luminance((r, g, b): (u8, u8, u8)) -> f32 {
    0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b)
}

/// Pick a readable text color for the given background.
pub fn foreground_for(background: (u8, u8, u8)) -> &'static str {
    if luminance(background) > LUMINANCE_THRESHOLD {
        FOREGROUND_DARK
    } else {
        FOREGROUND_LIGHT
    }
}

/// CSS declaration stored on colored entries, in the exact form the site's
/// select widget expects.
pub fn color_style(background: &str, foreground: &str) -> String {
    format!("background-color: {background}; color: {foreground};")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(parse_hex_color("#FF0000").unwrap(), (255, 0, 0));
        assert_eq!(parse_hex_color("00ff00").unwrap(), (0, 255, 0));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(parse_hex_color("#FFF").is_err());
        assert!(parse_hex_color("#GGGGGG").is_err());
        assert!(parse_hex_color("").is_err());
    }

    #[test]
    fn white_gets_dark_text() {
        assert_eq!(foreground_for((255, 255, 255)), FOREGROUND_DARK);
    }

    #[test]
    fn black_gets_light_text() {
        assert_eq!(foreground_for((0, 0, 0)), FOREGROUND_LIGHT);
    }

    #[test]
    fn mid_grays_sit_on_the_documented_side_of_the_threshold() {
        // 0x99 -> luminance ~153.7, 0xAA -> ~174.1: both below 186.
        assert_eq!(foreground_for(parse_hex_color("#999999").unwrap()), FOREGROUND_LIGHT);
        assert_eq!(foreground_for(parse_hex_color("#AAAAAA").unwrap()), FOREGROUND_LIGHT);
        // 0xC0 -> luminance ~192: above 186.
        assert_eq!(foreground_for(parse_hex_color("#C0C0C0").unwrap()), FOREGROUND_DARK);
    }

    #[test]
    fn style_declaration_matches_widget_format() {
        assert_eq!(
            color_style("#FF0000", FOREGROUND_LIGHT),
            "background-color: #FF0000; color: #FFFFFF;"
        );
    }
}
