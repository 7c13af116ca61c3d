//! Color theme constants for the stroke-risk UI
//!
//! Defines the dark color palette used throughout the UI, plus the
//! conversion from the option tables' `#rrggbb` accents.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the title
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Section step label ("Step 1")
pub const COLOR_STEP: Color = Color::Rgb(61, 99, 214); // #3d63d6

// ============================================================================
// Risk Colors
// ============================================================================

/// High-risk result text
pub const COLOR_HIGH_RISK: Color = Color::Rgb(255, 115, 119); // #ff7377

/// Low-risk result text
pub const COLOR_LOW_RISK: Color = Color::Rgb(4, 181, 117); // #04B575

/// Error banner background
pub const COLOR_ERROR_BG: Color = Color::Rgb(229, 57, 53); // #e53935

/// Disclaimer title and emergency text
pub const COLOR_WARNING: Color = Color::Rgb(201, 51, 45); // #c9332d

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Convert a `#rrggbb` accent to a terminal color.
///
/// Malformed strings fall back to [`COLOR_ACCENT`].
pub fn accent_color(hex: &str) -> Color {
    let Some(digits) = hex.strip_prefix('#') else {
        return COLOR_ACCENT;
    };
    if digits.len() != 6 || !digits.is_ascii() {
        return COLOR_ACCENT;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => COLOR_ACCENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_color() {
        assert_eq!(accent_color("#4e9cff"), Color::Rgb(0x4e, 0x9c, 0xff));
        assert_eq!(accent_color("#FF8888"), Color::Rgb(0xff, 0x88, 0x88));
    }

    #[test]
    fn test_accent_color_malformed() {
        assert_eq!(accent_color("4e9cff"), COLOR_ACCENT);
        assert_eq!(accent_color("#4e9c"), COLOR_ACCENT);
        assert_eq!(accent_color("#zzzzzz"), COLOR_ACCENT);
    }
}
