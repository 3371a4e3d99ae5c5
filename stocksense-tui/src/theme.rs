//! Parrot/neon theme tokens for the StockSense TUI.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (primary highlights, focus, trend line)
//! - **Positive**: Neon green (sufficient stock, defined forecast)
//! - **Negative**: Hot pink (shortfall, errors)
//! - **Warning**: Neon orange (insufficient history, alerts)
//! - **Neutral**: Cool purple (secondary info)
//! - **Muted**: Steel blue (labels, raw series)

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
/// Raw sales are drawn faintly under the trend.
pub const RAW_SERIES: Color = Color::Rgb(120, 120, 130);
pub const TEXT_PRIMARY: Color = Color::White;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn value() -> Style {
    Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn panel_border() -> Style {
    accent()
}

pub fn panel_title() -> Style {
    accent_bold()
}

/// Green when stock covers the estimate, pink otherwise.
pub fn advisory_style(is_sufficient: bool) -> Style {
    if is_sufficient {
        positive().add_modifier(Modifier::BOLD)
    } else {
        negative().add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advisory_colors() {
        assert_eq!(advisory_style(true).fg, Some(POSITIVE));
        assert_eq!(advisory_style(false).fg, Some(NEGATIVE));
    }

    #[test]
    fn panel_frame_uses_accent() {
        assert_eq!(panel_border().fg, Some(ACCENT));
        assert_eq!(panel_title().fg, Some(ACCENT));
        assert!(panel_title().add_modifier.contains(Modifier::BOLD));
    }
}
