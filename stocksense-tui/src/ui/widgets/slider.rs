//! Labeled horizontal slider widget.
//!
//! Used by the Forecast panel for the moving-average window.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::theme;

const KNOB: char = '●';
const FILLED: char = '━';
const EMPTY: char = '─';

/// A one-line slider: `label  min ━━━●──── max  value unit`.
#[derive(Debug, Clone)]
pub struct Slider<'a> {
    label: &'a str,
    unit: &'a str,
    min: usize,
    max: usize,
    value: usize,
    focused: bool,
}

impl<'a> Slider<'a> {
    pub fn new(label: &'a str, min: usize, max: usize, value: usize) -> Self {
        Self {
            label,
            unit: "",
            min,
            max: max.max(min),
            value: value.clamp(min, max.max(min)),
            focused: false,
        }
    }

    pub fn unit(mut self, unit: &'a str) -> Self {
        self.unit = unit;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Knob position within a track of `width` cells.
    pub fn knob_position(&self, width: usize) -> usize {
        if width <= 1 || self.max == self.min {
            return 0;
        }
        (self.value - self.min) * (width - 1) / (self.max - self.min)
    }

    /// Track text of exactly `width` cells.
    pub fn track(&self, width: usize) -> String {
        let knob = self.knob_position(width);
        (0..width)
            .map(|i| match i.cmp(&knob) {
                std::cmp::Ordering::Less => FILLED,
                std::cmp::Ordering::Equal => KNOB,
                std::cmp::Ordering::Greater => EMPTY,
            })
            .collect()
    }
}

impl Widget for Slider<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let head = format!("{}  {} ", self.label, self.min);
        let tail = format!(" {}  {} {}", self.max, self.value, self.unit);
        let fixed = head.chars().count() + tail.chars().count();
        let width = (area.width as usize).saturating_sub(fixed).clamp(5, 60);

        let track_style = if self.focused { theme::accent() } else { theme::muted() };
        let line = Line::from(vec![
            Span::styled(format!("{}  ", self.label), theme::accent_bold()),
            Span::styled(format!("{} ", self.min), theme::muted()),
            Span::styled(self.track(width), track_style),
            Span::styled(format!(" {}", self.max), theme::muted()),
            Span::styled(format!("  {} {}", self.value, self.unit), theme::value()),
        ]);
        line.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knob_at_ends() {
        assert_eq!(Slider::new("w", 3, 30, 3).knob_position(10), 0);
        assert_eq!(Slider::new("w", 3, 30, 30).knob_position(10), 9);
    }

    #[test]
    fn track_has_one_knob() {
        let track = Slider::new("w", 3, 30, 7).track(28);
        assert_eq!(track.chars().count(), 28);
        assert_eq!(track.chars().filter(|&c| c == KNOB).count(), 1);
        // (7-3) * 27 / 27 = 4 filled cells before the knob
        assert!(track.starts_with("━━━━●"));
    }

    #[test]
    fn value_is_clamped() {
        let s = Slider::new("w", 3, 30, 99);
        assert_eq!(s.knob_position(10), 9);
        let s = Slider::new("w", 5, 5, 5);
        assert_eq!(s.track(3), "●──");
    }

    #[test]
    fn renders_label_and_value() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        Slider::new("Window", 3, 30, 7).unit("days").render(area, &mut buf);
        let text: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(text.starts_with("Window  3 "));
        assert!(text.contains(" 30  7 days"));
    }
}
