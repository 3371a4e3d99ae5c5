//! Panel 3 (Help): keyboard shortcuts and how the forecast is made.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use stocksense_core::config::{FORECAST_HORIZON_DAYS, MAX_WINDOW, MIN_WINDOW};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-3", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1: Overview");
    key(&mut lines, "j / k", "Next / previous product");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2: Forecast");
    key(&mut lines, "j / k", "Next / previous product");
    key(&mut lines, "h / l", "Narrow / widen the moving-average window");
    key(&mut lines, "+ / -", "Raise / lower current stock by 1");
    key(&mut lines, "] / [", "Raise / lower current stock by 10");
    key(&mut lines, "s / Enter", "Type the current stock level");
    key(&mut lines, "Esc", "Cancel stock entry");
    lines.push(Line::from(""));

    section(&mut lines, "How the forecast works");
    lines.push(Line::from(Span::styled(
        format!(
            "  The trend is a trailing moving average over the last N days ({MIN_WINDOW} to {MAX_WINDOW}). \
             The latest trend value is taken as the daily sales rate and multiplied by \
             {FORECAST_HORIZON_DAYS} to estimate next week's demand."
        ),
        theme::muted(),
    )));
    lines.push(Line::from(Span::styled(
        "  If the current stock is below that estimate, the shortfall is shown as the number of units to order.",
        theme::muted(),
    )));

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
