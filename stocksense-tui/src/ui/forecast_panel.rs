//! Panel 2 (Forecast): window slider, trend overlay, weekly estimate, stock check.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use stocksense_core::config::{MAX_WINDOW, MIN_WINDOW};

use crate::app::AppState;
use crate::theme;
use crate::ui::chart;
use crate::ui::overview_panel::product_line;
use crate::ui::widgets::Slider;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(6),
        ])
        .split(area);

    f.render_widget(Paragraph::new(product_line(app)), chunks[0]);

    let slider = Slider::new("Window", MIN_WINDOW, MAX_WINDOW, app.window.get())
        .unit("days  h/l adjust")
        .focused(true);
    f.render_widget(slider, chunks[1]);

    let (Some(series), Some(analysis)) = (&app.series, &app.analysis) else {
        f.render_widget(
            Paragraph::new(Span::styled("No products in the dataset.", theme::muted())),
            chunks[3],
        );
        return;
    };

    let title = format!("{} sales trend ({}-day moving average)", series.product(), app.window);
    chart::render(f, chunks[3], &title, series, Some(&analysis.trend));

    let forecast_style = if analysis.forecast.is_defined() {
        theme::positive()
    } else {
        theme::warning()
    };

    let mut lines = vec![
        Line::from(Span::styled("Next week", theme::accent_bold())),
        Line::from(Span::styled(analysis.forecast.message(&analysis.product), forecast_style)),
        Line::from(vec![
            Span::styled("Current stock  ", theme::muted()),
            Span::styled(format!("{} units", app.stock), theme::value()),
            Span::styled("   +/- 1   [/] 10   s enter", theme::muted()),
        ]),
    ];

    if let Some(advisory) = &analysis.advisory {
        lines.push(Line::from(Span::styled(
            advisory.message(),
            theme::advisory_style(advisory.is_sufficient),
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[4]);
}
