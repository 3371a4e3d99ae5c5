//! Panel 1 (Overview): product selector, headline numbers, raw sales chart.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;
use crate::ui::chart;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(5),
        ])
        .split(area);

    f.render_widget(Paragraph::new(product_line(app)), chunks[0]);

    let Some(series) = &app.series else {
        f.render_widget(
            Paragraph::new(Span::styled("No products in the dataset.", theme::muted())),
            chunks[2],
        );
        return;
    };

    let summary = series.summary();
    let mean = summary
        .mean_daily
        .map(|m| format!("{m:.1} units"))
        .unwrap_or_else(|| "-".to_string());
    let span = series
        .date_span()
        .map(|(a, b)| format!("{a} to {b}"))
        .unwrap_or_else(|| "-".to_string());

    let kpis = vec![
        kpi("Total sales", format!("{} units", summary.total_units)),
        kpi("Daily average", mean),
        kpi("History", format!("{} days ({span})", summary.days)),
    ];
    f.render_widget(Paragraph::new(kpis), chunks[2]);

    let title = format!("{} daily sales", series.product());
    chart::render(f, chunks[3], &title, series, None);
}

/// `Product  < Laptop >  (1/5)` selector line.
pub(crate) fn product_line(app: &AppState) -> Line<'static> {
    let name = app.selected_product().unwrap_or("-").to_string();
    Line::from(vec![
        Span::styled("Product  ", theme::accent_bold()),
        Span::styled("< ", theme::muted()),
        Span::styled(name, theme::value()),
        Span::styled(" >", theme::muted()),
        Span::styled(
            format!("  ({}/{})", app.product_idx + 1, app.products.len().max(1)),
            theme::muted(),
        ),
        Span::styled("   j/k change product", theme::muted()),
    ])
}

fn kpi(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<15}"), theme::muted()),
        Span::styled(value, theme::value()),
    ])
}
