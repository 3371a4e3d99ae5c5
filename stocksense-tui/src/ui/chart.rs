//! Line charts of daily sales, optionally overlaid with the moving-average trend.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph};
use stocksense_core::{SalesSeries, TrendSeries};

use crate::theme;

/// Daily units as (day index, units) points.
pub fn raw_points(series: &SalesSeries) -> Vec<(f64, f64)> {
    series
        .units()
        .enumerate()
        .map(|(i, u)| (i as f64, u as f64))
        .collect()
}

/// Defined trend values as (day index, value) points. Leading gaps are skipped.
pub fn trend_points(trend: &TrendSeries) -> Vec<(f64, f64)> {
    trend
        .points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.value.map(|v| (i as f64, v)))
        .collect()
}

/// Upper y bound with 5% headroom; never below 1.
pub fn y_upper(points: &[(f64, f64)]) -> f64 {
    let max_y = points.iter().map(|&(_, y)| y).fold(0.0, f64::max);
    (max_y * 1.05).max(1.0)
}

pub fn render(f: &mut Frame, area: Rect, title: &str, series: &SalesSeries, trend: Option<&TrendSeries>) {
    let block = Block::default().title(Span::styled(format!(" {title} "), theme::accent_bold()));

    if series.is_empty() {
        let para = Paragraph::new(Span::styled("No sales recorded for this product.", theme::muted()))
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let raw = raw_points(series);
    let smoothed = trend.map(trend_points).unwrap_or_default();

    let raw_color = if trend.is_some() {
        theme::RAW_SERIES
    } else {
        theme::ACCENT
    };

    let mut datasets = vec![Dataset::default()
        .name("Daily sales")
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(raw_color))
        .graph_type(GraphType::Line)
        .data(&raw)];

    if let Some(t) = trend {
        datasets.push(
            Dataset::default()
                .name(format!("{}-day moving average", t.window))
                .marker(symbols::Marker::Braille)
                .style(Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD))
                .graph_type(GraphType::Line)
                .data(&smoothed),
        );
    }

    let x_max = raw.len().saturating_sub(1) as f64;
    let y_max = y_upper(&raw);
    let (first, last) = series
        .date_span()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .unwrap_or_default();

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title(Span::styled("Date", theme::muted()))
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(vec![
                    Span::styled(first, theme::muted()),
                    Span::styled(last, theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Units", theme::muted()))
                .style(theme::muted())
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::styled("0", theme::muted()),
                    Span::styled(format!("{:.0}", y_max), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}
