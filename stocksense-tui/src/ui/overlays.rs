//! Overlays: stock entry box and the missing-dataset screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use stocksense_core::config::DATASET_PATH;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// Numeric entry box for the current stock level.
pub fn render_stock_entry(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(50, 30, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Current stock ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Units on hand: ", theme::muted()),
            Span::styled(format!("{}_", app.stock_input), theme::value()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Enter: apply   Esc: cancel   Backspace: delete",
            theme::muted(),
        )),
    ];

    f.render_widget(Paragraph::new(text).block(block), popup);
}

/// Full-screen notice shown when the dataset file was not found.
pub fn render_dataset_missing(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 40, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(" Dataset missing ")
        .title_style(theme::negative());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Sales dataset '{DATASET_PATH}' not found."),
            theme::negative(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please run `stocksense-cli generate` first to create it.",
            theme::value(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press q to quit.", theme::muted())),
    ];

    let para = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}
