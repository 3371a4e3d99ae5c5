//! Top-level UI layout: one panel at a time with a status bar.

pub mod chart;
pub mod forecast_panel;
pub mod help_panel;
pub mod overlays;
pub mod overview_panel;
pub mod status_bar;
pub mod widgets;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use crate::app::{AppState, Overlay, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    if app.dataset_missing() {
        let area = f.area();
        overlays::render_dataset_missing(f, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_panel(f, main_area, app);
    status_bar::render(f, status_area, app);

    match app.overlay {
        Overlay::StockEntry => overlays::render_stock_entry(f, main_area, app),
        Overlay::None => {}
    }
}

/// Draw the active panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title());

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Overview => overview_panel::render(f, inner, app),
        Panel::Forecast => forecast_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use stocksense_core::Settings;

    fn render_to_string(app: &AppState) -> String {
        let backend = TestBackend::new(140, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn overview_shows_kpis() {
        let app = sample_app();
        let screen = render_to_string(&app);
        assert!(screen.contains("Overview [1]"));
        assert!(screen.contains("Laptop"));
        assert!(screen.contains("70 units"));
        assert!(screen.contains("10.0 units"));
    }

    #[test]
    fn forecast_shows_estimate_and_shortfall() {
        let mut app = sample_app();
        app.active_panel = Panel::Forecast;
        let screen = render_to_string(&app);
        assert!(screen.contains("Forecast [2]"));
        assert!(screen.contains("about 70 units of Laptop"));
        assert!(screen.contains("Order 20 more units"));
    }

    #[test]
    fn forecast_suppressed_for_short_history() {
        let mut app = sample_app();
        app.active_panel = Panel::Forecast;
        app.select_next_product();
        assert_eq!(app.selected_product(), Some("Mouse"));
        let screen = render_to_string(&app);
        assert!(screen.contains("reduce the window size"));
        assert!(!screen.contains("Order"));
    }

    #[test]
    fn stock_entry_overlay_drawn() {
        let mut app = sample_app();
        app.active_panel = Panel::Forecast;
        app.open_stock_entry();
        let screen = render_to_string(&app);
        assert!(screen.contains("Current stock"));
        assert!(screen.contains("Enter: apply"));
    }

    #[test]
    fn missing_dataset_halts_with_message() {
        let app = AppState::new(None, &Settings::default());
        let screen = render_to_string(&app);
        assert!(screen.contains("satis_verisi_2024.csv"));
        assert!(screen.contains("stocksense-cli generate"));
        assert!(!screen.contains("Overview [1]"));
    }
}
