//! Keyboard input dispatch: halt screen → overlays → global keys → panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Panel};

/// Stock step for `[` / `]` and PageUp / PageDown.
const STOCK_BIG_STEP: i64 = 10;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Without a dataset the session is halted: quitting is all that is left.
    if app.dataset_missing() {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            app.running = false;
        }
        return;
    }

    // 2. Overlays consume input first.
    if app.overlay == Overlay::StockEntry {
        handle_stock_entry(app, key);
        return;
    }

    // 3. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c as usize - '1' as usize;
            if let Some(panel) = Panel::from_index(idx) {
                app.active_panel = panel;
                return;
            }
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 4. Panel-specific keys.
    match app.active_panel {
        Panel::Overview => handle_overview_key(app, key),
        Panel::Forecast => handle_forecast_key(app, key),
        Panel::Help => {} // display only
    }
}

fn handle_stock_entry(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_stock_entry(),
        KeyCode::Enter => app.commit_stock_entry(),
        KeyCode::Backspace => {
            app.stock_input.pop();
        }
        KeyCode::Char(c) => app.push_stock_digit(c),
        _ => {}
    }
}

fn handle_product_key(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.select_next_product(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev_product(),
        _ => return false,
    }
    if let Some(product) = app.selected_product() {
        let msg = format!("Product: {product}");
        app.set_status(msg);
    }
    true
}

fn handle_overview_key(app: &mut AppState, key: KeyEvent) {
    handle_product_key(app, key);
}

fn handle_forecast_key(app: &mut AppState, key: KeyEvent) {
    if handle_product_key(app, key) {
        return;
    }

    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.narrow_window(),
        KeyCode::Char('l') | KeyCode::Right => app.widen_window(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_stock(1),
        KeyCode::Char('-') => app.adjust_stock(-1),
        KeyCode::Char(']') | KeyCode::PageUp => app.adjust_stock(STOCK_BIG_STEP),
        KeyCode::Char('[') | KeyCode::PageDown => app.adjust_stock(-STOCK_BIG_STEP),
        KeyCode::Char('s') | KeyCode::Enter => app.open_stock_entry(),
        _ => return,
    }

    match app.analysis.as_ref().map(|a| a.forecast.is_defined()) {
        Some(false) => app.set_warning("Not enough history for this window. Reduce the window size."),
        Some(true) => app.status_message = None,
        None => {}
    }
}
