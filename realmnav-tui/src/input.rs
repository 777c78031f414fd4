//! Keyboard input dispatch — global keys → bars → visible screen view.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use realmnav_core::Screen;

use crate::app::{AppState, UiAction};
use crate::host::ViewContext;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        // The top-bar back button.
        KeyCode::Esc | KeyCode::Backspace => {
            app.press_back();
            return;
        }
        // Wishes indicator in the top bar.
        KeyCode::Char('+') => {
            app.apply(UiAction::Open(Screen::Store));
            return;
        }
        _ => {}
    }

    // 2. Bottom bar tabs, only while the bar is shown.
    let current = app.current_screen();
    if current.shows_bottom_bar() {
        let tab = match key.code {
            KeyCode::Char('1') => Some(Screen::Realms),
            KeyCode::Char('2') => Some(Screen::Settings),
            _ => None,
        };
        if let Some(screen) = tab {
            app.apply(UiAction::Open(screen));
            return;
        }
    }

    // 3. The visible view.
    let selected = app.selected_item();
    let action = {
        // The host is mutated while the context reads the rest.
        let AppState {
            host,
            catalog,
            profile,
            prefs,
            theme,
            ..
        } = &mut *app;
        let ctx = ViewContext {
            catalog,
            profile,
            prefs,
            theme,
            selected: selected.as_ref(),
        };
        host.handle_key(current, key, &ctx)
    };
    if let Some(action) = action {
        app.apply(action);
    }
}
