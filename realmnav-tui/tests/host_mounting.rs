//! Keyboard-driven walks through the TUI, checking that views are built
//! once and kept, and that the back button follows history.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use realmnav_core::{Capabilities, ItemId, Screen};
use realmnav_tui::screens::StoryView;
use realmnav_tui::{input, ui, AppState};
use realmnav_tui::persistence::Preferences;

fn app() -> AppState {
    AppState::new(Preferences::default(), Capabilities::all())
}

fn keys(app: &mut AppState, codes: &[KeyCode]) {
    for &code in codes {
        input::handle_key(app, KeyEvent::from(code));
    }
}

fn story(app: &AppState) -> &StoryView {
    app.host
        .view(Screen::Story)
        .and_then(|v| v.as_any().downcast_ref::<StoryView>())
        .expect("story view is built")
}

#[test]
fn revisiting_screens_never_rebuilds_them() {
    let mut app = app();
    keys(
        &mut app,
        &[
            KeyCode::Char('2'), // settings
            KeyCode::Char('1'), // realms (root)
            KeyCode::Char('2'),
            KeyCode::Char('u'), // plan
            KeyCode::Esc,
            KeyCode::Esc,
            KeyCode::Char('+'), // store
            KeyCode::Esc,
        ],
    );
    assert_eq!(app.current_screen(), Screen::Realms);
    for screen in [Screen::Realms, Screen::Settings, Screen::Plan, Screen::Store] {
        assert_eq!(app.host.builds(screen), 1, "{screen} rebuilt");
    }
    assert_eq!(
        app.host.live_screens(),
        app.session.mounted().as_slice().to_vec()
    );
}

#[test]
fn story_reloads_only_for_a_new_realm() {
    let mut app = app();
    keys(&mut app, &[KeyCode::Enter]);
    assert_eq!(story(&app).loads(), 1);

    // Back to realms, same realm again.
    keys(&mut app, &[KeyCode::Esc, KeyCode::Enter]);
    assert_eq!(app.host.builds(Screen::Story), 1);
    assert_eq!(story(&app).loads(), 1);

    // A different realm reloads the kept view.
    keys(&mut app, &[KeyCode::Esc, KeyCode::Down, KeyCode::Enter]);
    assert_eq!(app.selected_item(), Some(ItemId::from("iron-sea")));
    assert_eq!(app.host.builds(Screen::Story), 1);
    assert_eq!(story(&app).loads(), 2);
    assert_eq!(story(&app).realm(), Some(&ItemId::from("iron-sea")));
}

#[test]
fn back_button_tracks_history_depth() {
    let mut app = app();
    assert!(!app.back_button.is_visible());

    keys(&mut app, &[KeyCode::Char('+')]);
    assert!(app.back_button.is_visible());

    keys(&mut app, &[KeyCode::Char('u')]);
    assert_eq!(app.history(), vec![Screen::Realms, Screen::Store, Screen::Plan]);

    keys(&mut app, &[KeyCode::Backspace, KeyCode::Backspace]);
    assert_eq!(app.current_screen(), Screen::Realms);
    assert!(!app.back_button.is_visible());

    // Nothing left to go back to.
    keys(&mut app, &[KeyCode::Esc]);
    assert_eq!(app.back_button.presses(), 2);
}

#[test]
fn upgrade_flow_lands_on_settings() {
    let mut app = app();
    keys(
        &mut app,
        &[KeyCode::Char('2'), KeyCode::Char('u'), KeyCode::Enter],
    );
    assert_eq!(app.current_screen(), Screen::Settings);
    assert_eq!(
        app.history(),
        vec![Screen::Realms, Screen::Settings, Screen::Plan, Screen::Settings]
    );
    assert_eq!(app.host.builds(Screen::Settings), 1);

    // Pro users are not offered the upgrade again.
    keys(&mut app, &[KeyCode::Char('u')]);
    assert_eq!(app.current_screen(), Screen::Settings);
}

#[test]
fn renders_every_screen_without_panicking() {
    let mut app = app();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let walk = [
        KeyCode::Enter,
        KeyCode::Esc,
        KeyCode::Char('2'),
        KeyCode::Char('t'),
        KeyCode::Char('u'),
        KeyCode::Char('+'),
    ];
    terminal.draw(|f| ui::draw(f, &app)).unwrap();
    for code in walk {
        keys(&mut app, &[code]);
        terminal.draw(|f| ui::draw(f, &app)).unwrap();
    }
    assert_eq!(app.current_screen(), Screen::Store);
}

#[test]
fn host_without_back_button_has_no_back_key() {
    let mut app = AppState::new(Preferences::default(), Capabilities::none());
    keys(&mut app, &[KeyCode::Char('2'), KeyCode::Esc]);
    assert_eq!(app.current_screen(), Screen::Settings);
    // Tabs still navigate.
    keys(&mut app, &[KeyCode::Char('1')]);
    assert_eq!(app.current_screen(), Screen::Realms);
}
