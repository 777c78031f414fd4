//! Top-level UI layout — top bar, screen host, bottom bar, status line.

pub mod bottom_bar;
pub mod status_bar;
pub mod top_bar;

use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::AppState;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let current = app.current_screen();
    let bottom_height = if current.shows_bottom_bar() { 1 } else { 0 };

    let [top_area, main_area, bottom_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(bottom_height),
        Constraint::Length(1),
    ])
    .areas(f.area());

    f.render_widget(Block::default().style(app.theme.base()), f.area());

    top_bar::render(f, top_area, app);

    let selected = app.selected_item();
    let ctx = app.view_context(selected.as_ref());
    app.host
        .render(f, main_area, &app.session.layers(), &ctx);

    if current.shows_bottom_bar() {
        bottom_bar::render(f, bottom_area, app);
    }

    status_bar::render(f, status_area, app);
}
