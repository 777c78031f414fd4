//! Bottom tab bar — Realms and Settings.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use realmnav_core::Screen;

use crate::app::AppState;

const TABS: [(char, Screen); 2] = [('1', Screen::Realms), ('2', Screen::Settings)];

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let current = app.current_screen();
    let mut spans = Vec::with_capacity(TABS.len() * 2);
    for (key, screen) in TABS {
        spans.push(Span::styled(
            format!(" {key} {} ", screen.label()),
            app.theme.tab(current == screen),
        ));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
