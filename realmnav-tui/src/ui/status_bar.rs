//! Bottom status line — last status message and key hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(" j/k:move Enter:open +:store q:quit", theme.muted()));

    if let Some(status) = &app.status {
        spans.push(Span::raw(" | "));
        let style = match status.level {
            StatusLevel::Info => theme.accent(),
            StatusLevel::Warning => theme.warning(),
            StatusLevel::Error => theme.negative(),
        };
        spans.push(Span::styled(status.at.format("%H:%M ").to_string(), theme.muted()));
        spans.push(Span::styled(status.text.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
