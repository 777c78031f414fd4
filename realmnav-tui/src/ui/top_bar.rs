//! Top bar — back button, screen title, wishes indicator.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::catalog::PlanTier;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let [left_area, right_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(16)]).areas(area);

    let mut left = Vec::with_capacity(3);
    if app.back_button.is_visible() {
        left.push(Span::styled(" ‹ Esc ", theme.accent_bold()));
    } else {
        left.push(Span::raw(" "));
    }
    left.push(Span::styled(app.current_screen().label(), theme.title()));
    f.render_widget(Paragraph::new(Line::from(left)), left_area);

    let balance = if app.profile.plan == PlanTier::Pro {
        "∞".to_string()
    } else {
        app.profile.wishes.to_string()
    };
    let right = Line::from(vec![
        Span::styled(format!("✦ {balance} "), theme.highlight()),
        Span::styled("+ ", theme.muted()),
    ]);
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), right_area);
}
