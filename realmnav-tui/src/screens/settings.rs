//! Settings — plan, language and appearance.

use std::any::Any;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use realmnav_core::Screen;

use super::{move_cursor, panel_block};
use crate::app::UiAction;
use crate::catalog::PlanTier;
use crate::host::{ScreenView, ViewContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Plan,
    Language,
    Appearance,
}

const ROWS: [Row; 3] = [Row::Plan, Row::Language, Row::Appearance];

#[derive(Debug, Default)]
pub struct SettingsView {
    cursor: usize,
}

impl SettingsView {
    pub fn new() -> Self {
        Self::default()
    }

    fn activate(row: Row, ctx: &ViewContext) -> Option<UiAction> {
        match row {
            Row::Plan if ctx.profile.plan == PlanTier::Free => Some(UiAction::Open(Screen::Plan)),
            Row::Plan => None,
            Row::Language => Some(UiAction::CycleLanguage),
            Row::Appearance => Some(UiAction::ToggleColorScheme),
        }
    }
}

impl ScreenView for SettingsView {
    fn screen(&self) -> Screen {
        Screen::Settings
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        let theme = ctx.theme;
        let lines: Vec<Line> = ROWS
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let (label, value, hint) = match row {
                    Row::Plan => (
                        "Plan",
                        ctx.profile.plan.label(),
                        if ctx.profile.plan == PlanTier::Free {
                            "u: upgrade"
                        } else {
                            ""
                        },
                    ),
                    Row::Language => ("Language", ctx.prefs.language.label(), "l: change"),
                    Row::Appearance => ("Theme", ctx.prefs.color_scheme.label(), "t: toggle"),
                };
                let label_style = if i == self.cursor {
                    theme.selected()
                } else {
                    theme.base()
                };
                Line::from(vec![
                    Span::styled(format!(" {label:<10}"), label_style),
                    Span::styled(format!(" {value:<10}"), theme.accent()),
                    Span::styled(hint, theme.muted()),
                ])
            })
            .collect();

        let para = Paragraph::new(lines).block(panel_block(theme, "Settings"));
        f.render_widget(para, area);
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewContext) -> Option<UiAction> {
        if move_cursor(&mut self.cursor, ROWS.len(), &key) {
            return None;
        }
        match key.code {
            KeyCode::Char('u') => Self::activate(Row::Plan, ctx),
            KeyCode::Char('l') => Self::activate(Row::Language, ctx),
            KeyCode::Char('t') => Self::activate(Row::Appearance, ctx),
            KeyCode::Enter => ROWS.get(self.cursor).and_then(|&row| Self::activate(row, ctx)),
            _ => None,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
