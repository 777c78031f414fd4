//! Realms — the root screen. Lists realms; Enter picks one.

use std::any::Any;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use realmnav_core::Screen;

use super::{move_cursor, panel_block};
use crate::app::UiAction;
use crate::host::{ScreenView, ViewContext};

#[derive(Debug, Default)]
pub struct RealmsView {
    cursor: usize,
}

impl RealmsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl ScreenView for RealmsView {
    fn screen(&self) -> Screen {
        Screen::Realms
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        let theme = ctx.theme;
        let mut lines = Vec::with_capacity(ctx.catalog.realms.len() * 2);
        for (i, realm) in ctx.catalog.realms.iter().enumerate() {
            let is_cursor = i == self.cursor;
            let is_current = ctx.selected == Some(&realm.id);
            let marker = if is_current { "● " } else { "  " };
            let name_style = if is_cursor {
                theme.selected()
            } else {
                theme.accent_bold()
            };
            lines.push(Line::from(vec![
                Span::styled(marker, theme.highlight()),
                Span::styled(realm.name.as_str(), name_style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", realm.tagline),
                theme.secondary(),
            )));
        }
        let para = Paragraph::new(lines).block(panel_block(theme, "Realms"));
        f.render_widget(para, area);
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewContext) -> Option<UiAction> {
        if move_cursor(&mut self.cursor, ctx.catalog.realms.len(), &key) {
            return None;
        }
        match key.code {
            KeyCode::Enter => ctx
                .catalog
                .realms
                .get(self.cursor)
                .map(|realm| UiAction::Select(realm.id.clone())),
            _ => None,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
