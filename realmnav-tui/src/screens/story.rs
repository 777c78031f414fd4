//! Story — stories of the selected realm.
//!
//! The view stays mounted after the first visit, so it reloads its list
//! whenever the selection changes rather than on every visit.

use std::any::Any;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::debug;

use realmnav_core::{ItemId, Screen};

use super::{move_cursor, panel_block};
use crate::app::UiAction;
use crate::catalog::Story;
use crate::host::{ScreenView, ViewContext};

#[derive(Debug, Default)]
pub struct StoryView {
    realm: Option<ItemId>,
    stories: Vec<Story>,
    cursor: usize,
    loads: u32,
}

impl StoryView {
    pub fn new(ctx: &ViewContext) -> Self {
        let mut view = Self::default();
        if let Some(item) = ctx.selected {
            view.load(item, ctx);
        }
        view
    }

    /// Realm whose stories are loaded.
    pub fn realm(&self) -> Option<&ItemId> {
        self.realm.as_ref()
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// How many times the story list was loaded.
    pub fn loads(&self) -> u32 {
        self.loads
    }

    fn load(&mut self, realm: &ItemId, ctx: &ViewContext) {
        self.stories = ctx.catalog.stories_for(realm);
        self.realm = Some(realm.clone());
        self.cursor = 0;
        self.loads += 1;
        debug!(%realm, stories = self.stories.len(), "stories loaded");
    }
}

impl ScreenView for StoryView {
    fn screen(&self) -> Screen {
        Screen::Story
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        let theme = ctx.theme;
        let title = self
            .realm
            .as_ref()
            .and_then(|id| ctx.catalog.realm(id))
            .map(|r| r.name.as_str())
            .unwrap_or("Story");

        let mut lines = Vec::new();
        if self.stories.is_empty() {
            lines.push(Line::from(Span::styled("No stories here yet.", theme.muted())));
        }
        for (i, story) in self.stories.iter().enumerate() {
            let style = if i == self.cursor {
                theme.selected()
            } else {
                theme.base()
            };
            lines.push(Line::from(Span::styled(format!(" {} ", story.title), style)));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Enter: continue in chat",
            theme.muted(),
        )));

        let para = Paragraph::new(lines).block(panel_block(theme, title));
        f.render_widget(para, area);
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ViewContext) -> Option<UiAction> {
        if move_cursor(&mut self.cursor, self.stories.len(), &key) {
            return None;
        }
        match key.code {
            KeyCode::Enter => self.stories.get(self.cursor).map(|s| UiAction::Exit {
                story: s.title.clone(),
            }),
            _ => None,
        }
    }

    fn on_selection(&mut self, item: &ItemId, ctx: &ViewContext) {
        if self.realm.as_ref() != Some(item) {
            self.load(item, ctx);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
