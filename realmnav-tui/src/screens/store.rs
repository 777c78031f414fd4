//! Store — wish packs, plus a banner leading to the upgrade plan.

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

/// Row 0 is the upgrade banner; packs follow.
#[derive(Debug, Default)]
pub struct StoreView {
    cursor: usize,
}

impl StoreView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScreenView for StoreView {
    fn screen(&self) -> Screen {
        Screen::Store
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        let theme = ctx.theme;
        let mut lines = Vec::with_capacity(ctx.catalog.packs.len() + 4);

        let banner = if ctx.profile.plan == PlanTier::Pro {
            " Unlimited energy: active "
        } else {
            " Get unlimited energy with Pro  (u) "
        };
        let banner_style = if self.cursor == 0 {
            theme.selected()
        } else {
            theme.accent_bold()
        };
        lines.push(Line::from(Span::styled(banner, banner_style)));
        lines.push(Line::default());

        for (i, pack) in ctx.catalog.packs.iter().enumerate() {
            let style = if self.cursor == i + 1 {
                theme.selected()
            } else {
                theme.base()
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" ✦ {:>5} wishes ", pack.wishes), style),
                Span::styled(format!(" {}", pack.price), theme.highlight()),
            ]));
        }

        let para = Paragraph::new(lines).block(panel_block(theme, "Store"));
        f.render_widget(para, area);
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewContext) -> Option<UiAction> {
        let upgrade = (ctx.profile.plan == PlanTier::Free).then_some(UiAction::Open(Screen::Plan));
        if move_cursor(&mut self.cursor, ctx.catalog.packs.len() + 1, &key) {
            return None;
        }
        match key.code {
            KeyCode::Char('u') => upgrade,
            KeyCode::Enter if self.cursor == 0 => upgrade,
            KeyCode::Enter => ctx
                .catalog
                .packs
                .get(self.cursor - 1)
                .map(|pack| UiAction::BuyWishes(pack.id.clone())),
            _ => None,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
