//! Upgrade plan — subscription offers.
//!
//! Purchasing is instant here; the app switches the profile to Pro and
//! moves on to Settings.

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

#[derive(Debug, Default)]
pub struct PlanView {
    cursor: usize,
}

impl PlanView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScreenView for PlanView {
    fn screen(&self) -> Screen {
        Screen::Plan
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        let theme = ctx.theme;
        let mut lines = Vec::new();
        if ctx.profile.plan == PlanTier::Pro {
            lines.push(Line::from(Span::styled(
                "You are on Pro. Thank you!",
                theme.positive(),
            )));
            lines.push(Line::default());
        }
        for (i, offer) in ctx.catalog.plans.iter().enumerate() {
            let name_style = if i == self.cursor {
                theme.selected()
            } else {
                theme.accent_bold()
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", offer.name), name_style),
                Span::styled(format!("  {}", offer.price), theme.highlight()),
            ]));
            for perk in &offer.perks {
                lines.push(Line::from(Span::styled(
                    format!("   · {perk}"),
                    theme.secondary(),
                )));
            }
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Enter: subscribe", theme.muted())));

        let para = Paragraph::new(lines).block(panel_block(theme, Screen::Plan.label()));
        f.render_widget(para, area);
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewContext) -> Option<UiAction> {
        if move_cursor(&mut self.cursor, ctx.catalog.plans.len(), &key) {
            return None;
        }
        match key.code {
            KeyCode::Enter if ctx.profile.plan == PlanTier::Free => ctx
                .catalog
                .plans
                .get(self.cursor)
                .map(|offer| UiAction::Purchase(offer.id.clone())),
            _ => None,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::Fixture;

    #[test]
    fn enter_purchases_offer_under_cursor() {
        let fixture = Fixture::default();
        let mut view = PlanView::new();
        view.handle_key(KeyEvent::from(KeyCode::Down), &fixture.ctx());
        assert_eq!(
            view.handle_key(KeyEvent::from(KeyCode::Enter), &fixture.ctx()),
            Some(UiAction::Purchase("pro-year".into()))
        );
    }

    #[test]
    fn pro_user_cannot_purchase_again() {
        let fixture = Fixture::default().pro();
        let mut view = PlanView::new();
        assert_eq!(
            view.handle_key(KeyEvent::from(KeyCode::Enter), &fixture.ctx()),
            None
        );
    }
}
