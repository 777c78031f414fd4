//! Screen views, one per navigable screen.

mod plan;
mod realms;
mod settings;
mod store;
mod story;

pub use plan::PlanView;
pub use realms::RealmsView;
pub use settings::SettingsView;
pub use store::StoreView;
pub use story::StoryView;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::{Block, Borders};

use crate::theme::Theme;

/// Move a list cursor with j/k or the arrow keys. Returns true if the key
/// was a movement key.
pub(crate) fn move_cursor(cursor: &mut usize, len: usize, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if len > 0 {
                *cursor = (*cursor + 1).min(len - 1);
            }
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            *cursor = cursor.saturating_sub(1);
            true
        }
        _ => false,
    }
}

pub(crate) fn panel_block<'a>(theme: &Theme, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted())
        .title(format!(" {title} "))
        .title_style(theme.title())
}
