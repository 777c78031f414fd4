//! Realm Navigator TUI — terminal screen host for the navigation core.
//!
//! Provides:
//! - Five screen views (realms, story, settings, plan, store)
//! - A host that builds each view once and keeps it mounted for the session
//! - Top bar with title, back hint and wishes; bottom bar hidden on Story
//! - A terminal back button driven by the core's back-control bridge
//! - TOML config and JSON preferences

pub mod app;
pub mod back_button;
pub mod catalog;
pub mod config;
pub mod host;
pub mod input;
pub mod persistence;
pub mod screens;
pub mod theme;
pub mod ui;

#[cfg(test)]
mod test_helpers;

pub use app::{AppState, UiAction};
pub use back_button::TerminalBackButton;
pub use host::{ScreenHost, ScreenRegistry, ScreenView, ViewContext};
pub use theme::{ColorScheme, Theme};
