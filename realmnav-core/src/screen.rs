//! Screen enumeration and the selected-item identifier.
//!
//! The set of screens is closed: adding one is a compile-time change, and the
//! mount persistence relies on the set staying this small.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level views the user can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Content collections (the home screen).
    Realms,
    /// Detail view of the selected realm.
    Story,
    Settings,
    /// Subscription upgrade.
    Plan,
    Store,
}

impl Screen {
    /// All screens in declaration order.
    pub const ALL: [Screen; 5] = [
        Screen::Realms,
        Screen::Story,
        Screen::Settings,
        Screen::Plan,
        Screen::Store,
    ];

    pub fn index(self) -> usize {
        match self {
            Screen::Realms => 0,
            Screen::Story => 1,
            Screen::Settings => 2,
            Screen::Plan => 3,
            Screen::Store => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Stable lowercase identifier, as used in scripts and serialized state.
    pub fn id(self) -> &'static str {
        match self {
            Screen::Realms => "realms",
            Screen::Story => "story",
            Screen::Settings => "settings",
            Screen::Plan => "plan",
            Screen::Store => "store",
        }
    }

    /// Title rendered by the top bar.
    pub fn label(self) -> &'static str {
        match self {
            Screen::Realms => "Realms",
            Screen::Story => "Story",
            Screen::Settings => "Settings",
            Screen::Plan => "Upgrade Plan",
            Screen::Store => "Store",
        }
    }

    /// The persistent bottom navigation bar is hidden on the detail screen.
    pub fn shows_bottom_bar(self) -> bool {
        self != Screen::Story
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown screen name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen `{0}` (expected one of: realms, story, settings, plan, store)")]
pub struct ParseScreenError(pub String);

impl FromStr for Screen {
    type Err = ParseScreenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Screen::ALL
            .into_iter()
            .find(|screen| screen.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseScreenError(wanted.to_string()))
    }
}

/// Opaque identifier of a content-collection item (a realm).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
