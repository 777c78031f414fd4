//! Navigation scripts — a line-oriented record of user navigation.
//!
//! ```text
//! # pick a realm, peek at settings, come back
//! select solar-eden
//! open settings
//! back
//! ```
//!
//! Blank lines and `#` comments are ignored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::navigation::Navigator;
use crate::screen::{ItemId, ParseScreenError, Screen};

/// One navigation operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "arg", rename_all = "lowercase")]
pub enum NavCommand {
    /// `set_screen`
    Open(Screen),
    /// `select_item`
    Select(ItemId),
    /// `go_back`
    Back,
}

impl NavCommand {
    pub fn apply(&self, nav: &mut Navigator) {
        match self {
            NavCommand::Open(screen) => nav.set_screen(*screen),
            NavCommand::Select(id) => nav.select_item(id.clone()),
            NavCommand::Back => nav.go_back(),
        }
    }
}

impl fmt::Display for NavCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavCommand::Open(screen) => write!(f, "open {screen}"),
            NavCommand::Select(id) => write!(f, "select {id}"),
            NavCommand::Back => f.write_str("back"),
        }
    }
}

/// What was wrong with a script line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptErrorKind {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{0}` expects an argument")]
    MissingArgument(&'static str),

    #[error("`{0}` takes no argument")]
    UnexpectedArgument(&'static str),

    #[error(transparent)]
    Screen(#[from] ParseScreenError),
}

/// A script line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ScriptError {
    /// 1-based line number.
    pub line: usize,
    #[source]
    pub kind: ScriptErrorKind,
}

impl FromStr for NavCommand {
    type Err = ScriptErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let verb = parts.next().unwrap_or_default();
        let arg = parts.next();
        let extra = parts.next();

        match verb.to_ascii_lowercase().as_str() {
            "open" => match (arg, extra) {
                (None, _) => Err(ScriptErrorKind::MissingArgument("open")),
                (Some(_), Some(_)) => Err(ScriptErrorKind::UnexpectedArgument("open")),
                (Some(name), None) => Ok(NavCommand::Open(name.parse()?)),
            },
            "select" => match (arg, extra) {
                (None, _) => Err(ScriptErrorKind::MissingArgument("select")),
                (Some(_), Some(_)) => Err(ScriptErrorKind::UnexpectedArgument("select")),
                (Some(id), None) => Ok(NavCommand::Select(ItemId::from(id))),
            },
            "back" => match arg {
                None => Ok(NavCommand::Back),
                Some(_) => Err(ScriptErrorKind::UnexpectedArgument("back")),
            },
            _ => Err(ScriptErrorKind::UnknownCommand(verb.to_string())),
        }
    }
}

/// Parse a whole script, stopping at the first bad line.
pub fn parse_script(source: &str) -> Result<Vec<NavCommand>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let line = raw.split('#').next().unwrap_or_default().trim();
            (!line.is_empty()).then_some((i + 1, line))
        })
        .map(|(line, text)| text.parse::<NavCommand>().map_err(|kind| ScriptError { line, kind }))
        .collect()
}
