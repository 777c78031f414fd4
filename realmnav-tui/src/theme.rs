//! Color themes for the realm navigator TUI.
//!
//! Two schemes, matching the host's light/dark setting:
//! - **Dark**: near-black surface, violet accent, amber wishes
//! - **Light**: off-white surface, deep violet accent, burnt-orange wishes

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
        }
    }
}

/// Palette used by every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    /// Focus, selection, active tab
    pub accent: Color,
    /// Wishes and prices
    pub highlight: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    /// Hints and inactive tabs
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(16, 14, 22),
            accent: Color::Rgb(167, 139, 250),
            highlight: Color::Rgb(250, 204, 21),
            positive: Color::Rgb(74, 222, 128),
            negative: Color::Rgb(248, 113, 113),
            warning: Color::Rgb(251, 146, 60),
            muted: Color::Rgb(113, 113, 130),
            text_primary: Color::White,
            text_secondary: Color::Rgb(180, 180, 190),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 247),
            accent: Color::Rgb(91, 33, 182),
            highlight: Color::Rgb(194, 65, 12),
            positive: Color::Rgb(21, 128, 61),
            negative: Color::Rgb(185, 28, 28),
            warning: Color::Rgb(180, 83, 9),
            muted: Color::Rgb(120, 120, 128),
            text_primary: Color::Black,
            text_secondary: Color::Rgb(70, 70, 80),
        }
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self::dark(),
            ColorScheme::Light => Self::light(),
        }
    }

    // ── Styles ─────────────────────────────────────────────────────────

    pub fn base(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.background)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn accent_bold(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn positive(&self) -> Style {
        Style::default().fg(self.positive)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn negative(&self) -> Style {
        Style::default().fg(self.negative)
    }

    /// Tab style in the bottom bar.
    pub fn tab(&self, active: bool) -> Style {
        if active {
            self.accent_bold()
        } else {
            self.muted()
        }
    }
}
