//! Test helpers for building view contexts

use realmnav_core::ItemId;

use crate::catalog::{Catalog, PlanTier, Profile};
use crate::host::ViewContext;
use crate::persistence::Preferences;
use crate::theme::Theme;

/// Owns everything a `ViewContext` borrows.
#[derive(Debug, Default)]
pub struct Fixture {
    pub catalog: Catalog,
    pub profile: Profile,
    pub prefs: Preferences,
    pub theme: Theme,
    pub selected: Option<ItemId>,
}

impl Fixture {
    pub fn with_selection(mut self, id: &str) -> Self {
        self.selected = Some(ItemId::from(id));
        self
    }

    pub fn pro(mut self) -> Self {
        self.profile.plan = PlanTier::Pro;
        self
    }

    pub fn ctx(&self) -> ViewContext<'_> {
        ViewContext {
            catalog: &self.catalog,
            profile: &self.profile,
            prefs: &self.prefs,
            theme: &self.theme,
            selected: self.selected.as_ref(),
        }
    }
}
