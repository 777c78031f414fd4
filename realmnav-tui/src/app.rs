//! Application state — single-owner, main-thread only.
//!
//! Owns the navigation session, the terminal back button and the screen
//! host. Views and key handlers never mutate navigation directly; they
//! produce a [`UiAction`] that [`AppState::apply`] turns into navigator
//! calls, after which the host is synced with the new mounted set.

use std::rc::Rc;

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use realmnav_core::{BackControl, Capabilities, ItemId, NavigationSession, Screen};

use crate::back_button::TerminalBackButton;
use crate::catalog::{Catalog, PlanTier, Profile};
use crate::host::{DefaultRegistry, ScreenHost, ScreenRegistry, ViewContext};
use crate::persistence::Preferences;
use crate::theme::Theme;

/// Something a view or global key asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Open(Screen),
    Select(ItemId),
    /// Leave the client to continue a story in chat.
    Exit { story: String },
    CycleLanguage,
    ToggleColorScheme,
    /// Subscribe to the plan with this id.
    Purchase(String),
    /// Add a wish pack with this id to the balance.
    BuyWishes(String),
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub at: NaiveDateTime,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub session: NavigationSession,
    pub back_button: TerminalBackButton,
    pub host: ScreenHost,
    pub running: bool,

    // Content
    pub catalog: Catalog,
    pub profile: Profile,

    // Appearance
    pub prefs: Preferences,
    pub theme: Theme,

    // Cross-cutting
    pub status: Option<StatusMessage>,
    /// Story the user left to continue in chat.
    pub exit_story: Option<String>,
}

impl AppState {
    /// Build the app and start the navigation session.
    ///
    /// Call only once the terminal is set up: the back button is probed here.
    pub fn new(prefs: Preferences, back_caps: Capabilities) -> Self {
        Self::with_registry(prefs, back_caps, Box::new(DefaultRegistry))
    }

    pub fn with_registry(
        prefs: Preferences,
        back_caps: Capabilities,
        registry: Box<dyn ScreenRegistry>,
    ) -> Self {
        let back_button = TerminalBackButton::new(back_caps);
        let platform: Rc<dyn BackControl> = Rc::new(back_button.clone());
        let session = NavigationSession::start(Some(platform));
        let theme = Theme::for_scheme(prefs.color_scheme);

        let mut app = Self {
            session,
            back_button,
            host: ScreenHost::new(registry),
            running: true,
            catalog: Catalog::sample(),
            profile: Profile::default(),
            prefs,
            theme,
            status: None,
            exit_story: None,
        };
        app.sync_host();
        app
    }

    pub fn current_screen(&self) -> Screen {
        self.session.navigator().borrow().current_screen()
    }

    pub fn selected_item(&self) -> Option<ItemId> {
        self.session.navigator().borrow().selected_item().cloned()
    }

    pub fn can_go_back(&self) -> bool {
        self.session.navigator().borrow().can_go_back()
    }

    pub fn history(&self) -> Vec<Screen> {
        self.session.navigator().borrow().history().to_vec()
    }

    pub fn view_context<'a>(&'a self, selected: Option<&'a ItemId>) -> ViewContext<'a> {
        ViewContext {
            catalog: &self.catalog,
            profile: &self.profile,
            prefs: &self.prefs,
            theme: &self.theme,
            selected,
        }
    }

    /// Build views for newly mounted screens and forward selection changes.
    pub fn sync_host(&mut self) {
        let layers = self.session.layers();
        let selected = self.selected_item();
        let ctx = ViewContext {
            catalog: &self.catalog,
            profile: &self.profile,
            prefs: &self.prefs,
            theme: &self.theme,
            selected: selected.as_ref(),
        };
        self.host.sync(&layers, &ctx);
    }

    /// Press the top-bar back button.
    pub fn press_back(&mut self) {
        if !self.back_button.press() {
            debug!(screen = %self.current_screen(), "back pressed with nothing to go back to");
        }
        self.sync_host();
    }

    pub fn apply(&mut self, action: UiAction) {
        debug!(?action, "ui action");
        match action {
            UiAction::Open(screen) => {
                self.session.navigator().borrow_mut().set_screen(screen);
            }
            UiAction::Select(id) => {
                self.session.navigator().borrow_mut().select_item(id);
            }
            UiAction::Exit { story } => {
                info!(%story, "leaving to continue story");
                self.exit_story = Some(story);
                self.running = false;
            }
            UiAction::CycleLanguage => {
                self.prefs.language = self.prefs.language.next();
                self.set_status(format!("Language: {}", self.prefs.language.label()));
            }
            UiAction::ToggleColorScheme => {
                self.prefs.color_scheme = self.prefs.color_scheme.toggled();
                self.theme = Theme::for_scheme(self.prefs.color_scheme);
                self.set_status(format!("Theme: {}", self.prefs.color_scheme.label()));
            }
            UiAction::Purchase(plan_id) => self.purchase(&plan_id),
            UiAction::BuyWishes(pack_id) => self.buy_wishes(&pack_id),
        }
        self.sync_host();
    }

    fn purchase(&mut self, plan_id: &str) {
        if self.profile.plan == PlanTier::Pro {
            self.set_warning("You are already on Pro");
            return;
        }
        let Some(offer) = self.catalog.plans.iter().find(|p| p.id == plan_id) else {
            warn!(plan_id, "unknown plan");
            self.set_error(format!("Unknown plan `{plan_id}`"));
            return;
        };
        let name = offer.name.clone();
        self.profile.plan = PlanTier::Pro;
        info!(plan_id, "plan upgraded");
        self.set_status(format!("Upgraded to {name}"));
        self.session
            .navigator()
            .borrow_mut()
            .set_screen(Screen::Settings);
    }

    fn buy_wishes(&mut self, pack_id: &str) {
        let Some(pack) = self.catalog.packs.iter().find(|p| p.id == pack_id) else {
            warn!(pack_id, "unknown wish pack");
            self.set_error(format!("Unknown pack `{pack_id}`"));
            return;
        };
        let added = pack.wishes;
        self.profile.wishes += added;
        info!(pack_id, balance = self.profile.wishes, "wishes added");
        self.set_status(format!("+{added} wishes"));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.push_status(msg.into(), StatusLevel::Info);
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.push_status(msg.into(), StatusLevel::Warning);
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.push_status(msg.into(), StatusLevel::Error);
    }

    fn push_status(&mut self, text: String, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text,
            level,
            at: chrono::Local::now().naive_local(),
        });
    }
}
