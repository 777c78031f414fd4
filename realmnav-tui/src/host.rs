//! Screen host — builds each view once and keeps it for the session.
//!
//! The navigation core decides which screens are mounted; the host turns
//! that into live view objects. A view is constructed the first time its
//! screen is mounted and then kept, hidden or not, so revisiting it never
//! repeats its (possibly expensive) setup. Only the visible view is drawn
//! and only it receives input.

use std::any::Any;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::debug;

use realmnav_core::{ItemId, Layer, Screen};

use crate::app::UiAction;
use crate::catalog::{Catalog, Profile};
use crate::persistence::Preferences;
use crate::screens::{PlanView, RealmsView, SettingsView, StoreView, StoryView};
use crate::theme::Theme;

/// Read-only data a view needs to draw itself or react to a key.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub profile: &'a Profile,
    pub prefs: &'a Preferences,
    pub theme: &'a Theme,
    pub selected: Option<&'a ItemId>,
}

/// One screen's render subtree.
pub trait ScreenView {
    fn screen(&self) -> Screen;

    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext);

    /// React to a key while visible. Views never navigate directly; they
    /// return an action for the app to apply.
    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewContext) -> Option<UiAction>;

    /// The selected item changed. Called on every mounted view, hidden or not.
    fn on_selection(&mut self, _item: &ItemId, _ctx: &ViewContext) {}

    fn as_any(&self) -> &dyn Any;
}

/// Maps a screen to a freshly built view.
pub trait ScreenRegistry {
    fn build(&self, screen: Screen, ctx: &ViewContext) -> Box<dyn ScreenView>;
}

/// The five built-in views.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRegistry;

impl ScreenRegistry for DefaultRegistry {
    fn build(&self, screen: Screen, ctx: &ViewContext) -> Box<dyn ScreenView> {
        match screen {
            Screen::Realms => Box::new(RealmsView::new()),
            Screen::Story => Box::new(StoryView::new(ctx)),
            Screen::Settings => Box::new(SettingsView::new()),
            Screen::Plan => Box::new(PlanView::new()),
            Screen::Store => Box::new(StoreView::new()),
        }
    }
}

pub struct ScreenHost {
    registry: Box<dyn ScreenRegistry>,
    /// Live views in mount order.
    views: Vec<Box<dyn ScreenView>>,
    builds: [u32; Screen::ALL.len()],
    last_selection: Option<ItemId>,
}

impl ScreenHost {
    pub fn new(registry: Box<dyn ScreenRegistry>) -> Self {
        Self {
            registry,
            views: Vec::new(),
            builds: [0; Screen::ALL.len()],
            last_selection: None,
        }
    }

    /// Bring the live views in line with the mounted layers.
    ///
    /// Existing views hear about a selection change first; views built in
    /// this pass read the current selection themselves.
    pub fn sync(&mut self, layers: &[Layer], ctx: &ViewContext) {
        if ctx.selected != self.last_selection.as_ref() {
            if let Some(item) = ctx.selected {
                for view in self.views.iter_mut() {
                    view.on_selection(item, ctx);
                }
            }
            self.last_selection = ctx.selected.cloned();
        }

        for layer in layers {
            if self.is_built(layer.screen) {
                continue;
            }
            let view = self.registry.build(layer.screen, ctx);
            self.builds[layer.screen.index()] += 1;
            debug!(screen = %layer.screen, live = self.views.len() + 1, "view built");
            self.views.push(view);
        }
    }

    pub fn is_built(&self, screen: Screen) -> bool {
        self.views.iter().any(|v| v.screen() == screen)
    }

    /// How many times a view was constructed for `screen`.
    pub fn builds(&self, screen: Screen) -> u32 {
        self.builds[screen.index()]
    }

    /// Screens with a live view, in mount order.
    pub fn live_screens(&self) -> Vec<Screen> {
        self.views.iter().map(|v| v.screen()).collect()
    }

    pub fn view(&self, screen: Screen) -> Option<&dyn ScreenView> {
        self.views
            .iter()
            .find(|v| v.screen() == screen)
            .map(|v| v.as_ref())
    }

    pub fn view_mut(&mut self, screen: Screen) -> Option<&mut Box<dyn ScreenView>> {
        self.views.iter_mut().find(|v| v.screen() == screen)
    }

    /// Draw the visible layer. Hidden layers stay alive but are not drawn.
    pub fn render(&self, f: &mut Frame, area: Rect, layers: &[Layer], ctx: &ViewContext) {
        for layer in layers.iter().filter(|l| l.is_visible()) {
            if let Some(view) = self.view(layer.screen) {
                view.render(f, area, ctx);
            }
        }
    }

    /// Route a key to the view of `current`.
    pub fn handle_key(
        &mut self,
        current: Screen,
        key: KeyEvent,
        ctx: &ViewContext,
    ) -> Option<UiAction> {
        self.view_mut(current)
            .and_then(|view| view.handle_key(key, ctx))
    }
}

impl Default for ScreenHost {
    fn default() -> Self {
        Self::new(Box::new(DefaultRegistry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::Fixture;
    use realmnav_core::{MountedScreens, Visibility};

    fn layers(screens: &[Screen], current: Screen) -> Vec<Layer> {
        let mut mounted = MountedScreens::new();
        for &s in screens {
            mounted.observe(s);
        }
        mounted.layers(current)
    }

    #[test]
    fn builds_each_mounted_view_once() {
        let fixture = Fixture::default();
        let mut host = ScreenHost::default();

        host.sync(&layers(&[Screen::Settings], Screen::Settings), &fixture.ctx());
        host.sync(&layers(&[Screen::Settings], Screen::Realms), &fixture.ctx());
        host.sync(
            &layers(&[Screen::Settings, Screen::Store], Screen::Store),
            &fixture.ctx(),
        );

        assert_eq!(
            host.live_screens(),
            vec![Screen::Realms, Screen::Settings, Screen::Store]
        );
        for screen in [Screen::Realms, Screen::Settings, Screen::Store] {
            assert_eq!(host.builds(screen), 1);
        }
        assert_eq!(host.builds(Screen::Plan), 0);
    }

    #[test]
    fn selection_change_reaches_hidden_story() {
        let mut fixture = Fixture::default().with_selection("solar-eden");
        let mut host = ScreenHost::default();
        host.sync(&layers(&[Screen::Story], Screen::Story), &fixture.ctx());

        fixture = fixture.with_selection("iron-sea");
        let hidden = layers(&[Screen::Story], Screen::Realms);
        assert_eq!(hidden[1].visibility, Visibility::Hidden);
        host.sync(&hidden, &fixture.ctx());

        let story = host
            .view(Screen::Story)
            .and_then(|v| v.as_any().downcast_ref::<StoryView>())
            .unwrap();
        assert_eq!(story.realm().map(ItemId::as_str), Some("iron-sea"));
        assert_eq!(story.loads(), 2);
    }

    #[test]
    fn fresh_story_loads_once() {
        let fixture = Fixture::default().with_selection("glass-woods");
        let mut host = ScreenHost::default();
        host.sync(&layers(&[Screen::Story], Screen::Story), &fixture.ctx());
        host.sync(&layers(&[Screen::Story], Screen::Story), &fixture.ctx());

        let story = host
            .view(Screen::Story)
            .and_then(|v| v.as_any().downcast_ref::<StoryView>())
            .unwrap();
        assert_eq!(story.loads(), 1);
    }
}
