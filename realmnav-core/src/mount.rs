//! Mount persistence — screens whose render subtree stays alive once visited.
//!
//! The mounted set grows in first-visit order and never shrinks, independent
//! of the history depth. There is no eviction: the screen set is closed and
//! has five members.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use tracing::debug;

use crate::navigation::{Navigator, SubscriptionId};
use crate::screen::Screen;

/// Whether a mounted screen is the one being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Shown and interactive.
    Visible,
    /// Kept in the tree, neither drawn nor given input.
    Hidden,
}

/// One entry of the render contract handed to the screen host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layer {
    pub screen: Screen,
    pub visibility: Visibility,
}

impl Layer {
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }
}

/// Ordered set of screens visited at least once this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MountedScreens {
    order: Vec<Screen>,
}

impl MountedScreens {
    /// Sessions start with the home screen mounted.
    pub fn new() -> Self {
        Self {
            order: vec![Screen::Realms],
        }
    }

    /// Mount `screen` if it is not mounted yet. Returns true if it was added.
    pub fn observe(&mut self, screen: Screen) -> bool {
        if self.order.contains(&screen) {
            return false;
        }
        self.order.push(screen);
        debug!(%screen, mounted = self.order.len(), "screen mounted");
        true
    }

    pub fn contains(&self, screen: Screen) -> bool {
        self.order.contains(&screen)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Screen> + '_ {
        self.order.iter().copied()
    }

    pub fn as_slice(&self) -> &[Screen] {
        &self.order
    }

    /// Render contract: every mounted screen, exactly one of them visible.
    ///
    /// `current` is expected to be mounted already; if it is not, it still
    /// gets a visible layer at the end so the host never shows nothing.
    pub fn layers(&self, current: Screen) -> Vec<Layer> {
        let mut layers: Vec<Layer> = self
            .order
            .iter()
            .map(|&screen| Layer {
                screen,
                visibility: if screen == current {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                },
            })
            .collect();
        if !self.contains(current) {
            layers.push(Layer {
                screen: current,
                visibility: Visibility::Visible,
            });
        }
        layers
    }
}

impl Default for MountedScreens {
    fn default() -> Self {
        Self::new()
    }
}

/// Subscription that keeps a [`MountedScreens`] in step with a navigator.
#[derive(Debug)]
pub struct MountTracker {
    mounted: Rc<RefCell<MountedScreens>>,
    subscription: SubscriptionId,
}

impl MountTracker {
    /// Subscribe to `nav`, mounting its current screen immediately.
    pub fn attach(nav: &mut Navigator) -> Self {
        let mounted = Rc::new(RefCell::new(MountedScreens::new()));
        mounted.borrow_mut().observe(nav.current_screen());

        let sink = Rc::clone(&mounted);
        let subscription = nav.subscribe(move |state| {
            sink.borrow_mut().observe(state.current_screen());
        });

        Self {
            mounted,
            subscription,
        }
    }

    /// Snapshot of the mounted set.
    pub fn mounted(&self) -> MountedScreens {
        self.mounted.borrow().clone()
    }

    pub fn is_mounted(&self, screen: Screen) -> bool {
        self.mounted.borrow().contains(screen)
    }

    pub fn layers(&self, current: Screen) -> Vec<Layer> {
        self.mounted.borrow().layers(current)
    }

    /// Stop tracking. The set keeps whatever it had accumulated.
    pub fn detach(self, nav: &mut Navigator) -> MountedScreens {
        nav.unsubscribe(self.subscription);
        let mounted = self.mounted.borrow().clone();
        mounted
    }
}
