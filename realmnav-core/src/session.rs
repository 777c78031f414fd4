//! Application-root composition of the navigation core.
//!
//! Control flow per user action: navigator mutation → mount tracker →
//! back-control bridge → (host re-renders on its next frame).

use std::rc::Rc;

use tracing::info;

use crate::back_control::{resolve_back_control, BackControl, BackControlBridge};
use crate::mount::{Layer, MountTracker, MountedScreens};
use crate::navigation::{Navigator, SharedNavigator};

/// One client session: navigator, mount persistence and back-control bridge.
#[derive(Debug)]
pub struct NavigationSession {
    navigator: SharedNavigator,
    mounts: MountTracker,
    back: BackControlBridge,
}

impl NavigationSession {
    /// Start a fresh session at `Realms`.
    ///
    /// `platform` is probed once here; call this only after the platform
    /// finished its own initialization.
    pub fn start(platform: Option<Rc<dyn BackControl>>) -> Self {
        let navigator = Navigator::new().into_shared();
        let mounts = MountTracker::attach(&mut navigator.borrow_mut());
        let back = BackControlBridge::attach(&navigator, resolve_back_control(platform));
        info!(
            back_capabilities = ?back.control().capabilities(),
            "navigation session started"
        );
        Self {
            navigator,
            mounts,
            back,
        }
    }

    pub fn navigator(&self) -> &SharedNavigator {
        &self.navigator
    }

    pub fn mounted(&self) -> MountedScreens {
        self.mounts.mounted()
    }

    /// Render contract for the current screen.
    pub fn layers(&self) -> Vec<Layer> {
        let current = self.navigator.borrow().current_screen();
        self.mounts.layers(current)
    }

    pub fn back_control(&self) -> &Rc<dyn BackControl> {
        self.back.control()
    }

    /// Detach both subscribers; returns the final mounted set.
    pub fn shutdown(self) -> MountedScreens {
        let mut nav = self.navigator.borrow_mut();
        self.back.detach(&mut nav);
        let mounted = self.mounts.detach(&mut nav);
        info!(mounted = mounted.len(), "navigation session ended");
        mounted
    }
}
