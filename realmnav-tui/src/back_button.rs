//! Terminal back button — the host's implementation of the platform back control.
//!
//! The button lives in the top bar. `Esc`/`Backspace` press it, which only
//! works while it is mounted and visible, like a real on-screen control.
//! Which calls it supports comes from config, so hosts without a back button
//! can be reproduced.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use realmnav_core::{BackControl, Capabilities, Capability, ClickHandler, PlatformError};

#[derive(Default)]
struct ButtonState {
    mounted: bool,
    visible: bool,
    handler: Option<ClickHandler>,
    presses: u32,
}

/// Cheap-to-clone handle; clones share one button.
#[derive(Clone)]
pub struct TerminalBackButton {
    caps: Capabilities,
    state: Rc<RefCell<ButtonState>>,
}

impl TerminalBackButton {
    pub fn new(caps: Capabilities) -> Self {
        Self {
            caps,
            state: Rc::new(RefCell::new(ButtonState::default())),
        }
    }

    /// Whether the top bar should draw the button.
    pub fn is_visible(&self) -> bool {
        let state = self.state.borrow();
        state.mounted && state.visible
    }

    /// Number of presses that reached a click handler.
    pub fn presses(&self) -> u32 {
        self.state.borrow().presses
    }

    /// Press the button. Returns true if a click handler ran.
    pub fn press(&self) -> bool {
        if !self.is_visible() {
            trace!("back button pressed while hidden");
            return false;
        }
        // The handler navigates, which calls back into show/hide on this
        // button, so it must run without the state borrowed.
        let taken = self.state.borrow_mut().handler.take();
        let Some(mut handler) = taken else {
            return false;
        };
        handler();
        let mut state = self.state.borrow_mut();
        state.presses += 1;
        if state.handler.is_none() {
            state.handler = Some(handler);
        }
        true
    }

    fn require_mounted(&self, capability: Capability) -> Result<(), PlatformError> {
        if self.state.borrow().mounted {
            Ok(())
        } else {
            Err(PlatformError::Rejected {
                capability,
                reason: "back button is not mounted".into(),
            })
        }
    }
}

impl Default for TerminalBackButton {
    fn default() -> Self {
        Self::new(Capabilities::all())
    }
}

impl fmt::Debug for TerminalBackButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("TerminalBackButton")
            .field("caps", &self.caps)
            .field("mounted", &state.mounted)
            .field("visible", &state.visible)
            .field("has_handler", &state.handler.is_some())
            .finish()
    }
}

impl BackControl for TerminalBackButton {
    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn mount(&self) -> Result<(), PlatformError> {
        self.state.borrow_mut().mounted = true;
        Ok(())
    }

    fn show(&self) -> Result<(), PlatformError> {
        self.require_mounted(Capability::Show)?;
        self.state.borrow_mut().visible = true;
        Ok(())
    }

    fn hide(&self) -> Result<(), PlatformError> {
        self.require_mounted(Capability::Hide)?;
        self.state.borrow_mut().visible = false;
        Ok(())
    }

    fn on_click(&self, handler: ClickHandler) -> Result<(), PlatformError> {
        self.state.borrow_mut().handler = Some(handler);
        Ok(())
    }
}
