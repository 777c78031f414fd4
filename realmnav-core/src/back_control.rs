//! Back-control bridge — keeps a platform back button in step with `can_go_back`.
//!
//! The platform control is optional and may support only part of the
//! `mount / show / hide / on_click` surface depending on the host version.
//! Its capabilities are probed once, when the control is resolved; after that
//! unsupported calls are plain no-ops. Any error the platform reports is
//! logged and dropped: the worst outcome is "no back button", never a crash.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::navigation::{Navigator, SharedNavigator, SubscriptionId};

/// Callback the platform invokes when its back button is pressed.
pub type ClickHandler = Box<dyn FnMut()>;

/// One call of the platform back-control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Mount,
    Show,
    Hide,
    OnClick,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Capability::Mount => "mount",
            Capability::Show => "show",
            Capability::Hide => "hide",
            Capability::OnClick => "on_click",
        })
    }
}

/// Which calls a platform back control supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub mount: bool,
    pub show: bool,
    pub hide: bool,
    pub on_click: bool,
}

impl Capabilities {
    pub const fn all() -> Self {
        Self {
            mount: true,
            show: true,
            hide: true,
            on_click: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            mount: false,
            show: false,
            hide: false,
            on_click: false,
        }
    }

    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Mount => self.mount,
            Capability::Show => self.show,
            Capability::Hide => self.hide,
            Capability::OnClick => self.on_click,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::none()
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

/// Errors a platform back control may report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("back control does not support `{0}`")]
    Unsupported(Capability),

    #[error("platform rejected `{capability}`: {reason}")]
    Rejected {
        capability: Capability,
        reason: String,
    },
}

/// Platform back-button surface.
///
/// Every call defaults to a successful no-op, so an implementation only
/// overrides what its host actually provides. Methods take `&self`: platform
/// controls are shared handles.
pub trait BackControl {
    /// Calls this control supports. Probed once by [`resolve_back_control`].
    fn capabilities(&self) -> Capabilities;

    fn mount(&self) -> Result<(), PlatformError> {
        Ok(())
    }

    fn show(&self) -> Result<(), PlatformError> {
        Ok(())
    }

    fn hide(&self) -> Result<(), PlatformError> {
        Ok(())
    }

    fn on_click(&self, _handler: ClickHandler) -> Result<(), PlatformError> {
        Ok(())
    }
}

/// Host without a back button.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBackControl;

impl BackControl for NoBackControl {
    fn capabilities(&self) -> Capabilities {
        Capabilities::none()
    }
}

/// Forwards only the calls the wrapped control advertised at startup.
struct Gated {
    inner: Rc<dyn BackControl>,
    caps: Capabilities,
}

impl BackControl for Gated {
    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn mount(&self) -> Result<(), PlatformError> {
        if self.caps.mount {
            self.inner.mount()
        } else {
            Ok(())
        }
    }

    fn show(&self) -> Result<(), PlatformError> {
        if self.caps.show {
            self.inner.show()
        } else {
            Ok(())
        }
    }

    fn hide(&self) -> Result<(), PlatformError> {
        if self.caps.hide {
            self.inner.hide()
        } else {
            Ok(())
        }
    }

    fn on_click(&self, handler: ClickHandler) -> Result<(), PlatformError> {
        if self.caps.on_click {
            self.inner.on_click(handler)
        } else {
            Ok(())
        }
    }
}

/// Pick the back control for this session, checking capabilities once.
///
/// No platform, or a platform with no capabilities, resolves to
/// [`NoBackControl`]. A partial surface is wrapped so unsupported calls are
/// never forwarded.
pub fn resolve_back_control(platform: Option<Rc<dyn BackControl>>) -> Rc<dyn BackControl> {
    let Some(platform) = platform else {
        debug!("no platform back control, back button disabled");
        return Rc::new(NoBackControl);
    };

    let caps = platform.capabilities();
    if caps.is_empty() {
        debug!("platform back control has no capabilities, back button disabled");
        Rc::new(NoBackControl)
    } else if caps == Capabilities::all() {
        debug!("platform back control fully supported");
        platform
    } else {
        debug!(?caps, "platform back control partially supported");
        Rc::new(Gated {
            inner: platform,
            caps,
        })
    }
}

/// Subscription driving a back control from navigation state.
pub struct BackControlBridge {
    control: Rc<dyn BackControl>,
    subscription: SubscriptionId,
}

impl BackControlBridge {
    /// Mount the control, register the click handler and start following
    /// `can_go_back`.
    ///
    /// Must run after the platform finished its own initialization, and while
    /// no borrow of `nav` is held.
    pub fn attach(nav: &SharedNavigator, control: Rc<dyn BackControl>) -> Self {
        tolerate(Capability::Mount, control.mount());

        let target = Rc::downgrade(nav);
        let on_click: ClickHandler = Box::new(move || {
            let Some(nav) = target.upgrade() else {
                trace!("back click after session end");
                return;
            };
            match nav.try_borrow_mut() {
                Ok(mut nav) => nav.go_back(),
                Err(_) => warn!("back click while navigator is busy, dropped"),
            };
        });
        tolerate(Capability::OnClick, control.on_click(on_click));

        let mut nav = nav.borrow_mut();
        let mut shown = nav.can_go_back();
        apply_visibility(control.as_ref(), shown);

        let sink = Rc::clone(&control);
        let subscription = nav.subscribe(move |state| {
            let wanted = state.can_go_back();
            if wanted != shown {
                shown = wanted;
                apply_visibility(sink.as_ref(), wanted);
            }
        });

        Self {
            control,
            subscription,
        }
    }

    pub fn control(&self) -> &Rc<dyn BackControl> {
        &self.control
    }

    /// Stop following navigation and hide the control.
    pub fn detach(self, nav: &mut Navigator) {
        nav.unsubscribe(self.subscription);
        tolerate(Capability::Hide, self.control.hide());
    }
}

impl fmt::Debug for BackControlBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackControlBridge")
            .field("capabilities", &self.control.capabilities())
            .field("subscription", &self.subscription)
            .finish()
    }
}

fn apply_visibility(control: &dyn BackControl, visible: bool) {
    if visible {
        tolerate(Capability::Show, control.show());
    } else {
        tolerate(Capability::Hide, control.hide());
    }
}

fn tolerate(capability: Capability, result: Result<(), PlatformError>) {
    if let Err(err) = result {
        debug!(%capability, %err, "back control call ignored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Screen;
    use std::cell::RefCell;

    /// Records every call and keeps the registered click handler.
    #[derive(Default)]
    struct Recorder {
        caps: Option<Capabilities>,
        calls: RefCell<Vec<&'static str>>,
        handler: RefCell<Option<ClickHandler>>,
        fail: bool,
    }

    impl Recorder {
        fn with_caps(caps: Capabilities) -> Self {
            Self {
                caps: Some(caps),
                ..Default::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn record(&self, call: &'static str, cap: Capability) -> Result<(), PlatformError> {
            self.calls.borrow_mut().push(call);
            if self.fail {
                Err(PlatformError::Rejected {
                    capability: cap,
                    reason: "host says no".into(),
                })
            } else {
                Ok(())
            }
        }

        fn click(&self) {
            let taken = self.handler.borrow_mut().take();
            if let Some(mut handler) = taken {
                handler();
                *self.handler.borrow_mut() = Some(handler);
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }
    }

    impl BackControl for Recorder {
        fn capabilities(&self) -> Capabilities {
            self.caps.unwrap_or_default()
        }

        fn mount(&self) -> Result<(), PlatformError> {
            self.record("mount", Capability::Mount)
        }

        fn show(&self) -> Result<(), PlatformError> {
            self.record("show", Capability::Show)
        }

        fn hide(&self) -> Result<(), PlatformError> {
            self.record("hide", Capability::Hide)
        }

        fn on_click(&self, handler: ClickHandler) -> Result<(), PlatformError> {
            *self.handler.borrow_mut() = Some(handler);
            self.record("on_click", Capability::OnClick)
        }
    }

    fn attach(recorder: &Rc<Recorder>) -> (SharedNavigator, BackControlBridge) {
        let nav = Navigator::new().into_shared();
        let platform: Rc<dyn BackControl> = recorder.clone();
        let bridge = BackControlBridge::attach(&nav, resolve_back_control(Some(platform)));
        (nav, bridge)
    }

    #[test]
    fn attach_mounts_registers_and_hides() {
        let recorder = Rc::new(Recorder::default());
        let (_nav, _bridge) = attach(&recorder);
        assert_eq!(recorder.calls(), vec!["mount", "on_click", "hide"]);
    }

    #[test]
    fn visibility_follows_can_go_back_changes_only() {
        let recorder = Rc::new(Recorder::default());
        let (nav, _bridge) = attach(&recorder);

        nav.borrow_mut().set_screen(Screen::Settings);
        nav.borrow_mut().set_screen(Screen::Plan);
        nav.borrow_mut().go_back();
        nav.borrow_mut().set_screen(Screen::Realms);

        assert_eq!(
            recorder.calls(),
            vec!["mount", "on_click", "hide", "show", "hide"]
        );
    }

    #[test]
    fn click_goes_back() {
        let recorder = Rc::new(Recorder::default());
        let (nav, _bridge) = attach(&recorder);
        nav.borrow_mut().select_item("solar-eden");
        nav.borrow_mut().set_screen(Screen::Settings);

        recorder.click();
        assert_eq!(nav.borrow().current_screen(), Screen::Story);
        recorder.click();
        assert_eq!(nav.borrow().current_screen(), Screen::Realms);
        assert_eq!(recorder.calls().last(), Some(&"hide"));
    }

    #[test]
    fn click_while_navigator_borrowed_is_dropped() {
        let recorder = Rc::new(Recorder::default());
        let (nav, _bridge) = attach(&recorder);
        nav.borrow_mut().set_screen(Screen::Store);

        let guard = nav.borrow();
        recorder.click();
        drop(guard);

        assert_eq!(nav.borrow().current_screen(), Screen::Store);
    }

    #[test]
    fn click_after_session_end_is_harmless() {
        let recorder = Rc::new(Recorder::default());
        let (nav, bridge) = attach(&recorder);
        drop(bridge);
        drop(nav);
        recorder.click();
    }

    #[test]
    fn missing_platform_resolves_to_noop() {
        let control = resolve_back_control(None);
        assert!(control.capabilities().is_empty());
    }

    #[test]
    fn empty_capabilities_resolve_to_noop() {
        let recorder = Rc::new(Recorder::with_caps(Capabilities::none()));
        let (nav, _bridge) = attach(&recorder);
        nav.borrow_mut().set_screen(Screen::Settings);
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn partial_capabilities_gate_calls() {
        let caps = Capabilities {
            show: true,
            ..Capabilities::none()
        };
        let recorder = Rc::new(Recorder::with_caps(caps));
        let (nav, _bridge) = attach(&recorder);
        nav.borrow_mut().set_screen(Screen::Settings);
        nav.borrow_mut().go_back();

        assert_eq!(recorder.calls(), vec!["show"]);
        assert!(recorder.handler.borrow().is_none());
    }

    #[test]
    fn platform_errors_are_tolerated() {
        let recorder = Rc::new(Recorder::failing());
        let (nav, _bridge) = attach(&recorder);

        nav.borrow_mut().set_screen(Screen::Plan);
        recorder.click();

        assert_eq!(nav.borrow().current_screen(), Screen::Realms);
        assert_eq!(
            recorder.calls(),
            vec!["mount", "on_click", "hide", "show", "hide"]
        );
    }

    #[test]
    fn detach_hides_and_unsubscribes() {
        let recorder = Rc::new(Recorder::default());
        let (nav, bridge) = attach(&recorder);
        nav.borrow_mut().set_screen(Screen::Settings);

        bridge.detach(&mut nav.borrow_mut());
        nav.borrow_mut().set_screen(Screen::Store);

        assert_eq!(
            recorder.calls(),
            vec!["mount", "on_click", "hide", "show", "hide"]
        );
        assert_eq!(nav.borrow().subscriber_count(), 0);
    }
}
