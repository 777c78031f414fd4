//! Realm Navigator Core — the navigation/history controller of the realm client.
//!
//! This crate holds the only part of the client with real invariants:
//! - Screen enumeration and the opaque selected-item identifier
//! - Navigation state machine (history stack, back semantics, selection)
//! - Mount persistence (screens kept alive once visited)
//! - Back-control bridge to an optional platform back button
//! - Session composition for the application root
//!
//! Everything here is single-threaded and synchronous: no I/O, no locking,
//! no async work. Subscribers are notified in full before the next mutation.

pub mod back_control;
pub mod logging;
pub mod mount;
pub mod navigation;
pub mod screen;
pub mod script;
pub mod session;

pub use back_control::{
    resolve_back_control, BackControl, BackControlBridge, Capabilities, Capability, ClickHandler,
    NoBackControl, PlatformError,
};
pub use mount::{Layer, MountTracker, MountedScreens, Visibility};
pub use navigation::{NavState, Navigator, SharedNavigator, SubscriptionId};
pub use screen::{ItemId, ParseScreenError, Screen};
pub use script::{parse_script, NavCommand, ScriptError, ScriptErrorKind};
pub use session::NavigationSession;
