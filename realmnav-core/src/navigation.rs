//! Navigation state machine — current screen, back history, selected item.
//!
//! The history stack is never empty and its last element is always the
//! current screen. Navigating to `Realms` collapses the stack to `[Realms]`;
//! navigating to the screen that is already current does nothing.
//!
//! Mutations go through three operations only (`set_screen`, `select_item`,
//! `go_back`). After each one that changed the state, every subscriber is
//! called synchronously, in subscription order, with the new state.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::screen::{ItemId, Screen};

/// Navigator shared by the application root and the adapters that call back
/// into it (the back-control click handler).
pub type SharedNavigator = Rc<RefCell<Navigator>>;

type Listener = Box<dyn FnMut(&NavState)>;

/// Read-only view of "where is the user".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavState {
    history: Vec<Screen>,
    selected_item: Option<ItemId>,
}

impl NavState {
    /// Fresh session: `[Realms]`, nothing selected.
    pub fn new() -> Self {
        Self {
            history: vec![Screen::Realms],
            selected_item: None,
        }
    }

    pub fn current_screen(&self) -> Screen {
        // The stack is never empty; `Realms` is only a fallback for the type checker.
        self.history.last().copied().unwrap_or(Screen::Realms)
    }

    pub fn history(&self) -> &[Screen] {
        &self.history
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    pub fn selected_item(&self) -> Option<&ItemId> {
        self.selected_item.as_ref()
    }

    // ── Transitions (crate-private) ────────────────────────────────────

    /// Returns true if the stack changed.
    fn navigate(&mut self, target: Screen) -> bool {
        if target == Screen::Realms {
            if self.history.as_slice() == [Screen::Realms] {
                return false;
            }
            self.history.clear();
            self.history.push(Screen::Realms);
            true
        } else if target != self.current_screen() {
            self.history.push(target);
            true
        } else {
            false
        }
    }

    /// Returns true if the selection changed.
    fn select(&mut self, id: ItemId) -> bool {
        if self.selected_item.as_ref() == Some(&id) {
            return false;
        }
        self.selected_item = Some(id);
        true
    }

    /// Returns true if a screen was popped.
    fn pop(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by [`Navigator::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

/// Owner of the navigation state and its subscriber list.
///
/// One instance per client session, created by the application root. No
/// other code writes the history or the current screen.
pub struct Navigator {
    state: NavState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            state: NavState::new(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Wrap in `Rc<RefCell<_>>` for the single-threaded application root.
    pub fn into_shared(self) -> SharedNavigator {
        Rc::new(RefCell::new(self))
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn current_screen(&self) -> Screen {
        self.state.current_screen()
    }

    pub fn history(&self) -> &[Screen] {
        self.state.history()
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    pub fn selected_item(&self) -> Option<&ItemId> {
        self.state.selected_item()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    // ── Operations ─────────────────────────────────────────────────────

    /// Navigate to `target`.
    ///
    /// `Realms` resets the history to `[Realms]`; the current screen is a
    /// no-op; anything else is pushed.
    pub fn set_screen(&mut self, target: Screen) {
        let from = self.state.current_screen();
        if self.state.navigate(target) {
            debug!(%from, to = %target, depth = self.state.depth(), "navigate");
            self.notify();
        } else {
            trace!(%target, "navigate: already current");
        }
    }

    /// Record the selected item and open the detail screen.
    ///
    /// Screen identity is compared without the selection: picking a second
    /// item while already on `Story` does not push another history entry.
    pub fn select_item(&mut self, id: impl Into<ItemId>) {
        let id = id.into();
        let from = self.state.current_screen();
        let selection_changed = self.state.select(id);
        let moved = self.state.navigate(Screen::Story);
        if selection_changed || moved {
            debug!(
                %from,
                item = ?self.state.selected_item().map(ItemId::as_str),
                depth = self.state.depth(),
                "select item"
            );
            self.notify();
        } else {
            trace!("select item: unchanged");
        }
    }

    /// Pop the current screen if there is somewhere to go back to.
    pub fn go_back(&mut self) {
        let from = self.state.current_screen();
        if self.state.pop() {
            debug!(
                %from,
                to = %self.state.current_screen(),
                depth = self.state.depth(),
                "go back"
            );
            self.notify();
        } else {
            trace!("go back: at root");
        }
    }

    // ── Subscriptions ──────────────────────────────────────────────────

    /// Register a listener called after every state change.
    ///
    /// Listeners must not call back into this navigator.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&NavState) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        trace!(%id, "subscribed");
        id
    }

    /// Remove a listener. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        let removed = self.listeners.len() != before;
        trace!(%id, removed, "unsubscribed");
        removed
    }

    fn notify(&mut self) {
        let state = &self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(state);
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("state", &self.state)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_starts_at_realms() {
        let nav = Navigator::new();
        assert_eq!(nav.current_screen(), Screen::Realms);
        assert_eq!(nav.history(), &[Screen::Realms]);
        assert!(!nav.can_go_back());
        assert!(nav.selected_item().is_none());
    }

    #[test]
    fn set_screen_pushes_new_screens() {
        let mut nav = Navigator::new();
        nav.set_screen(Screen::Settings);
        nav.set_screen(Screen::Plan);
        assert_eq!(nav.history(), &[Screen::Realms, Screen::Settings, Screen::Plan]);
        assert_eq!(nav.current_screen(), Screen::Plan);
        assert!(nav.can_go_back());
    }

    #[test]
    fn set_screen_to_current_is_noop() {
        let mut nav = Navigator::new();
        nav.set_screen(Screen::Store);
        let before = nav.state().clone();
        nav.set_screen(Screen::Store);
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn realms_collapses_history() {
        let mut nav = Navigator::new();
        nav.set_screen(Screen::Settings);
        nav.set_screen(Screen::Plan);
        nav.set_screen(Screen::Store);
        nav.set_screen(Screen::Realms);
        assert_eq!(nav.history(), &[Screen::Realms]);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn screens_may_repeat_non_adjacently() {
        let mut nav = Navigator::new();
        nav.set_screen(Screen::Settings);
        nav.set_screen(Screen::Plan);
        nav.set_screen(Screen::Settings);
        assert_eq!(
            nav.history(),
            &[Screen::Realms, Screen::Settings, Screen::Plan, Screen::Settings]
        );
    }

    #[test]
    fn go_back_at_root_is_noop() {
        let mut nav = Navigator::new();
        nav.go_back();
        assert_eq!(nav.history(), &[Screen::Realms]);
    }

    #[test]
    fn select_item_opens_story() {
        let mut nav = Navigator::new();
        nav.select_item("solar-eden");
        assert_eq!(nav.selected_item().map(ItemId::as_str), Some("solar-eden"));
        assert_eq!(nav.current_screen(), Screen::Story);
        assert_eq!(nav.history(), &[Screen::Realms, Screen::Story]);
    }

    #[test]
    fn selection_survives_navigation_and_back() {
        let mut nav = Navigator::new();
        nav.select_item("solar-eden");
        nav.set_screen(Screen::Realms);
        nav.go_back();
        assert_eq!(nav.selected_item().map(ItemId::as_str), Some("solar-eden"));
    }

    #[test]
    fn second_selection_on_story_does_not_push() {
        let mut nav = Navigator::new();
        nav.select_item("solar-eden");
        nav.select_item("iron-sea");
        assert_eq!(nav.history(), &[Screen::Realms, Screen::Story]);
        assert_eq!(nav.selected_item().map(ItemId::as_str), Some("iron-sea"));

        // Back skips past the first item's detail view entirely.
        nav.go_back();
        assert_eq!(nav.current_screen(), Screen::Realms);
    }

    #[test]
    fn subscribers_see_every_change_in_order() {
        let mut nav = Navigator::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let order = Rc::new(RefCell::new(Vec::new()));

        let seen_a = Rc::clone(&seen);
        let order_a = Rc::clone(&order);
        nav.subscribe(move |state| {
            seen_a.borrow_mut().push(state.current_screen());
            order_a.borrow_mut().push('a');
        });
        let order_b = Rc::clone(&order);
        nav.subscribe(move |_| order_b.borrow_mut().push('b'));

        nav.set_screen(Screen::Settings);
        nav.go_back();

        assert_eq!(*seen.borrow(), vec![Screen::Settings, Screen::Realms]);
        assert_eq!(*order.borrow(), vec!['a', 'b', 'a', 'b']);
    }

    #[test]
    fn noops_do_not_notify() {
        let mut nav = Navigator::new();
        let calls = Rc::new(RefCell::new(0));
        let c = Rc::clone(&calls);
        nav.subscribe(move |_| *c.borrow_mut() += 1);

        nav.set_screen(Screen::Realms);
        nav.go_back();
        nav.set_screen(Screen::Plan);
        nav.set_screen(Screen::Plan);

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn reselecting_same_item_on_story_does_not_notify() {
        let mut nav = Navigator::new();
        nav.select_item("solar-eden");
        let calls = Rc::new(RefCell::new(0));
        let c = Rc::clone(&calls);
        nav.subscribe(move |_| *c.borrow_mut() += 1);

        nav.select_item("solar-eden");
        assert_eq!(*calls.borrow(), 0);

        nav.select_item("iron-sea");
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut nav = Navigator::new();
        let calls = Rc::new(RefCell::new(0));
        let c = Rc::clone(&calls);
        let id = nav.subscribe(move |_| *c.borrow_mut() += 1);

        nav.set_screen(Screen::Store);
        assert!(nav.unsubscribe(id));
        assert!(!nav.unsubscribe(id));
        nav.set_screen(Screen::Plan);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(nav.subscriber_count(), 0);
    }
}
