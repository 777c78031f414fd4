//! Replay a navigation script against a fresh session and record the state
//! after every step.

use std::cell::Cell;
use std::fmt::Write as _;
use std::rc::Rc;

use serde::Serialize;
use tracing::debug;

use realmnav_core::{
    BackControl, Capabilities, ItemId, MountedScreens, NavCommand, NavigationSession, Screen,
};

/// Navigation state after one step. Step 0 is the fresh session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub step: usize,
    pub command: Option<String>,
    pub screen: Screen,
    pub history: Vec<Screen>,
    pub can_go_back: bool,
    pub selected_item: Option<ItemId>,
    pub mounted: MountedScreens,
    pub back_visible: bool,
}

/// Back control that only remembers whether it is shown.
#[derive(Debug, Default)]
struct VisibilityProbe {
    visible: Cell<bool>,
}

impl BackControl for VisibilityProbe {
    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    fn show(&self) -> Result<(), realmnav_core::PlatformError> {
        self.visible.set(true);
        Ok(())
    }

    fn hide(&self) -> Result<(), realmnav_core::PlatformError> {
        self.visible.set(false);
        Ok(())
    }
}

pub fn replay(commands: &[NavCommand]) -> Vec<Step> {
    let probe = Rc::new(VisibilityProbe::default());
    let platform: Rc<dyn BackControl> = probe.clone();
    let session = NavigationSession::start(Some(platform));

    let mut steps = Vec::with_capacity(commands.len() + 1);
    steps.push(snapshot(0, None, &session, &probe));
    for (i, command) in commands.iter().enumerate() {
        command.apply(&mut session.navigator().borrow_mut());
        debug!(step = i + 1, %command, "applied");
        steps.push(snapshot(i + 1, Some(command), &session, &probe));
    }
    session.shutdown();
    steps
}

fn snapshot(
    step: usize,
    command: Option<&NavCommand>,
    session: &NavigationSession,
    probe: &VisibilityProbe,
) -> Step {
    let nav = session.navigator().borrow();
    Step {
        step,
        command: command.map(ToString::to_string),
        screen: nav.current_screen(),
        history: nav.history().to_vec(),
        can_go_back: nav.can_go_back(),
        selected_item: nav.selected_item().cloned(),
        mounted: session.mounted(),
        back_visible: probe.visible.get(),
    }
}

/// One line per step.
pub fn render_text(steps: &[Step]) -> String {
    let mut out = String::new();
    for step in steps {
        let command = step.command.as_deref().unwrap_or("(start)");
        let history: Vec<&str> = step.history.iter().map(|s| s.id()).collect();
        let mounted: Vec<&str> = step.mounted.iter().map(|s| s.id()).collect();
        let _ = writeln!(
            out,
            "{:>3}  {:<22} screen={:<8} history=[{}] back={} selected={} mounted={{{}}}",
            step.step,
            command,
            step.screen.id(),
            history.join(", "),
            if step.back_visible { "shown" } else { "hidden" },
            step.selected_item
                .as_ref()
                .map(ItemId::as_str)
                .unwrap_or("-"),
            mounted.join(", "),
        );
    }
    out
}
