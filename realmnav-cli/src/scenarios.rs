//! Built-in navigation scenarios used as a self-check.

use realmnav_core::Screen::{Plan, Realms, Settings, Store, Story};
use realmnav_core::{parse_script, ScriptError, Screen};

use crate::replay::{replay, Step};

pub struct Scenario {
    pub name: &'static str,
    pub script: &'static str,
    /// History after each step, starting with the fresh session.
    pub histories: &'static [&'static [Screen]],
    /// Selected item after the last step.
    pub selected: Option<&'static str>,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "fresh session starts at realms",
        script: "",
        histories: &[&[Realms]],
        selected: None,
    },
    Scenario {
        name: "select, open, back, home",
        script: "select solar-eden\nopen settings\nback\nopen realms",
        histories: &[
            &[Realms],
            &[Realms, Story],
            &[Realms, Story, Settings],
            &[Realms, Story],
            &[Realms],
        ],
        selected: Some("solar-eden"),
    },
    Scenario {
        name: "opening story twice pushes once",
        script: "open story\nopen story",
        histories: &[&[Realms], &[Realms, Story], &[Realms, Story]],
        selected: None,
    },
    Scenario {
        name: "second selection on story replaces the first",
        script: "select solar-eden\nselect iron-sea\nback",
        histories: &[&[Realms], &[Realms, Story], &[Realms, Story], &[Realms]],
        selected: Some("iron-sea"),
    },
    Scenario {
        name: "upgrade from store lands on settings",
        script: "open store\nopen plan\nopen settings\nback\nback",
        histories: &[
            &[Realms],
            &[Realms, Store],
            &[Realms, Store, Plan],
            &[Realms, Store, Plan, Settings],
            &[Realms, Store, Plan],
            &[Realms, Store],
        ],
        selected: None,
    },
    Scenario {
        name: "back at the root does nothing",
        script: "back\nback",
        histories: &[&[Realms], &[Realms], &[Realms]],
        selected: None,
    },
];

/// Outcome of one scenario.
#[derive(Debug)]
pub struct Outcome {
    pub name: &'static str,
    pub failures: Vec<String>,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

pub fn run(scenario: &Scenario) -> Result<Outcome, ScriptError> {
    let commands = parse_script(scenario.script)?;
    let steps = replay(&commands);
    Ok(Outcome {
        name: scenario.name,
        failures: check(scenario, &steps),
    })
}

fn check(scenario: &Scenario, steps: &[Step]) -> Vec<String> {
    let mut failures = Vec::new();
    if steps.len() != scenario.histories.len() {
        failures.push(format!(
            "expected {} steps, got {}",
            scenario.histories.len(),
            steps.len()
        ));
        return failures;
    }

    let mut visited: Vec<Screen> = Vec::new();
    for (step, expected) in steps.iter().zip(scenario.histories) {
        if step.history.as_slice() != *expected {
            failures.push(format!(
                "step {}: history {:?}, expected {:?}",
                step.step, step.history, expected
            ));
        }
        if step.history.last() != Some(&step.screen) {
            failures.push(format!("step {}: screen is not the top of history", step.step));
        }
        if step.can_go_back != (step.history.len() > 1) {
            failures.push(format!("step {}: can_go_back out of sync", step.step));
        }
        if step.back_visible != step.can_go_back {
            failures.push(format!("step {}: back control out of sync", step.step));
        }
        if !visited.contains(&step.screen) {
            visited.push(step.screen);
        }
        if step.mounted.len() != visited.len() || !visited.iter().all(|&s| step.mounted.contains(s)) {
            failures.push(format!(
                "step {}: mounted {:?}, visited {:?}",
                step.step,
                step.mounted.as_slice(),
                visited
            ));
        }
    }

    let selected = steps
        .last()
        .and_then(|s| s.selected_item.as_ref())
        .map(|id| id.as_str());
    if selected != scenario.selected {
        failures.push(format!(
            "selected {selected:?}, expected {:?}",
            scenario.selected
        ));
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_scenario_passes() {
        for scenario in SCENARIOS {
            let outcome = run(scenario).unwrap();
            assert!(outcome.passed(), "{}: {:?}", outcome.name, outcome.failures);
        }
    }

    #[test]
    fn wrong_expectation_is_reported() {
        let scenario = Scenario {
            name: "broken",
            script: "open settings",
            histories: &[&[Realms], &[Realms, Store]],
            selected: None,
        };
        let outcome = run(&scenario).unwrap();
        assert!(!outcome.passed());
        assert!(outcome.failures[0].starts_with("step 1: history"));
    }

    #[test]
    fn bad_script_is_an_error() {
        let scenario = Scenario {
            name: "typo",
            script: "opne settings",
            histories: &[],
            selected: None,
        };
        let err = run(&scenario).unwrap_err();
        assert_eq!(err.line, 1);
    }
}
