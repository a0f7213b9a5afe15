//! Scenario runner that replays scripted interactions against a slider.

use crate::assert::{
    evaluate_class, evaluate_flag, evaluate_markers, evaluate_notified, evaluate_value,
    AssertionResult,
};
use crate::report::{FinalState, ReplayReport};
use crate::scenario::{Scenario, ScenarioStep};
use anyhow::{bail, Result};
use glissade_core::KeyCode;
use glissade_slider::{BarGeometry, Notification, Slider, SliderConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Clock settings for a replay.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Logical frame length; `wait` steps advance the slider in ticks of this size
    pub tick_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { tick_ms: 16 }
    }
}

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: ReplayReport },
    Failed { report: ReplayReport },
}

impl RunOutcome {
    pub fn report(&self) -> &ReplayReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON against a slider built from `config`.
pub fn run_scenario(input: &str, config: &SliderConfig, run_cfg: RunConfig) -> Result<RunOutcome> {
    let scenario = Scenario::from_json(input)?;
    run_loaded_scenario(&scenario, config, run_cfg)
}

/// Execute a pre-loaded scenario. A config embedded in the scenario wins over `config`.
pub fn run_loaded_scenario(
    scenario: &Scenario,
    config: &SliderConfig,
    run_cfg: RunConfig,
) -> Result<RunOutcome> {
    if run_cfg.tick_ms == 0 {
        bail!("replay tick_ms must be > 0");
    }

    let config = scenario.config.clone().unwrap_or_else(|| config.clone());
    let mut slider = Slider::new(config);
    let log: Rc<RefCell<Vec<Notification>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    slider.on_any(move |n| sink.borrow_mut().push(*n));

    let bar = BarGeometry::from(scenario.bar);
    let mut elapsed_ms: u64 = 0;

    for (step_index, step) in scenario.steps.iter().enumerate() {
        tracing::debug!(step_index, ?step, "replay step");

        let check = match step {
            ScenarioStep::Configure { config } => {
                slider.configure(config.clone());
                None
            }
            ScenarioStep::SetValue { value } => {
                slider.set_value(*value);
                None
            }
            ScenarioStep::SetSecondaryProgress { value } => {
                slider.set_secondary_progress(*value);
                None
            }
            ScenarioStep::Increment => {
                slider.increment();
                None
            }
            ScenarioStep::Decrement => {
                slider.decrement();
                None
            }
            ScenarioStep::Key { key } => {
                let code = KeyCode::from_name(key);
                if code == KeyCode::UNKNOWN {
                    bail!("step {step_index}: unknown key '{key}'");
                }
                let outcome = slider.key_down(code);
                if !outcome.handled {
                    tracing::info!(step_index, key = %key, "key not handled by slider");
                }
                None
            }
            ScenarioStep::Text { value } => {
                slider.set_from_text(value);
                None
            }
            ScenarioStep::KnobDown => {
                slider.press_knob();
                None
            }
            ScenarioStep::KnobUp => {
                slider.release_knob();
                None
            }
            ScenarioStep::DragStart => {
                slider.begin_drag(bar);
                None
            }
            ScenarioStep::DragMove { dx } => {
                slider.update_drag(*dx);
                None
            }
            ScenarioStep::DragEnd => {
                slider.end_drag();
                None
            }
            ScenarioStep::Drag { dx } => {
                slider.begin_drag(bar);
                slider.update_drag(*dx);
                slider.end_drag();
                None
            }
            ScenarioStep::BarDown { x, pointer } => {
                slider.press_bar(*x, bar, *pointer);
                None
            }
            ScenarioStep::BarUp => {
                slider.release_bar();
                None
            }
            ScenarioStep::Click { x } => {
                slider.click_at(*x, bar);
                None
            }
            ScenarioStep::Wait { ms } => {
                elapsed_ms = elapsed_ms.saturating_add(wait(&mut slider, *ms, run_cfg.tick_ms));
                None
            }
            ScenarioStep::Flush => {
                slider.flush();
                None
            }
            ScenarioStep::AssertValue { expected } => Some((
                "assert_value",
                evaluate_value("value", *expected, slider.value()),
            )),
            ScenarioStep::AssertImmediate { expected } => Some((
                "assert_immediate",
                evaluate_value("immediate_value", *expected, slider.immediate_value()),
            )),
            ScenarioStep::AssertState {
                dragging,
                transiting,
                expand,
            } => {
                let result = [
                    evaluate_flag("dragging", *dragging, slider.dragging()),
                    evaluate_flag("transiting", *transiting, slider.transiting()),
                    evaluate_flag("expand", *expand, slider.expand()),
                ]
                .into_iter()
                .find(|r| *r != AssertionResult::Passed)
                .unwrap_or(AssertionResult::Passed);
                Some(("assert_state", result))
            }
            ScenarioStep::AssertClass { class, present } => Some((
                "assert_class",
                evaluate_class(&slider, class, *present),
            )),
            ScenarioStep::AssertMarkers { expected } => Some((
                "assert_markers",
                evaluate_markers(*expected, slider.markers()),
            )),
            ScenarioStep::AssertNotified { kind, value } => Some((
                "assert_notified",
                evaluate_notified(&log.borrow(), *kind, *value),
            )),
        };

        if let Some((assertion, AssertionResult::Failed { code, message })) = check {
            tracing::debug!(step_index, code = %code, "assertion failed");
            let report = ReplayReport::failed(
                assertion,
                step_index,
                message,
                elapsed_ms,
                final_state(&slider),
                log.borrow().clone(),
            );
            return Ok(RunOutcome::Failed { report });
        }
    }

    let notifications = log.borrow().clone();
    Ok(RunOutcome::Passed {
        report: ReplayReport::passed(
            scenario.steps.len(),
            elapsed_ms,
            final_state(&slider),
            notifications,
        ),
    })
}

/// Advance the slider by `ms` in ticks of at most `tick_ms`. Returns the time advanced.
fn wait(slider: &mut Slider, ms: u64, tick_ms: u64) -> u64 {
    let mut remaining = ms;
    while remaining > 0 {
        let step = remaining.min(tick_ms);
        slider.advance(Duration::from_millis(step));
        remaining -= step;
    }
    ms
}

fn final_state(slider: &Slider) -> FinalState {
    FinalState {
        value: slider.value(),
        immediate_value: slider.immediate_value(),
        ratio: slider.ratio(),
        classes: slider.view().class_name(),
    }
}
