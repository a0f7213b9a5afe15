//! Assertion helpers for scenario checks.

use glissade_slider::{Notification, NotificationKind, Slider};

/// Tolerance for comparing slider values
const VALUE_EPSILON: f64 = 1e-9;

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

impl AssertionResult {
    fn failed(code: &str, message: String) -> Self {
        AssertionResult::Failed {
            code: code.to_string(),
            message,
        }
    }
}

fn values_match(expected: f64, actual: f64) -> bool {
    (expected - actual).abs() <= VALUE_EPSILON
}

pub fn evaluate_value(label: &str, expected: f64, actual: f64) -> AssertionResult {
    if values_match(expected, actual) {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "value_mismatch",
            format!("{label}: expected {expected}, got {actual}"),
        )
    }
}

pub fn evaluate_flag(name: &str, expected: Option<bool>, actual: bool) -> AssertionResult {
    match expected {
        Some(expected) if expected != actual => AssertionResult::failed(
            "state_mismatch",
            format!("{name}: expected {expected}, got {actual}"),
        ),
        _ => AssertionResult::Passed,
    }
}

pub fn evaluate_class(slider: &Slider, class: &str, present: bool) -> AssertionResult {
    let view = slider.view();
    if view.has_class(class) == present {
        return AssertionResult::Passed;
    }
    let verb = if present { "missing" } else { "unexpected" };
    AssertionResult::failed(
        "class_mismatch",
        format!("{verb} class '{class}' (classes: '{}')", view.class_name()),
    )
}

pub fn evaluate_markers(expected: usize, actual: usize) -> AssertionResult {
    if expected == actual {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "markers_mismatch",
            format!("markers: expected {expected}, got {actual}"),
        )
    }
}

pub fn evaluate_notified(
    log: &[Notification],
    kind: NotificationKind,
    value: Option<f64>,
) -> AssertionResult {
    let Some(last) = log.last() else {
        return AssertionResult::failed(
            "no_notification",
            format!("expected {kind:?}, but nothing was notified"),
        );
    };
    if last.kind() != kind {
        return AssertionResult::failed(
            "notification_mismatch",
            format!("expected {kind:?}, last notification was {last:?}"),
        );
    }
    match value {
        Some(expected) if !values_match(expected, last.value()) => AssertionResult::failed(
            "notification_mismatch",
            format!("{kind:?}: expected value {expected}, got {}", last.value()),
        ),
        _ => AssertionResult::Passed,
    }
}
