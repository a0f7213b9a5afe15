//! Report output model for scenario replays.

use anyhow::{bail, Result};
use glissade_slider::Notification;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Component, Path};

/// Report status for a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Slider state at the end of a replay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinalState {
    pub value: f64,
    pub immediate_value: f64,
    pub ratio: f64,
    pub classes: String,
}

/// Machine-readable result of a replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub elapsed_ms: u64,
    pub steps_run: usize,
    pub final_state: FinalState,
    pub notifications: Vec<Notification>,
}

impl ReplayReport {
    pub fn passed(
        steps_run: usize,
        elapsed_ms: u64,
        final_state: FinalState,
        notifications: Vec<Notification>,
    ) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            message: None,
            elapsed_ms,
            steps_run,
            final_state,
            notifications,
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        message: String,
        elapsed_ms: u64,
        final_state: FinalState,
        notifications: Vec<Notification>,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            message: Some(message),
            elapsed_ms,
            steps_run: failed_step_index + 1,
            final_state,
            notifications,
        }
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative and must not start with a separator");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_escaping_paths() {
        let report = ReplayReport::passed(0, 0, FinalState::default(), Vec::new());
        assert!(report.write_to_path(Path::new("/tmp/report.json")).is_err());
        assert!(report.write_to_path(Path::new("../report.json")).is_err());
    }

    #[test]
    fn serializes_notifications_with_kind_tag() {
        let report = ReplayReport::failed(
            "assert_value",
            2,
            "value: expected 1, got 2".to_string(),
            48,
            FinalState::default(),
            vec![Notification::Change { value: 2.0 }],
        );
        let mut out = Vec::new();
        report.write_to_writer(&mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["status"], "failed");
        assert_eq!(json["failed_step_index"], 2);
        assert_eq!(json["steps_run"], 3);
        assert_eq!(json["notifications"][0]["kind"], "change");
        assert_eq!(json["notifications"][0]["value"], 2.0);
    }
}
