//! Shared primitive types used across the estimator.

use serde::{Deserialize, Serialize};

/// A stable, unique identifier for a persisted calculation.
pub type RecordId = String;

/// Which entry point produced a persisted calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    /// The canonical form-driven input.
    Form,
    /// The flat legacy calculation schema, mapped onto the canonical model.
    Legacy,
}

impl RecordSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordSource::Form => "form",
            RecordSource::Legacy => "legacy",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "form" => Some(RecordSource::Form),
            "legacy" => Some(RecordSource::Legacy),
            _ => None,
        }
    }
}
