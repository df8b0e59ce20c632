use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hygiene status for a loaded document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HygieneStatus {
    /// Every node had the expected shape.
    Ok,
    /// Malformed nodes were skipped; warnings should be inspected.
    Lossy,
}

/// Stable warning code emitted while loading a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HygieneWarning(String);

impl HygieneWarning {
    /// Creates a warning from a literal code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the warning code.
    pub fn code(&self) -> &str {
        &self.0
    }
}

/// Record of malformed nodes recovered (skipped) while loading a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HygieneReport {
    /// Overall hygiene status.
    pub status: HygieneStatus,
    /// Distinct warning codes, in first-seen order.
    pub warnings: Vec<HygieneWarning>,
    /// Occurrence count per warning code.
    pub metrics: BTreeMap<String, u64>,
}

impl HygieneReport {
    /// Creates a clean report.
    pub fn new() -> Self {
        Self {
            status: HygieneStatus::Ok,
            warnings: vec![],
            metrics: BTreeMap::new(),
        }
    }

    /// Records one occurrence of `code` and downgrades the status to lossy.
    pub fn record(&mut self, code: &str) {
        self.status = HygieneStatus::Lossy;
        if !self.warnings.iter().any(|w| w.code() == code) {
            self.warnings.push(HygieneWarning::new(code));
        }
        self.metrics
            .entry(code.to_string())
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }

    /// Number of recorded occurrences of `code`.
    pub fn count(&self, code: &str) -> u64 {
        self.metrics.get(code).copied().unwrap_or(0)
    }

    /// True when nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.status == HygieneStatus::Ok
    }
}

impl Default for HygieneReport {
    fn default() -> Self {
        Self::new()
    }
}
