//! Per-row outcomes of a sync run and the text summary printed at the end

use serde::Serialize;
use std::fmt;

/// A row that could not be updated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedRow {
    pub sku: String,
    pub reason: String,
}

/// Outcome of every input row: each SKU lands in exactly one list
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<FailedRow>,
}

impl SyncReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, sku: impl Into<String>) {
        self.succeeded.push(sku.into());
    }

    pub fn record_failure(&mut self, sku: impl Into<String>, reason: impl Into<String>) {
        self.failed.push(FailedRow {
            sku: sku.into(),
            reason: reason.into(),
        });
    }

    /// Number of rows accounted for
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SUMMARY:")?;
        if self.succeeded.is_empty() {
            writeln!(f, "Successfully updated SKUs: None")?;
        } else {
            writeln!(f, "Successfully updated SKUs: {}", self.succeeded.join(", "))?;
        }

        if self.has_failures() {
            writeln!(f, "Failed to update SKUs:")?;
            for row in &self.failed {
                writeln!(f, "SKU: {}, Reason: {}", row.sku, row.reason)?;
            }
        }
        Ok(())
    }
}
