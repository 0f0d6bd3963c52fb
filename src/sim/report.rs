use crate::core::state::{ProcId, SimTime};
use average::{Estimate, Mean};
use std::fmt;

pub const REPORT_RULE: &str =
    "---------------------------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitEntry {
    pub pid: ProcId,
    pub wait: SimTime,
}

/// Per-process waiting times, reported in ascending id order once the
/// simulation drains.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitReport {
    entries: Vec<WaitEntry>,
}

impl WaitReport {
    pub fn new(mut entries: Vec<WaitEntry>) -> Self {
        entries.sort_by_key(|entry| entry.pid);
        Self { entries }
    }

    pub fn entries(&self) -> &[WaitEntry] {
        &self.entries
    }

    pub fn wait(&self, pid: ProcId) -> Option<SimTime> {
        self.entries
            .iter()
            .find(|entry| entry.pid == pid)
            .map(|entry| entry.wait)
    }

    pub fn mean_wait(&self) -> f64 {
        self.entries
            .iter()
            .map(|entry| entry.wait)
            .collect::<Mean>()
            .estimate()
    }
}

impl fmt::Display for WaitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_RULE}")?;
        writeln!(f, "Waiting Times:")?;
        for entry in &self.entries {
            writeln!(f, "Process {}: {:.6}", entry.pid, entry.wait)?;
        }
        Ok(())
    }
}
