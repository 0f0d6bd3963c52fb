use crate::core::state::{ProcId, SimTime, WorkerId};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Started,
    Resumed,
    Paused,
    Finished,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Lifecycle::Started => "Started",
            Lifecycle::Resumed => "Resumed",
            Lifecycle::Paused => "Paused",
            Lifecycle::Finished => "Finished",
        };
        f.write_str(name)
    }
}

/// One trace line: a process changed lifecycle state at simulated time `at`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchedEvent {
    pub worker: WorkerId,
    pub at: SimTime,
    pub pid: ProcId,
    pub kind: Lifecycle,
}

impl SchedEvent {
    pub fn new(worker: WorkerId, at: SimTime, pid: ProcId, kind: Lifecycle) -> Self {
        Self {
            worker,
            at,
            pid,
            kind,
        }
    }
}

impl fmt::Display for SchedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Thread {}] Time: {:.6}, Process {}, {}.",
            self.worker, self.at, self.pid, self.kind
        )
    }
}
