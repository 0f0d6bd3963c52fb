use super::report::{WaitEntry, WaitReport};
use super::sink::{EventSink, SinkError};
use crate::core::{driver::SchedCore, state::ProcessRecord};

/// Run state of the simulation. `Running` while the ready queue holds
/// processes, `Draining` while the report is assembled, `Terminated` once it
/// has been handed to the sink. There is no way back to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Draining,
    Terminated,
}

pub struct Sim {
    pub core: SchedCore,
    phase: Phase,
}

impl Sim {
    pub fn new(records: Vec<ProcessRecord>) -> Self {
        assert!(!records.is_empty(), "simulation requires at least one process");
        Self {
            core: SchedCore::new(records),
            phase: Phase::Running,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Drives the scheduler until every process completes, forwarding each
    /// lifecycle event to the sink in order, then computes and emits the
    /// waiting-time report. A sink failure aborts the run.
    pub fn run(&mut self, sink: &mut dyn EventSink) -> Result<WaitReport, SinkError> {
        debug_assert_eq!(self.phase, Phase::Running, "simulation already ran");

        while !self.core.done() {
            for event in self.core.step() {
                sink.event(&event)?;
            }
        }

        self.phase = Phase::Draining;
        let report = self.wait_report();
        sink.report(&report)?;
        sink.flush()?;
        self.phase = Phase::Terminated;
        Ok(report)
    }

    // Waiting time = completion - arrival - burst, floored at zero, from the
    // immutable arrival/burst fields plus the completion table.
    fn wait_report(&self) -> WaitReport {
        let ctx = &self.core.ctx;
        debug_assert!(ctx.all_completed(), "report built before the queue drained");

        let entries = ctx
            .records
            .iter()
            .map(|rec| {
                let completed = ctx
                    .completion(rec.id)
                    .expect("drained simulation has a completion time for every process");
                let raw = completed - rec.arrival - rec.burst;
                WaitEntry {
                    pid: rec.id,
                    wait: raw.max(0.0),
                }
            })
            .collect();
        WaitReport::new(entries)
    }
}
