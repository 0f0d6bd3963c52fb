use super::{
    event::{Lifecycle, SchedEvent},
    observer::Observer,
    state::{ProcId, ProcessRecord, SchedCtx, SimTime, WorkerId},
};
use log::debug;

/// Slice granted per step: this fraction of the remaining burst.
pub const QUANTUM_FRACTION: f64 = 0.1;
/// At or below this much remaining time a process runs to completion.
pub const QUANTUM_FLOOR: f64 = 0.1;

pub struct SchedCore {
    pub ctx: SchedCtx,
    observer: Observer,
}

impl SchedCore {
    pub fn new(records: Vec<ProcessRecord>) -> Self {
        let ctx = SchedCtx::new(records);
        let observer = Observer::new(&ctx);
        Self { ctx, observer }
    }

    pub fn now(&self) -> SimTime {
        self.ctx.now
    }

    /// True once the ready queue has drained.
    pub fn done(&self) -> bool {
        self.ctx.queue.is_empty()
    }

    /// One scheduling step: select the eligible process with the least
    /// remaining time, run it for one quantum, then requeue or retire it.
    /// Returns the lifecycle events in emission order. Must not be called
    /// once `done()`.
    pub fn step(&mut self) -> Vec<SchedEvent> {
        debug_assert!(!self.done(), "step on an empty ready queue");

        // All processes are preloaded, so an empty selection means every
        // queued process arrives in the future; jump the clock to the
        // earliest of them instead of stalling.
        let pid = match self.ctx.select_next() {
            Some(pid) => pid,
            None => {
                let next = self
                    .ctx
                    .earliest_queued_arrival()
                    .expect("non-empty queue has a next arrival");
                debug!(
                    "no process eligible at {:.6}, clock jumps to {next:.6}",
                    self.ctx.now
                );
                self.ctx.now = next;
                self.ctx
                    .select_next()
                    .expect("a process is eligible after the clock jump")
            }
        };

        let worker: WorkerId = pid;
        let before = self.ctx.now;
        let mut events = Vec::with_capacity(3);

        let record = self.ctx.record_mut(pid);
        if !record.started {
            record.started = true;
            events.push(SchedEvent::new(worker, before, pid, Lifecycle::Started));
        }
        // Every slice is also logged as a resume, the first one right after
        // its start line. The duplication is reference behavior.
        events.push(SchedEvent::new(worker, before, pid, Lifecycle::Resumed));

        let finished = self.apply_quantum(pid);
        let after = self.ctx.now;
        if finished {
            self.ctx.mark_completed(pid, after);
            events.push(SchedEvent::new(worker, after, pid, Lifecycle::Finished));
        } else {
            events.push(SchedEvent::new(worker, after, pid, Lifecycle::Paused));
            self.ctx.queue.push_back(pid);
        }

        self.observer.observe(&self.ctx);
        events
    }

    // Decreasing quantum: the slice is a fixed fraction of the remaining
    // burst, except below the floor, where the process runs out its
    // remainder. The clock advances by exactly the time consumed.
    fn apply_quantum(&mut self, pid: ProcId) -> bool {
        let record = self.ctx.record_mut(pid);
        debug_assert!(
            record.remaining > 0.0,
            "quantum applied to finished process {pid}"
        );

        let (delta, finished) = if record.remaining <= QUANTUM_FLOOR {
            let delta = record.remaining;
            record.remaining = 0.0;
            (delta, true)
        } else {
            let slice = QUANTUM_FRACTION * record.remaining;
            record.remaining -= slice;
            (slice, false)
        };

        self.ctx.advance_time(delta);
        finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn core(specs: &[(SimTime, SimTime)]) -> SchedCore {
        let records = specs
            .iter()
            .enumerate()
            .map(|(i, &(arrival, burst))| ProcessRecord::new(i as ProcId + 1, arrival, burst))
            .collect();
        SchedCore::new(records)
    }

    #[test]
    fn quantum_shaves_a_tenth_of_the_remaining_burst() {
        let mut core = core(&[(0.0, 4.0)]);
        core.step();
        assert_eq!(core.ctx.record(1).remaining, 4.0 - 0.1 * 4.0);
        assert_eq!(core.now(), 0.1 * 4.0);
    }

    #[test]
    fn below_the_floor_the_process_runs_to_completion() {
        let mut core = core(&[(0.0, 0.07)]);
        let events = core.step();
        assert_eq!(core.ctx.record(1).remaining, 0.0);
        assert_eq!(core.now(), 0.07);
        assert_eq!(events.last().map(|e| e.kind), Some(Lifecycle::Finished));
        assert_eq!(core.ctx.completion(1), Some(0.07));
    }

    #[test]
    fn exactly_the_floor_counts_as_the_last_slice() {
        let mut core = core(&[(0.0, 0.1)]);
        core.step();
        assert_eq!(core.ctx.record(1).remaining, 0.0);
        assert_eq!(core.now(), 0.1);
    }

    #[test]
    fn first_slice_logs_started_then_resumed() {
        let mut core = core(&[(0.0, 4.0)]);
        let events = core.step();
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![Lifecycle::Started, Lifecycle::Resumed, Lifecycle::Paused]
        );
        // Started and Resumed carry the pre-quantum clock, Paused the
        // post-quantum clock.
        assert_eq!(events[0].at, 0.0);
        assert_eq!(events[1].at, 0.0);
        assert_eq!(events[2].at, 0.4);
    }

    #[test]
    fn later_slices_log_a_single_resume() {
        let mut core = core(&[(0.0, 4.0)]);
        core.step();
        let events = core.step();
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![Lifecycle::Resumed, Lifecycle::Paused]);
    }

    #[test]
    fn worker_tag_matches_the_process() {
        let mut core = core(&[(0.0, 1.0), (0.0, 0.05)]);
        // Process 2 has the least remaining and runs first.
        let events = core.step();
        assert!(events.iter().all(|e| e.pid == 2 && e.worker == 2));
    }

    #[test]
    fn clock_jumps_to_the_next_arrival_instead_of_stalling() {
        let mut core = core(&[(0.0, 0.1), (5.0, 0.1)]);
        let first = core.step();
        assert_eq!(first[0].pid, 1);
        assert_eq!(core.now(), 0.1);

        // Only the future arrival remains; the step must jump to t=5 and
        // run it rather than spin or terminate early.
        let second = core.step();
        assert_eq!(second[0].pid, 2);
        assert_eq!(second[0].at, 5.0);
        assert_eq!(second[0].kind, Lifecycle::Started);
        assert_eq!(core.ctx.completion(2), Some(5.1));
        assert!(core.done());
    }

    #[test]
    fn preempted_process_returns_to_the_tail() {
        let mut core = core(&[(0.0, 4.0), (0.0, 9.0)]);
        core.step();
        assert_eq!(core.ctx.queue.iter().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn tied_processes_favor_the_lowest_id_then_the_leader_runs_on() {
        let mut core = core(&[(0.0, 4.0), (0.0, 4.0)]);
        let first = core.step();
        assert_eq!(first[0].pid, 1);
        // After one slice process 1 holds the least remaining time, so the
        // shortest-remaining rule keeps selecting it.
        let second = core.step();
        assert_eq!(second[0].pid, 1);
    }

    #[test]
    fn completion_time_telescopes_for_a_burst_of_four() {
        let mut core = core(&[(0.0, 4.0)]);
        while !core.done() {
            core.step();
        }
        // The geometric slices plus the final remainder sum back to the
        // full burst without drift for this input.
        assert_eq!(core.ctx.completion(1), Some(4.0));
    }
}
