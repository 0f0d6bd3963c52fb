use super::state::{SchedCtx, SimTime};

/// Debug-build consistency checks, run after every scheduling step.
#[derive(Debug)]
pub struct Observer {
    step: u64,
    last_now: SimTime,
    last_remaining: Vec<SimTime>,
}

impl Observer {
    pub fn new(ctx: &SchedCtx) -> Self {
        Self {
            step: 0,
            last_now: ctx.now,
            last_remaining: ctx.records.iter().map(|rec| rec.remaining).collect(),
        }
    }

    pub fn observe(&mut self, ctx: &SchedCtx) {
        self.step += 1;

        debug_assert!(
            ctx.now >= self.last_now,
            "clock moved backwards at step {}: {} -> {}",
            self.step,
            self.last_now,
            ctx.now
        );
        self.last_now = ctx.now;

        for (rec, last) in ctx.records.iter().zip(&mut self.last_remaining) {
            debug_assert!(
                rec.remaining >= 0.0,
                "process {} has negative remaining time",
                rec.id
            );
            debug_assert!(
                rec.remaining <= *last,
                "remaining time grew for process {}: {} -> {}",
                rec.id,
                last,
                rec.remaining
            );
            *last = rec.remaining;

            if rec.finished() {
                debug_assert!(
                    ctx.completions.contains_key(&rec.id),
                    "finished process {} has no completion time",
                    rec.id
                );
                debug_assert!(
                    !ctx.queue.contains(rec.id),
                    "finished process {} still queued",
                    rec.id
                );
            } else {
                debug_assert!(
                    ctx.queue.contains(rec.id),
                    "live process {} left the ready queue",
                    rec.id
                );
                debug_assert!(
                    !ctx.completions.contains_key(&rec.id),
                    "running process {} has a completion time",
                    rec.id
                );
            }
        }

        let mut queued = vec![false; ctx.records.len()];
        for id in ctx.queue.iter() {
            let index = id as usize - 1;
            debug_assert!(index < queued.len(), "queue holds unknown process {id}");
            debug_assert!(!queued[index], "process {id} queued twice");
            queued[index] = true;
        }
    }
}
