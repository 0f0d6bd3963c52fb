use rustc_hash::FxHashMap;
use std::collections::VecDeque;

// 1-based, assigned in load order
pub type ProcId = u32;
// Cosmetic worker tag printed in the trace; one worker per process,
// bound in launch order, so values coincide with ProcId.
pub type WorkerId = u32;
pub type SimTime = f64;

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRecord {
    pub id: ProcId,
    pub arrival: SimTime,
    pub burst: SimTime,
    pub remaining: SimTime,
    pub started: bool,
}

impl ProcessRecord {
    pub fn new(id: ProcId, arrival: SimTime, burst: SimTime) -> Self {
        Self {
            id,
            arrival,
            burst,
            remaining: burst,
            started: false,
        }
    }

    pub fn finished(&self) -> bool {
        self.remaining == 0.0
    }
}

/// Order-preserving queue of not-yet-finished processes.
#[derive(Debug, Default)]
pub struct ReadyQueue {
    procs: VecDeque<ProcId>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, id: ProcId) {
        debug_assert!(!self.procs.contains(&id), "process {id} enqueued twice");
        self.procs.push_back(id);
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn contains(&self, id: ProcId) -> bool {
        self.procs.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = ProcId> + '_ {
        self.procs.iter().copied()
    }

    // Rotate until position `pos` is at the head, then dequeue. Keeps the
    // relative order of everything else.
    fn take_at(&mut self, pos: usize) -> ProcId {
        debug_assert!(pos < self.procs.len(), "rotation target out of range");
        self.procs.rotate_left(pos);
        self.procs.pop_front().expect("rotation target must exist")
    }
}

/// All mutable scheduling state: the simulated clock, the ready queue, the
/// process table and the completion times keyed by process id.
#[derive(Debug)]
pub struct SchedCtx {
    pub now: SimTime,
    pub records: Vec<ProcessRecord>,
    pub queue: ReadyQueue,
    pub completions: FxHashMap<ProcId, SimTime>,
}

impl SchedCtx {
    /// Every process is known up front; the queue starts holding all of them
    /// in load order and the clock starts at the first record's arrival.
    pub fn new(records: Vec<ProcessRecord>) -> Self {
        let now = records.first().map(|rec| rec.arrival).unwrap_or(0.0);
        let mut queue = ReadyQueue::new();
        for rec in &records {
            debug_assert_eq!(
                rec.id as usize,
                queue.len() + 1,
                "record ids must be 1-based and contiguous in load order"
            );
            queue.push_back(rec.id);
        }
        Self {
            now,
            records,
            queue,
            completions: FxHashMap::default(),
        }
    }

    pub fn record(&self, id: ProcId) -> &ProcessRecord {
        &self.records[id as usize - 1]
    }

    pub fn record_mut(&mut self, id: ProcId) -> &mut ProcessRecord {
        &mut self.records[id as usize - 1]
    }

    pub fn advance_time(&mut self, delta: SimTime) {
        self.now += delta;
    }

    /// Pick the queued process with the least remaining time among those
    /// that have already arrived, remove it from the queue and return it.
    ///
    /// The scan walks the whole queue and skips processes with
    /// `arrival > now`; strict `<` keeps the earlier-queued process on an
    /// exact tie. Returns `None` only when every queued process is a future
    /// arrival (the caller then jumps the clock).
    pub fn select_next(&mut self) -> Option<ProcId> {
        let mut best: Option<(usize, ProcId, SimTime)> = None;
        for (pos, id) in self.queue.iter().enumerate() {
            let rec = self.record(id);
            if rec.arrival > self.now {
                continue;
            }
            if best.map_or(true, |(_, _, least)| rec.remaining < least) {
                best = Some((pos, id, rec.remaining));
            }
        }

        let (pos, id, _) = best?;
        let taken = self.queue.take_at(pos);
        debug_assert_eq!(taken, id);
        Some(id)
    }

    /// Earliest arrival among the queued processes. `None` on an empty queue.
    pub fn earliest_queued_arrival(&self) -> Option<SimTime> {
        self.queue
            .iter()
            .map(|id| self.record(id).arrival)
            .reduce(SimTime::min)
    }

    pub fn mark_completed(&mut self, id: ProcId, at: SimTime) {
        debug_assert!(
            !self.queue.contains(id),
            "process {id} completed while still queued"
        );
        debug_assert!(self.record(id).finished(), "process {id} has time left");
        let prev = self.completions.insert(id, at);
        debug_assert!(prev.is_none(), "process {id} completed twice");
    }

    pub fn completion(&self, id: ProcId) -> Option<SimTime> {
        self.completions.get(&id).copied()
    }

    pub fn all_completed(&self) -> bool {
        self.completions.len() == self.records.len()
    }
}
