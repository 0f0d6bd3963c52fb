pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::{SchedCore, QUANTUM_FLOOR, QUANTUM_FRACTION};
pub use event::{Lifecycle, SchedEvent};
pub use state::{ProcId, ProcessRecord, ReadyQueue, SchedCtx, SimTime, WorkerId};
