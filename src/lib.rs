pub mod core;
pub mod sim;

pub use crate::core::{Lifecycle, ProcessRecord, SchedCore, SchedEvent};
pub use sim::{LoadError, Phase, Sim, SinkError, WaitReport};
