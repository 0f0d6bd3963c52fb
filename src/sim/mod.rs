pub mod driver;
pub mod loader;
pub mod report;
pub mod sink;

pub use driver::{Phase, Sim};
pub use loader::{load_workload, parse_workload, LoadError};
pub use report::{WaitEntry, WaitReport, REPORT_RULE};
pub use sink::{EventSink, SinkError, TeeSink, WriterSink};
