use super::report::WaitReport;
use crate::core::event::SchedEvent;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write trace output: {0}")]
    Io(#[from] io::Error),
}

/// Receives the ordered lifecycle stream and, once the queue drains, the
/// waiting-time report. Write failures are fatal to the simulation; the
/// trace is the only observable artifact.
pub trait EventSink {
    fn event(&mut self, event: &SchedEvent) -> Result<(), SinkError>;
    fn report(&mut self, report: &WaitReport) -> Result<(), SinkError>;
    fn flush(&mut self) -> Result<(), SinkError>;
}

pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> EventSink for WriterSink<W> {
    fn event(&mut self, event: &SchedEvent) -> Result<(), SinkError> {
        writeln!(self.writer, "{event}")?;
        Ok(())
    }

    fn report(&mut self, report: &WaitReport) -> Result<(), SinkError> {
        write!(self.writer, "{report}")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Mirrors the stream to every inner sink, reference-style (console plus
/// output file receive identical lines).
pub struct TeeSink {
    sinks: Vec<Box<dyn EventSink>>,
}

impl TeeSink {
    pub fn new(sinks: Vec<Box<dyn EventSink>>) -> Self {
        Self { sinks }
    }
}

impl EventSink for TeeSink {
    fn event(&mut self, event: &SchedEvent) -> Result<(), SinkError> {
        for sink in &mut self.sinks {
            sink.event(event)?;
        }
        Ok(())
    }

    fn report(&mut self, report: &WaitReport) -> Result<(), SinkError> {
        for sink in &mut self.sinks {
            sink.report(report)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        for sink in &mut self.sinks {
            sink.flush()?;
        }
        Ok(())
    }
}
