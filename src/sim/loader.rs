use crate::core::state::{ProcId, ProcessRecord};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read workload: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: not a valid `arrival burst` pair: {text:?}")]
    Malformed { line: usize, text: String },

    #[error("workload contains no processes")]
    Empty,
}

/// Loads a workload file: one process per line, `arrival burst`, with a
/// non-negative integer arrival and a positive integer burst. Ids are
/// 1-based line order, which also settles arrival ties during selection.
/// Whitespace-only lines are skipped; any other malformed line aborts the
/// load.
pub fn load_workload(path: impl AsRef<Path>) -> Result<Vec<ProcessRecord>, LoadError> {
    let file = File::open(path)?;
    parse_workload(BufReader::new(file))
}

pub fn parse_workload(reader: impl BufRead) -> Result<Vec<ProcessRecord>, LoadError> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (arrival, burst) = parse_line(&line).ok_or_else(|| LoadError::Malformed {
            line: index + 1,
            text: line.clone(),
        })?;
        let id = records.len() as ProcId + 1;
        records.push(ProcessRecord::new(id, arrival, burst));
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(records)
}

fn parse_line(line: &str) -> Option<(f64, f64)> {
    let mut fields = line.split_whitespace();
    let arrival: u64 = fields.next()?.parse().ok()?;
    let burst: u64 = fields.next()?.parse().ok()?;
    // A process that demands no CPU has no place in the model; remaining
    // time must start positive and hit zero exactly once.
    if burst == 0 || fields.next().is_some() {
        return None;
    }
    Some((arrival as f64, burst as f64))
}
