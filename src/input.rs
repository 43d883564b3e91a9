use std::fs;
use std::num::ParseIntError;
use std::path::Path;

use thiserror::Error;

use crate::core::state::{Job, Ticks};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read job table: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected id,arrival,runtime,deadline, found {found} fields")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: bad integer field {field:?}: {source}")]
    BadField {
        line: usize,
        field: String,
        source: ParseIntError,
    },

    #[error("line {line}: job {id} has zero runtime")]
    ZeroRuntime { line: usize, id: u64 },
}

/// Parse a job table: one `id,arrival,runtime,deadline` row per line
/// (deadline absolute). Blank lines, `#` comments, and an `id`-prefixed
/// header are skipped; extra trailing fields are ignored.
pub fn parse_jobs(text: &str) -> Result<Vec<Job>, LoadError> {
    let mut jobs = Vec::new();

    for (number, raw) in text.lines().enumerate() {
        let line = number + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed.to_ascii_lowercase().starts_with("id") {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if fields.len() < 4 {
            return Err(LoadError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        let parse = |field: &str| -> Result<Ticks, LoadError> {
            field.parse().map_err(|source| LoadError::BadField {
                line,
                field: field.to_string(),
                source,
            })
        };

        let id = parse(fields[0])?;
        let arrival_time = parse(fields[1])?;
        let run_time = parse(fields[2])?;
        let deadline = parse(fields[3])?;
        if run_time == 0 {
            return Err(LoadError::ZeroRuntime { line, id });
        }

        jobs.push(Job {
            id,
            arrival_time,
            run_time,
            deadline,
        });
    }

    Ok(jobs)
}

/// Read and parse a job table from disk.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Job>, LoadError> {
    parse_jobs(&fs::read_to_string(path)?)
}
