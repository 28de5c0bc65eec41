//! Command loop
//!
//! Feeds input lines to a pool and writes the command and resulting layout
//! after each one. The first command the pool cannot satisfy ends the run.

use crate::allocator::buddy::BuddyPool;
use crate::allocator::PoolAllocator;
use crate::command::Command;
use crate::error::{BuddyError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands applied successfully
    pub commands: usize,
}

/// Run every command in `input` against `pool`, writing output to `out`
///
/// Parse errors and unsatisfiable commands stop the run; everything written
/// up to that point stays in `out`.
pub fn simulate<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    pool: &mut BuddyPool,
) -> Result<RunSummary> {
    writeln!(out, "{}", pool)?;

    let mut commands = 0;
    for (line_no, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = Command::parse(&line)?;
        debug!("Line {}: {}", line_no + 1, command);
        writeln!(out, "{}", command)?;

        if !pool.process(&command) {
            out.flush()?;
            return Err(BuddyError::Unsatisfiable {
                command: command.to_string(),
            });
        }

        writeln!(out, "{}", pool)?;
        commands += 1;
    }

    out.flush()?;
    info!("Applied {} commands", commands);
    Ok(RunSummary { commands })
}

/// Open `path` and run it through [`simulate`]
pub fn simulate_file<P: AsRef<Path>, W: Write>(
    path: P,
    out: &mut W,
    pool: &mut BuddyPool,
) -> Result<RunSummary> {
    info!("Reading commands from {:?}", path.as_ref());
    let file = File::open(path)?;
    simulate(BufReader::new(file), out, pool)
}
