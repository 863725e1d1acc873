//! Line-oriented reaction input.
//!
//! Each non-blank line holds `<source> <destination> <cost>`. Lines starting
//! with `#` are comments and a line reading `done` (any case) ends the input.
//! Malformed lines never abort reading; they are collected as
//! [`RejectedLine`]s so the caller can report them.

use std::io::BufRead;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::{Reaction, ReactionGraph};

/// Sentinel line that ends interactive input.
pub const END_OF_INPUT: &str = "done";

/// A line that could not be turned into a reaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number within the input.
    pub line_number: usize,
    pub content: String,
    pub reason: String,
}

/// Result of reading a reaction listing.
#[derive(Debug, Default)]
pub struct ReactionLoad {
    pub graph: ReactionGraph,
    pub accepted: usize,
    pub rejected: Vec<RejectedLine>,
}

/// Parse a single reaction line.
///
/// Returns `Ok(None)` for blank lines and comments.
pub fn parse_reaction_line(line: &str) -> Result<Option<Reaction>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let [source, destination, cost] = tokens.as_slice() else {
        return Err(malformed(
            trimmed,
            format!(
                "expected 3 fields (source destination cost), found {}",
                tokens.len()
            ),
        ));
    };

    let cost: f64 = cost
        .parse()
        .map_err(|_| malformed(trimmed, format!("cost '{}' is not a number", cost)))?;

    let reaction = Reaction::new(*source, *destination, cost);
    reaction.validate().map_err(|err| match err {
        Error::InvalidReaction { reason, .. } => malformed(trimmed, reason),
        other => other,
    })?;

    Ok(Some(reaction))
}

/// Read reactions until end of input or a `done` line.
///
/// Only I/O failures are returned as errors.
pub fn read_reactions<R: BufRead>(reader: R) -> Result<ReactionLoad> {
    let mut load = ReactionLoad::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().eq_ignore_ascii_case(END_OF_INPUT) {
            break;
        }

        match parse_reaction_line(&line) {
            Ok(Some(reaction)) => {
                load.graph.extend(std::iter::once(reaction));
                load.accepted += 1;
            }
            Ok(None) => {}
            Err(err) => {
                let rejected = RejectedLine {
                    line_number: index + 1,
                    content: line.trim().to_string(),
                    reason: rejection_reason(err),
                };
                warn!(
                    "skipping reaction line {}: {}",
                    rejected.line_number, rejected.reason
                );
                load.rejected.push(rejected);
            }
        }
    }

    debug!(
        "read {} reactions ({} rejected lines) into {} compounds",
        load.accepted,
        load.rejected.len(),
        load.graph.compound_count()
    );

    Ok(load)
}

fn malformed(line: &str, reason: String) -> Error {
    Error::MalformedReaction {
        line: line.to_string(),
        reason,
    }
}

fn rejection_reason(err: Error) -> String {
    match err {
        Error::MalformedReaction { reason, .. } => reason,
        other => other.to_string(),
    }
}
