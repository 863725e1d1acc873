//! Reaction loading for CLI commands.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use chempath_lib::{read_reactions, ReactionLoad};

/// Load a reaction listing from `source`, or from stdin when `source` is
/// absent or `-`.
pub fn load_reactions(source: Option<&Path>) -> Result<ReactionLoad> {
    let load = match source {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("failed to open reactions file {}", path.display()))?;
            read_reactions(BufReader::new(file))
                .with_context(|| format!("failed to read reactions from {}", path.display()))?
        }
        _ => read_reactions(io::stdin().lock()).context("failed to read reactions from stdin")?,
    };

    info!(
        "loaded {} reactions across {} compounds",
        load.accepted,
        load.graph.compound_count()
    );
    Ok(load)
}
