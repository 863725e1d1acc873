//! List command handler for printing the loaded reaction network.

use std::path::Path;

use anyhow::Result;

use chempath_cli::input::load_reactions;
use chempath_cli::output::{emit_listing, report_rejected, OutputFormat};

/// Handle the list subcommand.
pub fn handle_list_command(source: Option<&Path>, format: OutputFormat) -> Result<()> {
    let load = load_reactions(source)?;
    report_rejected(&load.rejected);
    emit_listing(&load.graph, format)
}
