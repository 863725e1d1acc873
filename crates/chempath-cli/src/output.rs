//! Output formatting for reaction listings and pathways.
//!
//! Results go to stdout; diagnostics (rejected input lines, errors) go to
//! stderr so JSON output stays machine-readable.

use std::io::{self, Write};

use anyhow::Result;
use clap::ValueEnum;

use chempath_lib::{
    render_graph_listing, Error as LibError, PathwayRenderMode, PathwaySummary, ReactionGraph,
    RejectedLine,
};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Print the reaction listing in the requested format.
pub fn emit_listing(graph: &ReactionGraph, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_graph_listing(graph),
        OutputFormat::Json => {
            let reactions: Vec<_> = graph.reactions().collect();
            format!("{}\n", serde_json::to_string_pretty(&reactions)?)
        }
    };
    write_stdout(&rendered)
}

/// Print a planned pathway in the requested format.
pub fn emit_pathway(summary: &PathwaySummary, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => summary.render(PathwayRenderMode::PlainText),
        OutputFormat::Json => format!("{}\n", summary.to_json()?),
    };
    write_stdout(&rendered)
}

/// Report skipped input lines on stderr.
pub fn report_rejected(rejected: &[RejectedLine]) {
    for line in rejected {
        eprintln!(
            "Skipped line {} ('{}'): {}",
            line.line_number, line.content, line.reason
        );
    }
}

/// Turn a command failure into the message shown to the user.
pub fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<LibError>() {
        Some(LibError::UnknownCompound { name, suggestions }) => {
            let mut message = format!("Unknown compound '{}'.", name);
            if !suggestions.is_empty() {
                message.push_str(&format!(" Did you mean: {}?", suggestions.join(", ")));
            }
            message
        }
        Some(LibError::PathwayNotFound { start, goal }) => format!(
            "No pathway found between {} and {}.\n\
             Try a different algorithm, fewer --avoid compounds, or a higher --max-cost.",
            start, goal
        ),
        _ => format!("Error: {:#}", err),
    }
}

fn write_stdout(rendered: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_compound_message_lists_suggestions() {
        let err = anyhow::Error::new(LibError::UnknownCompound {
            name: "Etanol".to_string(),
            suggestions: vec!["Ethanol".to_string()],
        });
        assert_eq!(
            describe_error(&err),
            "Unknown compound 'Etanol'. Did you mean: Ethanol?"
        );
    }

    #[test]
    fn pathway_not_found_message_suggests_next_steps() {
        let err = anyhow::Error::new(LibError::PathwayNotFound {
            start: "A".to_string(),
            goal: "B".to_string(),
        });
        let message = describe_error(&err);
        assert!(message.starts_with("No pathway found between A and B."));
        assert!(message.contains("Try a different algorithm"));
    }

    #[test]
    fn other_errors_include_context_chain() {
        let err = anyhow::anyhow!("disk on fire").context("failed to read reactions");
        assert_eq!(
            describe_error(&err),
            "Error: failed to read reactions: disk on fire"
        );
    }
}
