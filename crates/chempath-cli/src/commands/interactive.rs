//! Interactive prompt: enter reactions line by line, then query one pathway.

use std::io::{self, BufRead, Lines, Write};

use anyhow::Result;
use tracing::warn;

use chempath_lib::input::END_OF_INPUT;
use chempath_lib::{
    parse_reaction_line, render_graph_listing, render_pathway_arrow, Error as LibError,
    ReactionGraph,
};

const USAGE: &str = "StartCompound EndCompound ReactionCost";

/// Handle the interactive subcommand using the process stdin/stdout.
pub fn handle_interactive_command() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_session(stdin.lock(), &mut stdout)
}

/// Drive one prompt session. Malformed reaction lines are reported and the
/// prompt continues; end of input behaves like `done`.
pub fn run_session<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<()> {
    let mut lines = input.lines();

    writeln!(out, "Enter reactions in the format:")?;
    writeln!(out, "{USAGE}")?;
    writeln!(out, "Type '{END_OF_INPUT}' to finish entering reactions.")?;
    writeln!(out)?;

    let mut graph = ReactionGraph::new();
    loop {
        write!(out, "Enter reaction: ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };
        if line.trim().eq_ignore_ascii_case(END_OF_INPUT) {
            break;
        }

        match parse_reaction_line(&line) {
            Ok(Some(reaction)) => graph.add_reaction(
                reaction.source.as_str(),
                reaction.destination.as_str(),
                reaction.cost,
            ),
            Ok(None) => {}
            Err(err) => {
                warn!("rejected reaction input: {}", err);
                let reason = match err {
                    LibError::MalformedReaction { reason, .. } => reason,
                    other => other.to_string(),
                };
                writeln!(out, "Invalid input format ({reason}). Please use: {USAGE}")?;
            }
        }
    }

    writeln!(out)?;
    write!(out, "{}", render_graph_listing(&graph))?;
    writeln!(out)?;

    let start = prompt(&mut lines, out, "Enter the starting compound: ")?;
    let goal = prompt(&mut lines, out, "Enter the target compound: ")?;

    writeln!(out)?;
    match graph.find_shortest_pathway(&start, &goal) {
        Some(pathway) => write!(
            out,
            "{}",
            render_pathway_arrow(&pathway.steps, pathway.total_cost)
        )?,
        None => writeln!(out, "No pathway found between the specified compounds.")?,
    }
    out.flush()?;
    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    lines: &mut Lines<R>,
    out: &mut W,
    message: &str,
) -> Result<String> {
    write!(out, "{message}")?;
    out.flush()?;
    let answer = lines.next().transpose()?.unwrap_or_default();
    Ok(answer.trim().to_string())
}
