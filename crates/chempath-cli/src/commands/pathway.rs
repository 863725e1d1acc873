//! Pathway command handler for computing reaction pathways between compounds.

use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;

use chempath_cli::input::load_reactions;
use chempath_cli::output::{emit_pathway, report_rejected, OutputFormat};
use chempath_lib::{
    plan_pathway, PathAlgorithm, PathwayConstraints, PathwayRequest, PathwaySummary,
};

/// Search algorithm selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    /// Lowest total reaction cost.
    #[default]
    Dijkstra,
    /// Fewest reactions.
    Bfs,
}

impl From<AlgorithmArg> for PathAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => PathAlgorithm::Dijkstra,
            AlgorithmArg::Bfs => PathAlgorithm::Bfs,
        }
    }
}

/// Arguments for the pathway command.
#[derive(Debug, Clone)]
pub struct PathwayCommandArgs {
    /// Starting compound.
    pub from: String,
    /// Target compound.
    pub to: String,
    /// Algorithm to use when planning the pathway.
    pub algorithm: AlgorithmArg,
    /// Compounds to avoid.
    pub avoid: Vec<String>,
    /// Maximum cost of any single reaction.
    pub max_cost: Option<f64>,
}

impl PathwayCommandArgs {
    /// Convert CLI args to a library PathwayRequest.
    pub fn to_request(&self) -> PathwayRequest {
        PathwayRequest {
            start: self.from.clone(),
            goal: self.to.clone(),
            algorithm: self.algorithm.into(),
            constraints: PathwayConstraints {
                avoid_compounds: self.avoid.clone(),
                max_reaction_cost: self.max_cost,
            },
        }
    }
}

/// Handle the pathway subcommand.
pub fn handle_pathway_command(
    source: Option<&Path>,
    format: OutputFormat,
    args: &PathwayCommandArgs,
) -> Result<()> {
    let load = load_reactions(source)?;
    report_rejected(&load.rejected);

    let plan = plan_pathway(&load.graph, &args.to_request())?;
    emit_pathway(&PathwaySummary::from_plan(&plan), format)
}
