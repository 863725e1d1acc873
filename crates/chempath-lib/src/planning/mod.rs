//! Pathway planning by compound name.
//!
//! This module provides:
//! - [`PathAlgorithm`] - Supported search algorithms (Dijkstra, BFS)
//! - [`PathwayConstraints`] - Constraints applied during planning
//! - [`PathwayRequest`] - High-level planning request
//! - [`PathwayPlan`] - Planned pathway result
//! - [`plan_pathway`] - Main entry point for computing pathways
//!
//! Unlike [`ReactionGraph::find_shortest_pathway`], planning reports unknown
//! compounds and missing pathways as [`Error`] values so callers can surface
//! them directly.
//!
//! # Example
//!
//! ```
//! use chempath_lib::{plan_pathway, PathwayRequest, ReactionGraph};
//!
//! let mut graph = ReactionGraph::new();
//! graph.add_reaction("Ethene", "Ethanol", 2.0);
//! graph.add_reaction("Ethanol", "Ethanal", 1.5);
//!
//! let plan = plan_pathway(&graph, &PathwayRequest::dijkstra("Ethene", "Ethanal")).unwrap();
//! assert_eq!(plan.step_count(), 2);
//! assert_eq!(plan.total_cost, 3.5);
//! ```

mod planner;

pub use planner::{select_planner, BfsPlanner, DijkstraPlanner, PathwayPlanner};

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Compound, ReactionGraph};
use crate::path::PathConstraints as SearchConstraints;

/// Number of "did you mean" suggestions attached to unknown compound errors.
const MAX_SUGGESTIONS: usize = 3;

/// Supported pathway search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PathAlgorithm {
    /// Breadth-first search (fewest reactions).
    Bfs,
    /// Dijkstra's algorithm (lowest total reaction cost).
    #[default]
    Dijkstra,
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PathAlgorithm::Bfs => "bfs",
            PathAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

/// Constraints applied during pathway planning.
#[derive(Debug, Default, Clone)]
pub struct PathwayConstraints {
    /// Compounds that must not appear in the pathway (other than as start).
    pub avoid_compounds: Vec<String>,
    /// Maximum cost allowed for any single reaction.
    pub max_reaction_cost: Option<f64>,
}

impl PathwayConstraints {
    fn to_search_constraints(&self, avoided: HashSet<Compound>) -> SearchConstraints {
        SearchConstraints {
            avoided_compounds: avoided,
            max_reaction_cost: self.max_reaction_cost,
        }
    }
}

/// High-level pathway planning request.
#[derive(Debug, Clone)]
pub struct PathwayRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: PathAlgorithm,
    pub constraints: PathwayConstraints,
}

impl PathwayRequest {
    /// Convenience constructor for minimum-cost pathways without extra constraints.
    pub fn dijkstra(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: PathAlgorithm::Dijkstra,
            constraints: PathwayConstraints::default(),
        }
    }

    /// Convenience constructor for fewest-reaction pathways without extra constraints.
    pub fn bfs(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            algorithm: PathAlgorithm::Bfs,
            ..Self::dijkstra(start, goal)
        }
    }
}

/// Planned pathway returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathwayPlan {
    pub algorithm: PathAlgorithm,
    pub start: Compound,
    pub goal: Compound,
    pub steps: Vec<Compound>,
    pub total_cost: f64,
}

impl PathwayPlan {
    /// Number of reactions in the pathway.
    pub fn step_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a pathway using the requested algorithm and constraints.
pub fn plan_pathway(graph: &ReactionGraph, request: &PathwayRequest) -> Result<PathwayPlan> {
    let start = resolve_compound(graph, &request.start)?;
    let goal = resolve_compound(graph, &request.goal)?;
    let avoided = resolve_avoided_compounds(graph, &request.constraints.avoid_compounds)?;
    let constraints = request.constraints.to_search_constraints(avoided);

    let planner = select_planner(request);
    let found = planner.find_pathway(graph, start.as_str(), goal.as_str(), &constraints);
    let Some(pathway) = found else {
        return Err(Error::PathwayNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    };

    debug!(
        "planned {} pathway {} -> {}: {} reactions, cost {}",
        planner.algorithm(),
        start,
        goal,
        pathway.reaction_count(),
        pathway.total_cost
    );

    Ok(PathwayPlan {
        algorithm: planner.algorithm(),
        start,
        goal,
        steps: pathway.steps,
        total_cost: pathway.total_cost,
    })
}

/// Resolve a compound name, returning an error with suggestions when unknown.
fn resolve_compound(graph: &ReactionGraph, name: &str) -> Result<Compound> {
    if graph.contains(name) {
        return Ok(Compound::from(name));
    }

    Err(Error::UnknownCompound {
        name: name.to_string(),
        suggestions: graph.fuzzy_compound_matches(name, MAX_SUGGESTIONS),
    })
}

/// Resolve a list of avoided compound names.
fn resolve_avoided_compounds(
    graph: &ReactionGraph,
    avoided: &[String],
) -> Result<HashSet<Compound>> {
    let mut resolved = HashSet::new();
    for name in avoided {
        resolved.insert(resolve_compound(graph, name)?);
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> ReactionGraph {
        let mut graph = ReactionGraph::new();
        graph.add_reaction("Methane", "Methanol", 4.0);
        graph.add_reaction("Methanol", "Formaldehyde", 1.0);
        graph.add_reaction("Methane", "Formaldehyde", 9.0);
        graph
    }

    #[test]
    fn algorithm_display_matches_serde_names() {
        assert_eq!(PathAlgorithm::Bfs.to_string(), "bfs");
        assert_eq!(PathAlgorithm::Dijkstra.to_string(), "dijkstra");
        assert_eq!(
            serde_json::to_string(&PathAlgorithm::Dijkstra).unwrap(),
            "\"dijkstra\""
        );
    }

    #[test]
    fn resolve_compound_suggests_close_names() {
        let graph = sample_graph();
        let err = resolve_compound(&graph, "Methanl").unwrap_err();
        match err {
            Error::UnknownCompound { name, suggestions } => {
                assert_eq!(name, "Methanl");
                assert_eq!(suggestions.first().map(String::as_str), Some("Methanol"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bfs_request_differs_only_in_algorithm() {
        let request = PathwayRequest::bfs("Methane", "Formaldehyde");
        assert_eq!(request.algorithm, PathAlgorithm::Bfs);
        assert_eq!(request.start, "Methane");
        assert!(request.constraints.avoid_compounds.is_empty());
    }
}
