//! Pathway planning strategies.
//!
//! Each [`PathAlgorithm`] is backed by a [`PathwayPlanner`] implementation so
//! `plan_pathway` only deals with name resolution and error reporting.

use crate::graph::ReactionGraph;
use crate::path::{
    find_pathway_bfs, find_pathway_dijkstra, PathConstraints as SearchConstraints, Pathway,
};

use super::{PathAlgorithm, PathwayRequest};

/// Trait for pathway planning strategies.
pub trait PathwayPlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> PathAlgorithm;

    /// Execute the search on the given graph.
    ///
    /// Returns `Some(pathway)` if one is found, `None` otherwise.
    fn find_pathway(
        &self,
        graph: &ReactionGraph,
        start: &str,
        goal: &str,
        constraints: &SearchConstraints,
    ) -> Option<Pathway>;
}

/// Breadth-first search planner.
///
/// Finds the pathway with the fewest reactions regardless of their cost.
#[derive(Debug, Clone, Default)]
pub struct BfsPlanner;

impl PathwayPlanner for BfsPlanner {
    fn algorithm(&self) -> PathAlgorithm {
        PathAlgorithm::Bfs
    }

    fn find_pathway(
        &self,
        graph: &ReactionGraph,
        start: &str,
        goal: &str,
        constraints: &SearchConstraints,
    ) -> Option<Pathway> {
        find_pathway_bfs(graph, start, goal, constraints)
    }
}

/// Dijkstra planner minimising the summed reaction cost.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl PathwayPlanner for DijkstraPlanner {
    fn algorithm(&self) -> PathAlgorithm {
        PathAlgorithm::Dijkstra
    }

    fn find_pathway(
        &self,
        graph: &ReactionGraph,
        start: &str,
        goal: &str,
        constraints: &SearchConstraints,
    ) -> Option<Pathway> {
        find_pathway_dijkstra(graph, start, goal, constraints)
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &PathwayRequest) -> Box<dyn PathwayPlanner> {
    match request.algorithm {
        PathAlgorithm::Bfs => Box::new(BfsPlanner),
        PathAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
    }
}
