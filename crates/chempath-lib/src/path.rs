use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::graph::{Compound, Edge, ReactionGraph};

/// Minimum-cost (or fewest-step) sequence of compounds between two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pathway {
    /// Compounds from start to end, both inclusive.
    pub steps: Vec<Compound>,
    /// Summed reaction cost along `steps`.
    pub total_cost: f64,
}

impl Pathway {
    /// Number of reactions in the pathway.
    pub fn reaction_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn into_parts(self) -> (Vec<Compound>, f64) {
        (self.steps, self.total_cost)
    }
}

/// Constraints applied during pathway search.
#[derive(Debug, Default, Clone)]
pub struct PathConstraints {
    /// Compounds that must not appear after the start of the pathway.
    pub avoided_compounds: HashSet<Compound>,
    /// Maximum cost allowed for any single reaction.
    pub max_reaction_cost: Option<f64>,
}

impl PathConstraints {
    fn allows(&self, graph: &ReactionGraph, edge: &Edge) -> bool {
        if !is_searchable_cost(edge.cost) {
            return false;
        }

        if let Some(limit) = self.max_reaction_cost {
            if edge.cost > limit {
                return false;
            }
        }

        if self.avoided_compounds.contains(graph.compound_at(edge.target)) {
            return false;
        }

        true
    }
}

/// Find the minimum-cost pathway between `start` and `end` without
/// additional constraints.
pub fn find_shortest_pathway(graph: &ReactionGraph, start: &str, end: &str) -> Option<Pathway> {
    let constraints = PathConstraints::default();
    find_pathway_dijkstra(graph, start, end, &constraints)
}

/// Run Dijkstra's algorithm to find the lowest-cost pathway that satisfies
/// the provided constraints.
pub fn find_pathway_dijkstra(
    graph: &ReactionGraph,
    start: &str,
    end: &str,
    constraints: &PathConstraints,
) -> Option<Pathway> {
    let start = graph.node_index(start)?;
    let goal = graph.node_index(end)?;

    let mut distances = vec![f64::INFINITY; graph.compound_count()];
    let mut parents: Vec<Option<usize>> = vec![None; graph.compound_count()];
    let mut queue = BinaryHeap::new();
    let mut settled = 0usize;

    distances[start] = 0.0;
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if entry.node == goal {
            break;
        }

        // Stale entry superseded by a later relaxation.
        if entry.cost.0 > distances[entry.node] {
            continue;
        }
        settled += 1;

        for edge in graph.edges(entry.node) {
            if !constraints.allows(graph, edge) {
                continue;
            }

            let next_cost = entry.cost.0 + edge.cost;
            if next_cost < distances[edge.target] {
                distances[edge.target] = next_cost;
                parents[edge.target] = Some(entry.node);
                queue.push(QueueEntry::new(edge.target, next_cost));
            }
        }
    }

    let total_cost = distances[goal];
    debug!(
        "dijkstra settled {} compounds searching {} -> {}",
        settled,
        graph.compound_at(start),
        graph.compound_at(goal)
    );

    if total_cost == f64::INFINITY {
        return None;
    }

    Some(Pathway {
        steps: to_compounds(graph, &reconstruct_path(&parents, start, goal)),
        total_cost,
    })
}

/// Run breadth-first search to find the pathway with the fewest reactions.
///
/// Reaction costs do not influence which pathway is chosen; the reported
/// total is the cheapest allowed parallel reaction for each hop.
pub fn find_pathway_bfs(
    graph: &ReactionGraph,
    start: &str,
    end: &str,
    constraints: &PathConstraints,
) -> Option<Pathway> {
    let start = graph.node_index(start)?;
    let goal = graph.node_index(end)?;

    if start == goal {
        return Some(Pathway {
            steps: vec![graph.compound_at(start).clone()],
            total_cost: 0.0,
        });
    }

    let mut visited = vec![false; graph.compound_count()];
    let mut parents: Vec<Option<usize>> = vec![None; graph.compound_count()];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for edge in graph.edges(current) {
            let next = edge.target;
            if visited[next] {
                continue;
            }
            if !constraints.allows(graph, edge) {
                continue;
            }

            visited[next] = true;
            parents[next] = Some(current);
            if next == goal {
                let nodes = reconstruct_path(&parents, start, goal);
                let total_cost: f64 = nodes
                    .windows(2)
                    .map(|hop| cheapest_reaction(graph, hop[0], hop[1], constraints))
                    .sum();
                return Some(Pathway {
                    steps: to_compounds(graph, &nodes),
                    total_cost,
                });
            }
            queue.push_back(next);
        }
    }

    None
}

fn is_searchable_cost(cost: f64) -> bool {
    cost >= 0.0
}

fn cheapest_reaction(
    graph: &ReactionGraph,
    from: usize,
    to: usize,
    constraints: &PathConstraints,
) -> f64 {
    graph
        .edges(from)
        .iter()
        .filter(|edge| edge.target == to && constraints.allows(graph, edge))
        .map(|edge| edge.cost)
        .fold(f64::INFINITY, f64::min)
}

fn reconstruct_path(parents: &[Option<usize>], start: usize, goal: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

fn to_compounds(graph: &ReactionGraph, nodes: &[usize]) -> Vec<Compound> {
    nodes
        .iter()
        .map(|&node| graph.compound_at(node).clone())
        .collect()
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: usize,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: usize, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
