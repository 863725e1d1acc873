use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::path::{find_shortest_pathway, Pathway};

/// Minimum Jaro-Winkler similarity for a compound name to be offered as a
/// suggestion when a lookup misses.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Compound identifier. Compared by exact value; no case folding or trimming
/// happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Compound(String);

impl Compound {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Compound {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Compound {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Compound {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Compound {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for Compound {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Compound {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Owned reaction record, as produced by the input layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reaction {
    pub source: Compound,
    pub destination: Compound,
    pub cost: f64,
}

impl Reaction {
    pub fn new(source: impl Into<Compound>, destination: impl Into<Compound>, cost: f64) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            cost,
        }
    }

    /// Check that the reaction can be searched safely: both compound names
    /// are non-empty and the cost is a finite, non-negative number.
    pub fn validate(&self) -> Result<()> {
        validate_reaction(self.source.as_str(), self.destination.as_str(), self.cost)
    }
}

/// Borrowed view of a single edge stored in a [`ReactionGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReactionRef<'a> {
    pub source: &'a Compound,
    pub target: &'a Compound,
    pub cost: f64,
}

/// Edge within the reaction graph. Targets are dense node indices.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Edge {
    pub(crate) target: usize,
    pub(crate) cost: f64,
}

/// Directed, weighted adjacency-list graph of compounds and reactions.
///
/// Every compound that appears as either endpoint of an inserted reaction is
/// a node, so sink compounds resolve to an empty edge list. Compounds keep
/// their first-seen order and each compound keeps its edges in insertion
/// order; parallel edges are retained.
#[derive(Debug, Clone, Default)]
pub struct ReactionGraph {
    compounds: Vec<Compound>,
    index: HashMap<Compound, usize>,
    adjacency: Vec<Vec<Edge>>,
}

impl ReactionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the reaction `source -> destination` with the given cost.
    ///
    /// No validation is applied. Negative and NaN costs are stored but never
    /// traversed by the pathway search.
    pub fn add_reaction(&mut self, source: &str, destination: &str, cost: f64) {
        if cost.is_nan() || cost < 0.0 {
            warn!(
                "accepting reaction {} -> {} with unsearchable cost {}",
                source, destination, cost
            );
        }

        let source_index = self.intern(source);
        let target = self.intern(destination);
        self.adjacency[source_index].push(Edge { target, cost });

        debug!(
            "added reaction {} -> {} (cost {}); graph has {} compounds",
            source,
            destination,
            cost,
            self.compounds.len()
        );
    }

    /// Validating variant of [`ReactionGraph::add_reaction`]: rejects empty
    /// compound names and costs that are negative, NaN or infinite.
    pub fn try_add_reaction(&mut self, source: &str, destination: &str, cost: f64) -> Result<()> {
        validate_reaction(source, destination, cost)?;
        self.add_reaction(source, destination, cost);
        Ok(())
    }

    /// Whether the compound is a node of the graph.
    pub fn contains(&self, compound: &str) -> bool {
        self.index.contains_key(compound)
    }

    pub fn compound_count(&self) -> usize {
        self.compounds.len()
    }

    pub fn reaction_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }

    /// Compounds in the order they were first seen.
    pub fn compounds(&self) -> impl Iterator<Item = &Compound> + '_ {
        self.compounds.iter()
    }

    /// Outgoing reactions of a compound. Empty for sinks and unknown names.
    pub fn reactions_from<'a>(
        &'a self,
        compound: &str,
    ) -> impl Iterator<Item = ReactionRef<'a>> + 'a {
        self.node_index(compound)
            .into_iter()
            .flat_map(move |node| self.reactions_at(node))
    }

    /// Every reaction in the graph, grouped by source compound.
    pub fn reactions(&self) -> impl Iterator<Item = ReactionRef<'_>> + '_ {
        (0..self.compounds.len()).flat_map(move |node| self.reactions_at(node))
    }

    /// Find the minimum-cost pathway from `start` to `end`.
    ///
    /// Returns `None` when `start` or `end` is unknown or `end` is not
    /// reachable.
    pub fn find_shortest_pathway(&self, start: &str, end: &str) -> Option<Pathway> {
        find_shortest_pathway(self, start, end)
    }

    /// Boundary form of [`ReactionGraph::find_shortest_pathway`]: an empty
    /// pathway with infinite cost signals that no pathway exists.
    pub fn find_shortest_pathway_or_unreachable(
        &self,
        start: &str,
        end: &str,
    ) -> (Vec<Compound>, f64) {
        match self.find_shortest_pathway(start, end) {
            Some(pathway) => pathway.into_parts(),
            None => (Vec::new(), f64::INFINITY),
        }
    }

    /// Known compound names similar to `name`, best match first.
    pub fn fuzzy_compound_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &Compound)> = self
            .compounds
            .iter()
            .map(|compound| (strsim::jaro_winkler(name, compound.as_str()), compound))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, compound)| compound.to_string())
            .collect()
    }

    pub(crate) fn node_index(&self, compound: &str) -> Option<usize> {
        self.index.get(compound).copied()
    }

    pub(crate) fn compound_at(&self, node: usize) -> &Compound {
        &self.compounds[node]
    }

    pub(crate) fn edges(&self, node: usize) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn reactions_at(&self, node: usize) -> impl Iterator<Item = ReactionRef<'_>> + '_ {
        let source = &self.compounds[node];
        self.edges(node).iter().map(move |edge| ReactionRef {
            source,
            target: &self.compounds[edge.target],
            cost: edge.cost,
        })
    }

    fn intern(&mut self, compound: &str) -> usize {
        if let Some(node) = self.node_index(compound) {
            return node;
        }

        let node = self.compounds.len();
        let compound = Compound::from(compound);
        self.compounds.push(compound.clone());
        self.index.insert(compound, node);
        self.adjacency.push(Vec::new());
        node
    }
}

impl Extend<Reaction> for ReactionGraph {
    fn extend<T: IntoIterator<Item = Reaction>>(&mut self, iter: T) {
        for reaction in iter {
            self.add_reaction(
                reaction.source.as_str(),
                reaction.destination.as_str(),
                reaction.cost,
            );
        }
    }
}

impl FromIterator<Reaction> for ReactionGraph {
    fn from_iter<T: IntoIterator<Item = Reaction>>(iter: T) -> Self {
        let mut graph = ReactionGraph::new();
        graph.extend(iter);
        graph
    }
}

fn validate_reaction(source: &str, destination: &str, cost: f64) -> Result<()> {
    let reason = if source.is_empty() {
        Some("source compound is empty".to_string())
    } else if destination.is_empty() {
        Some("destination compound is empty".to_string())
    } else if !cost.is_finite() {
        Some(format!("cost {} is not a finite number", cost))
    } else if cost < 0.0 {
        Some(format!("cost {} is negative", cost))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidReaction {
            source_compound: source.to_string(),
            destination: destination.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_reuses_existing_nodes() {
        let mut graph = ReactionGraph::new();
        graph.add_reaction("A", "B", 1.0);
        graph.add_reaction("B", "A", 2.0);
        graph.add_reaction("A", "C", 3.0);

        assert_eq!(graph.compound_count(), 3);
        assert_eq!(graph.node_index("A"), Some(0));
        assert_eq!(graph.node_index("B"), Some(1));
        assert_eq!(graph.node_index("C"), Some(2));
        assert_eq!(graph.edges(0).len(), 2);
        assert!(graph.edges(2).is_empty());
    }

    #[test]
    fn edges_of_out_of_range_node_are_empty() {
        let graph = ReactionGraph::new();
        assert!(graph.edges(7).is_empty());
    }

    #[test]
    fn validation_rejects_bad_costs_and_names() {
        assert!(validate_reaction("A", "B", 0.0).is_ok());
        assert!(validate_reaction("A", "B", -1.0).is_err());
        assert!(validate_reaction("A", "B", f64::NAN).is_err());
        assert!(validate_reaction("A", "B", f64::INFINITY).is_err());
        assert!(validate_reaction("", "B", 1.0).is_err());
        assert!(validate_reaction("A", "", 1.0).is_err());
    }

    #[test]
    fn compound_compares_with_str() {
        let compound = Compound::from("Ethanol");
        assert_eq!(compound, "Ethanol");
        assert_ne!(compound, "ethanol");
        assert_eq!(compound.to_string(), "Ethanol");
    }
}
