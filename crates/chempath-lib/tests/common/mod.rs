#![allow(dead_code)]

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use chempath_lib::{read_reactions, ReactionGraph};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load the checked-in synthesis network.
pub fn fixture_graph() -> ReactionGraph {
    let path = fixtures_dir().join("reactions.txt");
    let file = File::open(&path).expect("fixture reactions.txt present");
    let load = read_reactions(BufReader::new(file)).expect("fixture reads");
    assert!(load.rejected.is_empty(), "fixture has no malformed lines");
    load.graph
}

/// Build a graph from `(source, destination, cost)` triples.
pub fn graph_from(edges: &[(&str, &str, f64)]) -> ReactionGraph {
    let mut graph = ReactionGraph::new();
    for &(source, destination, cost) in edges {
        graph.add_reaction(source, destination, cost);
    }
    graph
}

/// Sum of the cheapest reaction for each consecutive pair of compounds, or
/// `None` when some hop has no reaction.
pub fn pathway_cost(graph: &ReactionGraph, steps: &[chempath_lib::Compound]) -> Option<f64> {
    let mut total = 0.0;
    for hop in steps.windows(2) {
        let cheapest = graph
            .reactions_from(hop[0].as_str())
            .filter(|reaction| reaction.target == &hop[1])
            .map(|reaction| reaction.cost)
            .fold(f64::INFINITY, f64::min);
        if cheapest == f64::INFINITY {
            return None;
        }
        total += cheapest;
    }
    Some(total)
}
