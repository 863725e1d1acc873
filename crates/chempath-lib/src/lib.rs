//! Chemical reaction pathway library entry points.
//!
//! This crate models a reaction network as a directed, weighted graph of
//! compounds and finds minimum-cost pathways between them. Higher-level
//! consumers (the CLI) should only depend on the items exported here instead
//! of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod input;
pub mod output;
pub mod path;
pub mod planning;

pub use error::{Error, Result};
pub use graph::{Compound, Reaction, ReactionGraph, ReactionRef};
pub use input::{parse_reaction_line, read_reactions, ReactionLoad, RejectedLine};
pub use output::{
    render_graph_listing, render_pathway_arrow, PathwayRenderMode, PathwayStep, PathwaySummary,
};
pub use path::{
    find_pathway_bfs, find_pathway_dijkstra, find_shortest_pathway, PathConstraints, Pathway,
};
pub use planning::{
    plan_pathway, PathAlgorithm, PathwayConstraints, PathwayPlan, PathwayPlanner, PathwayRequest,
};
