use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::graph::{Compound, ReactionGraph};
use crate::planning::{PathAlgorithm, PathwayPlan};

/// Presentation style for turning a [`PathwaySummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathwayRenderMode {
    /// Header line plus one numbered line per compound.
    PlainText,
    /// `Shortest Reaction Pathway: A -> B -> C` followed by the total cost.
    Arrow,
}

/// Step taken along a planned pathway.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathwayStep {
    pub index: usize,
    pub compound: Compound,
}

/// Structured representation of a planned pathway that higher-level
/// consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathwaySummary {
    pub algorithm: PathAlgorithm,
    pub start: Compound,
    pub goal: Compound,
    pub reactions: usize,
    pub total_cost: f64,
    pub steps: Vec<PathwayStep>,
}

impl PathwaySummary {
    /// Convert a [`PathwayPlan`] into a structured summary.
    pub fn from_plan(plan: &PathwayPlan) -> Self {
        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, compound)| PathwayStep {
                index,
                compound: compound.clone(),
            })
            .collect();

        Self {
            algorithm: plan.algorithm,
            start: plan.start.clone(),
            goal: plan.goal.clone(),
            reactions: plan.step_count(),
            total_cost: plan.total_cost,
            steps,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: PathwayRenderMode) -> String {
        match mode {
            PathwayRenderMode::PlainText => self.render_plain(),
            PathwayRenderMode::Arrow => self.render_arrow(),
        }
    }

    /// Pretty-printed JSON form of the summary.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Pathway: {} -> {} ({} reactions, cost {}, algorithm: {})",
            self.start, self.goal, self.reactions, self.total_cost, self.algorithm
        );
        for step in &self.steps {
            let _ = writeln!(buffer, "{:>3}: {}", step.index, step.compound);
        }
        buffer
    }

    fn render_arrow(&self) -> String {
        let compounds: Vec<&Compound> = self.steps.iter().map(|step| &step.compound).collect();
        render_pathway_arrow(&compounds, self.total_cost)
    }
}

/// Two-line pathway rendering used by the interactive prompt.
pub fn render_pathway_arrow<C: AsRef<str>>(steps: &[C], total_cost: f64) -> String {
    let joined = steps
        .iter()
        .map(|step| step.as_ref())
        .collect::<Vec<&str>>()
        .join(" -> ");

    let mut buffer = String::new();
    let _ = writeln!(buffer, "Shortest Reaction Pathway: {joined}");
    let _ = writeln!(buffer, "Total Reaction Cost: {total_cost}");
    buffer
}

/// ASCII listing of every reaction in the graph, one `A --[cost]--> B` per line.
pub fn render_graph_listing(graph: &ReactionGraph) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "Chemical Reaction Network Graph:");
    for reaction in graph.reactions() {
        let _ = writeln!(
            buffer,
            "{} --[{}]--> {}",
            reaction.source, reaction.cost, reaction.target
        );
    }
    buffer
}
