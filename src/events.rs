//! Event-type nodes and the transition graph.
//!
//! An `EventGraph` is an arena of named event types connected by weighted
//! transitions. Nodes reference each other by stable `NodeId` index, so
//! cyclic chains (a Markov chain naturally revisits states) need no shared
//! ownership. The graph is built once by the loader and read-only afterward,
//! which makes it safe to share across any number of independent runs.

use std::collections::HashMap;

use rand::Rng;

/// Non-terminal suffix weights must sum to exactly this value.
pub const TOTAL_WEIGHT: u32 = 100;

/// Stable index of an event type within its graph's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// One kind of event that can occur during a simulation.
///
/// Holds a display description and the weighted list of suffix events that
/// can follow it. An event type with no suffixes is terminal: reaching it
/// ends the run.
#[derive(Clone, Debug)]
pub struct EventType {
    /// Unique name, also the key in the graph's name index.
    pub name: String,
    /// Display text shown by hook implementations.
    pub description: String,
    /// Weighted successors, fixed after load.
    suffixes: Vec<(NodeId, u32)>,
}

impl EventType {
    pub(crate) fn new(name: String, description: String) -> Self {
        Self {
            name,
            description,
            suffixes: Vec::new(),
        }
    }

    pub(crate) fn push_suffix(&mut self, id: NodeId, weight: u32) {
        self.suffixes.push((id, weight));
    }

    /// The weighted suffix list.
    pub fn suffixes(&self) -> &[(NodeId, u32)] {
        &self.suffixes
    }

    /// Whether this event type ends the run when reached.
    pub fn is_terminal(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Sum of all suffix weights (0 for terminal nodes, 100 otherwise).
    pub fn total_weight(&self) -> u32 {
        self.suffixes.iter().map(|&(_, w)| w).sum()
    }

    /// Choose the next event type using the suffix weights.
    ///
    /// Draws a uniform value in `[0, 100)` and picks the suffix whose
    /// cumulative weight interval contains it, so a suffix with weight `w`
    /// is chosen with probability `w / 100`. Returns `None` for a terminal
    /// node. The random source is injected so runs are reproducible.
    pub fn step(&self, rng: &mut impl Rng) -> Option<NodeId> {
        if self.suffixes.is_empty() {
            return None;
        }
        let mut roll = rng.gen_range(0..TOTAL_WEIGHT);
        for &(next, weight) in &self.suffixes {
            if roll < weight {
                return Some(next);
            }
            roll -= weight;
        }
        // Weights sum to TOTAL_WEIGHT at load time, so the loop covers
        // every possible roll; fall back to the last suffix.
        self.suffixes.last().map(|&(next, _)| next)
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} suffix{})",
            self.name,
            self.suffixes.len(),
            if self.suffixes.len() == 1 { "" } else { "es" },
        )
    }
}

/// A fully linked, validated transition graph.
///
/// Produced once by the loader; immutable afterward. Always contains an
/// entry named `root`, the entry point of every run.
#[derive(Clone, Debug)]
pub struct EventGraph {
    nodes: Vec<EventType>,
    by_name: HashMap<String, NodeId>,
    root: NodeId,
}

impl EventGraph {
    pub(crate) fn new(nodes: Vec<EventType>, by_name: HashMap<String, NodeId>, root: NodeId) -> Self {
        Self {
            nodes,
            by_name,
            root,
        }
    }

    /// The designated entry point (existence is guaranteed by the loader).
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up an event type by arena index.
    pub fn get(&self, id: NodeId) -> &EventType {
        &self.nodes[id.0]
    }

    /// Look up an event type's index by name.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Number of event types in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all event types in arena order.
    pub fn iter(&self) -> impl Iterator<Item = &EventType> {
        self.nodes.iter()
    }
}
