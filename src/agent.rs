//! Run driver: executes one simulation over an event graph.
//!
//! An `Agent` walks the graph from `root`, invoking the kit's hooks at the
//! contract points and logging every visited event name, until a terminal
//! event is reached or the step limit runs out. The graph is borrowed
//! read-only, so any number of agents can share one graph; each agent owns
//! its data bag, log, and random-source stream independently.

use rand::Rng;

use crate::data::DataBag;
use crate::events::{EventGraph, NodeId};
use crate::kit::SimKit;

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// A terminal event type (no suffixes) was reached.
    Ended,
    /// The step limit was consumed before reaching a terminal event.
    LimitExhausted,
}

/// Read-only view of a finished run, handed to the end hook.
#[derive(Clone, Copy, Debug)]
pub struct RunReport<'a> {
    /// The agent's name.
    pub name: &'a str,
    /// Names of every visited event, in visit order.
    pub log: &'a [String],
    /// How the run stopped.
    pub outcome: RunOutcome,
}

impl RunReport<'_> {
    /// Number of events visited.
    pub fn steps(&self) -> usize {
        self.log.len()
    }
}

/// Supervises one simulation run over a shared graph.
pub struct Agent<'g> {
    name: String,
    graph: &'g EventGraph,
    data: DataBag,
    log: Vec<String>,
}

impl<'g> Agent<'g> {
    /// Create an agent bound to a graph. Nothing runs until `run` is called.
    pub fn new(name: impl Into<String>, graph: &'g EventGraph) -> Self {
        Self {
            name: name.into(),
            graph,
            data: DataBag::new(),
            log: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of every event visited by the most recent run.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// State accumulated by the most recent run's hooks.
    pub fn data(&self) -> &DataBag {
        &self.data
    }

    /// Consume the agent, handing the final data bag to the caller.
    pub fn into_data(self) -> DataBag {
        self.data
    }

    /// Run the simulation from `root` until a terminal event is reached or
    /// `limit` events have been visited.
    ///
    /// Hook contract: `start` once before the loop, `update` once per
    /// visited event, `end` exactly once after the loop, whichever way it
    /// stopped. A `limit` of 0 visits nothing: `start` and `end` still fire,
    /// the log stays empty. Each call starts from a fresh data bag and log.
    pub fn run<K>(&mut self, kit: &K, limit: usize, rng: &mut impl Rng) -> RunOutcome
    where
        K: SimKit + ?Sized,
    {
        self.data = DataBag::new();
        self.log = Vec::with_capacity(limit.min(64));

        // Root existence is a load-time invariant of the graph, so the
        // entry point never fails mid-run.
        let mut current: Option<NodeId> = Some(self.graph.root());

        kit.start(&mut self.data);

        let mut outcome = RunOutcome::LimitExhausted;
        for _ in 0..limit {
            let id = match current {
                Some(id) => id,
                None => {
                    outcome = RunOutcome::Ended;
                    break;
                }
            };
            let event = self.graph.get(id);
            kit.update(&mut self.data, event);
            self.log.push(event.name.clone());
            current = event.step(rng);
        }

        let report = RunReport {
            name: &self.name,
            log: &self.log,
            outcome,
        };
        kit.end(&report, &mut self.data);

        outcome
    }
}
