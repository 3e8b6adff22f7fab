//! Markov-chain event simulation engine.
//!
//! Loads a weighted transition graph of named event types from a JSON
//! specification, then drives runs through it: weighted-random steps from
//! `root` until a terminal event or a step limit, with domain logic
//! injected through a three-hook sim kit.

pub mod agent;
pub mod data;
pub mod events;
pub mod kit;
pub mod loader;
pub mod sims;

// Re-exports for binaries and tools.
pub use agent::{Agent, RunOutcome, RunReport};
pub use data::DataBag;
pub use events::{EventGraph, EventType, NodeId, TOTAL_WEIGHT};
pub use kit::{FnKit, SilentKit, SimKit};
pub use loader::{load_graph, parse_graph, LoadError};
pub use sims::{LifeSim, MultiplicationSim};
