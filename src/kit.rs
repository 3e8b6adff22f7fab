//! Sim kits: the hook bundle that carries a simulation's domain logic.
//!
//! The engine itself only walks the graph; everything a particular
//! simulation does — seeding state, reacting to events, printing text,
//! summarizing a run — lives in a `SimKit`. The bundle is fixed-shape
//! (all three hooks required) and stateless: hooks take `&self` and keep
//! their accumulated state in the run's `DataBag`.

use crate::agent::RunReport;
use crate::data::DataBag;
use crate::events::EventType;

/// The three domain-supplied callbacks invoked around a run.
pub trait SimKit {
    /// Called exactly once before the run loop; may pre-populate the bag.
    fn start(&self, data: &mut DataBag);

    /// Called exactly once per visited event type (including `root`), with
    /// the event just entered. Display and input are the kit's business,
    /// not the engine's.
    fn update(&self, data: &mut DataBag, event: &EventType);

    /// Called exactly once after the loop ends, for any termination reason.
    /// Receives read access to the run's identity and log plus the final
    /// bag; typically produces a summary.
    fn end(&self, run: &RunReport<'_>, data: &mut DataBag);
}

/// A kit backed by three closures — useful for tests and one-off scripts.
pub struct FnKit<S, U, E>
where
    S: Fn(&mut DataBag),
    U: Fn(&mut DataBag, &EventType),
    E: Fn(&RunReport<'_>, &mut DataBag),
{
    pub start: S,
    pub update: U,
    pub end: E,
}

impl<S, U, E> SimKit for FnKit<S, U, E>
where
    S: Fn(&mut DataBag),
    U: Fn(&mut DataBag, &EventType),
    E: Fn(&RunReport<'_>, &mut DataBag),
{
    fn start(&self, data: &mut DataBag) {
        (self.start)(data);
    }

    fn update(&self, data: &mut DataBag, event: &EventType) {
        (self.update)(data, event);
    }

    fn end(&self, run: &RunReport<'_>, data: &mut DataBag) {
        (self.end)(run, data);
    }
}

/// A kit that does nothing; runs with it produce only a log.
pub struct SilentKit;

impl SimKit for SilentKit {
    fn start(&self, _data: &mut DataBag) {}

    fn update(&self, _data: &mut DataBag, _event: &EventType) {}

    fn end(&self, _run: &RunReport<'_>, _data: &mut DataBag) {}
}
