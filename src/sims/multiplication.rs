//! Multiplication kit: multiplies 10 by an amount decided by the chain.
//!
//! After a 50/50 opening between adding 10 or 20, each following event has a
//! 45% chance to add 10, 45% to add 20, and 10% to stop. A bare-bones kit
//! meant to show what a minimal simulation looks like; pairs with
//! `specs/multiplication.json`.

use crate::agent::RunReport;
use crate::data::DataBag;
use crate::events::EventType;
use crate::kit::SimKit;

/// Hook bundle for the multiplication chain.
pub struct MultiplicationSim;

impl SimKit for MultiplicationSim {
    fn start(&self, data: &mut DataBag) {
        data.set("sum", 0);
    }

    fn update(&self, data: &mut DataBag, event: &EventType) {
        match event.name.as_str() {
            "add_10" => data.add("sum", 10),
            "add_20" => data.add("sum", 20),
            _ => {}
        }

        println!("{}", event.description);
    }

    fn end(&self, _run: &RunReport<'_>, data: &mut DataBag) {
        println!("\n\nSUMMARY:\n");
        println!(
            "In total, 10 was multiplied {} times by the simulation",
            data.counter("sum") / 10,
        );
    }
}
