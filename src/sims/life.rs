//! Life kit: simulates a person's life as a chain of daily events.
//!
//! Tracks days lived, sicknesses, sleepless nights, and crying fits; asks
//! the user for a name when the chain reaches the naming event. Pairs with
//! `specs/life.json`. The stdin prompt blocks the run until the user
//! answers, which the engine permits and ignores.

use std::io::{self, Write};

use crate::agent::RunReport;
use crate::data::DataBag;
use crate::events::EventType;
use crate::kit::SimKit;

/// Hook bundle for the life chain.
pub struct LifeSim;

/// Prompt on stdout and read one trimmed line from stdin.
/// Falls back to a default when input is closed or empty.
fn prompt_name() -> String {
    print!("Enter a name: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(_) if !line.trim().is_empty() => line.trim().to_string(),
        _ => "Tom".to_string(),
    }
}

impl SimKit for LifeSim {
    fn start(&self, data: &mut DataBag) {
        data.set("days_alive", 0);
        data.set("times_cried", 0);
        data.set("days_sick", 0);
        data.set("sleepless_nights", 0);
    }

    fn update(&self, data: &mut DataBag, event: &EventType) {
        match event.name.as_str() {
            "get_name" => {
                let name = prompt_name();
                data.set("name", name);
            }
            "name_is_boy" => data.set("sex", "male"),
            "name_is_girl" => data.set("sex", "female"),
            "name_is_american" => data.set("nationality", "american"),
            "name_is_canadian" => data.set("nationality", "canadian"),
            "day_passes" => data.add("days_alive", 1),
            "name_gets_sick" => data.add("days_sick", 1),
            "name_can't_sleep" => data.add("sleepless_nights", 1),
            "name_cries" => data.add("times_cried", 1),
            _ => {}
        }

        println!("{}", event.description);
    }

    fn end(&self, run: &RunReport<'_>, data: &mut DataBag) {
        let name = data.text("name").unwrap_or("the unnamed").to_string();

        println!("\n\nSUMMARY:");
        println!("Agent {} simulated the life of {}.", run.name, name);
        println!("Here are {}'s stats:", name);
        for (field, value) in data.iter() {
            println!(" {}: {}", field, value);
        }
    }
}
