//! Console menu loop for the registry.

use std::io::{BufRead, Write};

use anyhow::Result;
use console_io::Console;
use tracing::{debug, info, warn};

use crate::config::RegistryConfig;
use crate::core::menu::{MENU_LINES, MenuChoice};
use crate::core::record::{Score, StudentRecord};
use crate::core::registry::Registry;
use crate::report::table;

const BANNER: &str = "==========================================";
const CLEAR: &str = "\x1b[2J\x1b[H";

/// Run the menu until Exit and return the registry as it stood.
pub fn run_registry<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &RegistryConfig,
) -> Result<Registry> {
    let mut registry = Registry::new(config.capacity);
    loop {
        draw_menu(console, config)?;
        console.prompt("Enter your choice: ")?;
        let selected: i32 = console.read_until_valid("Invalid input. Please enter a number: ")?;

        let choice = MenuChoice::from(selected);
        match choice {
            MenuChoice::Add => add_student(console, &mut registry, config)?,
            MenuChoice::List => list_students(console, &registry)?,
            MenuChoice::Average => report_average(console, &registry)?,
            MenuChoice::Exit => console.say("Exiting the program. Goodbye!")?,
            MenuChoice::Unknown(value) => {
                debug!(value, "unknown menu option");
                console.say("Invalid choice. Please enter a number between 1 and 4.")?;
            }
        }

        console.prompt("\nPress Enter to continue...")?;
        console.pause()?;
        if choice == MenuChoice::Exit {
            info!(records = registry.len(), "registry closed");
            return Ok(registry);
        }
    }
}

fn draw_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &RegistryConfig,
) -> Result<()> {
    if config.clear_screen {
        console.prompt(CLEAR)?;
    }
    console.say(BANNER)?;
    console.say("   Student Grade Management System")?;
    console.say(BANNER)?;
    for line in MENU_LINES {
        console.say(line)?;
    }
    console.say("------------------------------------------")
}

fn add_student<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
    config: &RegistryConfig,
) -> Result<()> {
    if registry.is_full() {
        warn!(capacity = registry.capacity(), "registry full, add rejected");
        return console.say("Error: Student database is full. Cannot add more students.");
    }

    console.say("\n--- Add New Student ---")?;

    console.prompt("Enter Student ID: ")?;
    let id: i32 = console.read_until_valid("Invalid ID. Please enter a number: ")?;

    console.prompt("Enter Student Name: ")?;
    let name = console.read_text(config.max_name_chars())?;

    console.prompt("Enter Student Score (0-100): ")?;
    let score: f64 = console.read_until_accepted(
        "Invalid score. Please enter a number between 0 and 100: ",
        |value| Score::new(*value).is_ok(),
    )?;

    registry.add(StudentRecord {
        id,
        name,
        score: Score::new(score)?,
    })?;
    debug!(id, score, count = registry.len(), "student added");
    console.say("\nStudent added successfully!")
}

fn list_students<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &Registry,
) -> Result<()> {
    console.say("\n--- List of All Students ---")?;
    if registry.is_empty() {
        return console.say("No students in the database.");
    }
    for line in table(registry.records()) {
        console.say(line)?;
    }
    Ok(())
}

fn report_average<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &Registry,
) -> Result<()> {
    console.say("\n--- Average Score Calculation ---")?;
    match registry.average() {
        Some(average) => console.say(format!(
            "The average score for {} student(s) is: {average:.2}",
            registry.len()
        )),
        None => console.say("Cannot calculate average. No students in the database."),
    }
}
