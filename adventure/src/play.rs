//! Console loop for the adventure.

use std::io::{BufRead, Write};

use anyhow::Result;
use console_io::Console;
use tracing::{debug, info};

use crate::config::AdventureConfig;
use crate::core::session::{Session, Status};
use crate::core::transitions::{resolve, scene};

const RULE: &str = "--------------------------------------";
const BANNER: &str = "======================================";
const RETRY: &str = "Invalid input. Please enter a number: ";

/// Play one game to completion and return the final session.
pub fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &AdventureConfig,
) -> Result<Session> {
    introduce(console)?;

    let mut session = Session::new(config.starting_health);
    while !session.is_over() {
        console.say(format!("\n{RULE}\n{}\n{RULE}", session.status_line()))?;

        let scene = scene(&session);
        for line in scene.description {
            console.say(line)?;
        }
        let choice = match scene.menu {
            Some(menu) => {
                for option in menu.options {
                    console.say(option)?;
                }
                console.prompt(menu.ask)?;
                Some(console.read_until_valid::<i32>(RETRY)?)
            }
            None => None,
        };

        let from = session.room;
        for line in resolve(&mut session, choice) {
            console.say(line)?;
        }
        debug!(
            from = from.as_str(),
            to = session.room.as_str(),
            ?choice,
            health = session.health,
            score = session.score,
            "room resolved"
        );
    }

    match session.status {
        Status::Won => info!(score = session.score, "adventure won"),
        Status::Perished => info!(score = session.score, "adventure lost"),
        Status::Playing => {}
    }
    console.say(format!("\nFinal Score: {}", session.score))?;
    console.say("Thank you for playing!")?;
    Ok(session)
}

fn introduce<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.say(BANNER)?;
    console.say(" Welcome to the Rust Adventure Game!")?;
    console.say(BANNER)?;
    console.say("Your goal is to find the hidden treasure.")?;
    console.say("Navigate through the rooms and make wise choices.")?;
    console.say("Good luck!")
}
