//! Room handlers.
//!
//! [`scene`] describes what the player sees in the current room and whether a
//! choice is asked for. [`resolve`] applies exactly one transition for that
//! room and then runs the health check that ends the game at zero.

use crate::core::room::Room;
use crate::core::session::{Session, Status};

pub const INVALID_CHOICE_PENALTY: i32 = 5;
pub const SWORD_SCORE: i32 = 20;
pub const GOBLIN_SCORE: i32 = 50;
pub const TREASURE_SCORE: i32 = 100;
pub const FLEE_DAMAGE: i32 = 30;
pub const UNARMED_DAMAGE: i32 = 50;
pub const TRAP_DAMAGE: i32 = 40;

/// Numbered options shown before the player is asked to choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub options: &'static [&'static str],
    pub ask: &'static str,
}

/// What the player sees on entering a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    pub description: &'static [&'static str],
    /// `None` for forced transitions; the room resolves without input.
    pub menu: Option<Menu>,
}

const ARMORY: &str = "You are in an armory. Rusted weapons line the walls.";
const FOREST: &str = "You are in a dark forest. You hear strange noises.";
const GOBLIN: &str = "A goblin jumps out from behind a tree!";
const TREASURE: &str = "You are in a magnificent room filled with gold!";

pub fn scene(session: &Session) -> Scene {
    match session.room {
        Room::Start => Scene {
            description: &[
                "You are in a dimly lit starting chamber. The air is cold.",
                "There are two doors in front of you.",
            ],
            menu: Some(Menu {
                options: &[
                    "1. Go to the door on the LEFT.",
                    "2. Go to the door on the RIGHT.",
                ],
                ask: "Choose your path (1 or 2): ",
            }),
        },
        Room::Armory if !session.has_sword => Scene {
            description: &[ARMORY, "You see a sturdy SWORD lying on a table."],
            menu: Some(Menu {
                options: &[
                    "1. Take the SWORD.",
                    "2. Leave the armory and go back to the start.",
                ],
                ask: "Choose your action (1 or 2): ",
            }),
        },
        Room::Armory => Scene {
            description: &[ARMORY, "There is nothing else of interest here."],
            menu: Some(Menu {
                options: &["1. Go back to the starting chamber."],
                ask: "Choose your action (1): ",
            }),
        },
        Room::Forest if session.has_sword => Scene {
            description: &[FOREST, GOBLIN, "You have a sword to defend yourself!"],
            menu: Some(Menu {
                options: &["1. Fight the goblin.", "2. Try to flee."],
                ask: "Choose your action (1 or 2): ",
            }),
        },
        Room::Forest => Scene {
            description: &[FOREST, GOBLIN],
            menu: None,
        },
        Room::Treasure if session.has_key => Scene {
            description: &[TREASURE],
            menu: None,
        },
        Room::Treasure => Scene {
            description: &[
                TREASURE,
                "You see a large treasure chest, but it is locked.",
                "You need a key to open it.",
            ],
            menu: Some(Menu {
                options: &["1. Look for another way out."],
                ask: "Choose your action (1): ",
            }),
        },
        Room::Trap => Scene {
            description: &["You've fallen into a pit trap! It was a mistake to come here."],
            menu: None,
        },
    }
}

/// Apply the current room's transition and return the narration.
///
/// `choice` is the player's answer to the scene's menu; it is ignored by
/// rooms without one. A menu room given `None` treats it as an invalid
/// choice.
pub fn resolve(session: &mut Session, choice: Option<i32>) -> Vec<&'static str> {
    let mut narration = match session.room {
        Room::Start => start(session, choice),
        Room::Armory => armory(session, choice),
        Room::Forest => forest(session, choice),
        Room::Treasure => treasure(session),
        Room::Trap => trap(session),
    };

    if session.health <= 0 && session.status == Status::Playing {
        session.status = Status::Perished;
        narration.push("\nYour health has dropped to zero. You have perished.");
        narration.push("GAME OVER!");
    }
    narration
}

fn start(session: &mut Session, choice: Option<i32>) -> Vec<&'static str> {
    match choice {
        Some(1) => {
            session.room = Room::Armory;
            vec!["\nYou chose the left door and enter an old armory."]
        }
        Some(2) => {
            session.room = Room::Forest;
            vec!["\nYou chose the right door and step into a dark forest."]
        }
        _ => {
            session.health -= INVALID_CHOICE_PENALTY;
            vec!["Invalid choice. You hesitate and waste time."]
        }
    }
}

fn armory(session: &mut Session, choice: Option<i32>) -> Vec<&'static str> {
    if session.has_sword {
        session.room = Room::Start;
        return Vec::new();
    }
    match choice {
        Some(1) => {
            session.has_sword = true;
            session.score += SWORD_SCORE;
            vec!["\nYou pick up the sword. It feels heavy but reliable."]
        }
        Some(2) => {
            session.room = Room::Start;
            vec!["\nYou decide to leave the armory."]
        }
        _ => {
            session.health -= INVALID_CHOICE_PENALTY;
            vec!["Invalid choice. You stumble and lose some health."]
        }
    }
}

fn forest(session: &mut Session, choice: Option<i32>) -> Vec<&'static str> {
    if !session.has_sword {
        session.health -= UNARMED_DAMAGE;
        session.room = Room::Start;
        return vec![
            "You are unarmed! The goblin attacks you.",
            "You take a serious blow before managing to escape.",
        ];
    }
    if choice == Some(1) {
        session.score += GOBLIN_SCORE;
        session.has_key = true;
        session.room = Room::Treasure;
        vec![
            "\nYou fight bravely and defeat the goblin!",
            "Behind the goblin, you find a hidden door and a key.",
        ]
    } else {
        session.health -= FLEE_DAMAGE;
        session.room = Room::Start;
        vec!["\nYou try to flee but the goblin strikes you as you run."]
    }
}

fn treasure(session: &mut Session) -> Vec<&'static str> {
    if session.has_key {
        session.score += TREASURE_SCORE;
        session.status = Status::Won;
        vec![
            "Your key fits the lock on a large treasure chest.",
            "You open it and find the legendary treasure!",
            "\nCONGRATULATIONS! YOU HAVE WON!",
        ]
    } else {
        session.room = Room::Trap;
        vec!["You find a hidden passage that leads to a trap!"]
    }
}

fn trap(session: &mut Session) -> Vec<&'static str> {
    session.health -= TRAP_DAMAGE;
    session.room = Room::Start;
    vec![
        "You manage to climb out, but you are badly injured.",
        "You find yourself back in the starting chamber.",
    ]
}
