//! Player state for one run of the adventure.

use crate::core::room::Room;

pub const DEFAULT_STARTING_HEALTH: i32 = 100;

/// Whether the game loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Perished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub health: i32,
    pub score: i32,
    pub room: Room,
    pub has_sword: bool,
    pub has_key: bool,
    pub status: Status,
}

impl Session {
    pub fn new(starting_health: i32) -> Self {
        Self {
            health: starting_health,
            score: 0,
            room: Room::Start,
            has_sword: false,
            has_key: false,
            status: Status::Playing,
        }
    }

    /// True once the game has reached `Won` or `Perished`.
    pub fn is_over(&self) -> bool {
        self.status != Status::Playing
    }

    /// `Health: h | Score: s | ` plus the held items.
    pub fn status_line(&self) -> String {
        let mut line = format!("Health: {} | Score: {} | ", self.health, self.score);
        if self.has_sword {
            line.push_str("Inventory: Sword ");
        }
        if self.has_key {
            line.push_str("Key ");
        }
        line
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_HEALTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_in_start_room() {
        let session = Session::default();
        assert_eq!(session.health, 100);
        assert_eq!(session.score, 0);
        assert_eq!(session.room, Room::Start);
        assert!(!session.is_over());
    }

    #[test]
    fn status_line_lists_inventory() {
        let mut session = Session::default();
        assert_eq!(session.status_line(), "Health: 100 | Score: 0 | ");
        session.has_sword = true;
        session.has_key = true;
        session.score = 70;
        assert_eq!(
            session.status_line(),
            "Health: 100 | Score: 70 | Inventory: Sword Key "
        );
    }
}
