/// A node of the adventure map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Room {
    Start,
    Armory,
    Forest,
    Treasure,
    Trap,
}

impl Room {
    pub fn as_str(self) -> &'static str {
        match self {
            Room::Start => "start",
            Room::Armory => "armory",
            Room::Forest => "forest",
            Room::Treasure => "treasure",
            Room::Trap => "trap",
        }
    }
}
