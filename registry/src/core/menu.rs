/// Main-menu selection keyed by the number the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Average,
    Exit,
    Unknown(i32),
}

impl From<i32> for MenuChoice {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Add,
            2 => Self::List,
            3 => Self::Average,
            4 => Self::Exit,
            other => Self::Unknown(other),
        }
    }
}

pub const MENU_LINES: [&str; 4] = [
    "1. Add a New Student",
    "2. Display All Students",
    "3. Calculate Average Score",
    "4. Exit",
];
