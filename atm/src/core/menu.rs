/// Main-menu selection keyed by the number the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckBalance,
    Withdraw,
    Deposit,
    Exit,
    Unknown(i32),
}

impl From<i32> for MenuChoice {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::CheckBalance,
            2 => Self::Withdraw,
            3 => Self::Deposit,
            4 => Self::Exit,
            other => Self::Unknown(other),
        }
    }
}

pub const MENU_LINES: [&str; 4] = [
    "1. Check Account Balance",
    "2. Withdraw Cash",
    "3. Deposit Cash",
    "4. Exit",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_and_unknown_choices() {
        assert_eq!(MenuChoice::from(1), MenuChoice::CheckBalance);
        assert_eq!(MenuChoice::from(4), MenuChoice::Exit);
        assert_eq!(MenuChoice::from(0), MenuChoice::Unknown(0));
        assert_eq!(MenuChoice::from(-3), MenuChoice::Unknown(-3));
    }
}
