//! Menu choices and selection parsing

use std::str::FromStr;
use thiserror::Error;

use crate::core::util::leading_integer;

/// The four menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Search,
    PrintAll,
    Histogram,
    Exit,
}

/// Menu entries in display order with their labels
pub const MENU: [(MenuChoice, &str); 4] = [
    (MenuChoice::Search, "Search item frequency"),
    (MenuChoice::PrintAll, "Print all item frequencies"),
    (MenuChoice::Histogram, "Print histogram"),
    (MenuChoice::Exit, "Exit"),
];

pub const MENU_TITLE: &str = "MENU";

impl MenuChoice {
    /// Number the user types to pick this entry
    pub fn number(self) -> i64 {
        MENU.iter()
            .position(|(choice, _)| *choice == self)
            .map(|idx| idx as i64 + 1)
            .unwrap_or_default()
    }

    pub fn from_number(n: i64) -> Option<Self> {
        let idx = usize::try_from(n.checked_sub(1)?).ok()?;
        MENU.get(idx).map(|(choice, _)| *choice)
    }
}

/// Rejected menu selection; the message is shown to the user as-is
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuInputError {
    #[error("Invalid input. Please enter a number between 1 and {}.", MENU.len())]
    NotANumber,

    #[error("Invalid choice. Please enter a number between 1 and {}.", MENU.len())]
    OutOfRange(i64),
}

impl FromStr for MenuChoice {
    type Err = MenuInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = leading_integer(s).ok_or(MenuInputError::NotANumber)?;
        MenuChoice::from_number(n).ok_or(MenuInputError::OutOfRange(n))
    }
}

/// Option lines for the menu box, e.g. `1. Search item frequency`
pub fn option_lines() -> Vec<String> {
    MENU.iter()
        .map(|(choice, label)| format!("{}. {}", choice.number(), label))
        .collect()
}
