// Menu text and the bits of input parsing the console needs

use crate::error::{RecordsError, Result};

pub const MENU: &str = "\
Choose an operation:
1 - Add record
2 - Show all records
3 - Update record
4 - Delete record
5 - Exit";

/// What the user picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ShowAll,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Map a typed line to a choice. Surrounding whitespace is ignored,
    /// anything else that isn't 1-5 is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::ShowAll),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Parse a record id typed by the user
pub fn parse_id(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| RecordsError::InvalidId(input.to_string()))
}

/// Drop the line terminator that `read_line` leaves behind, nothing more
pub fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
