//! Closed vocabulary of board commands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board operation requested by a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KanbotCommand {
    /// Add a task to the backlog.
    Add,
    /// Empty the whole board.
    Clear,
    /// Move a task from in progress to complete.
    Complete,
    /// List the available commands.
    Help,
    /// Remove a task from the board.
    Remove,
    /// Move a task from the backlog to in progress.
    Start,
    /// Add or remove an assignee.
    Assign,
    /// Add or remove a dependency.
    Depend,
}

impl KanbotCommand {
    /// Every command, in help-listing order.
    pub const ALL: [Self; 8] = [
        Self::Add,
        Self::Remove,
        Self::Clear,
        Self::Start,
        Self::Complete,
        Self::Assign,
        Self::Depend,
        Self::Help,
    ];

    /// Returns the keyword users type for the command.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Clear => "clear",
            Self::Complete => "complete",
            Self::Help => "help",
            Self::Remove => "remove",
            Self::Start => "start",
            Self::Assign => "assign",
            Self::Depend => "depend",
        }
    }

    /// Maps a keyword to a command, case-insensitively.
    ///
    /// Unrecognized keywords map to [`KanbotCommand::Help`].
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "add" => Self::Add,
            "clear" => Self::Clear,
            "complete" => Self::Complete,
            "remove" => Self::Remove,
            "start" => Self::Start,
            "assign" => Self::Assign,
            "depend" => Self::Depend,
            _ => Self::Help,
        }
    }
}

impl fmt::Display for KanbotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
