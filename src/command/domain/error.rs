//! Error types for command tokenizing and argument extraction.

use super::KanbotCommand;
use thiserror::Error;

/// Errors raised while reading a command line or its arguments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Input was empty.
    #[error("command input cannot be empty")]
    EmptyInput,

    /// A quoted string was not terminated.
    #[error("unterminated quoted value in command")]
    UnterminatedQuotedValue,

    /// A discriminator argument did not match an expected literal.
    #[error(
        "unrecognized argument '{value}' at position {position} of '{command}': expected \"add\" or \"remove\""
    )]
    UnrecognizedArgument {
        /// Command being parsed.
        command: KanbotCommand,
        /// One-based position of the argument.
        position: usize,
        /// The argument text received.
        value: String,
    },

    /// The command received the wrong number of arguments.
    #[error("'{command}' expects {expected} argument(s), found {found}")]
    MalformedCommand {
        /// Command being parsed.
        command: KanbotCommand,
        /// Number of arguments the command takes.
        expected: usize,
        /// Number of arguments received.
        found: usize,
    },
}
