//! Command model: vocabulary, parsing, and replies.
//!
//! A command line reads `<signal> <keyword> <args...>`. Parsing maps the
//! keyword onto a closed [`KanbotCommand`] vocabulary; argument counts are
//! checked later by the typed accessors on [`KanbotRequest`].

mod arguments;
mod error;
mod kind;
mod parser;
mod reply;

pub use arguments::{AssignArguments, ChangeAction, DependArguments};
pub use error::CommandError;
pub use kind::KanbotCommand;
pub use parser::{KanbotRequest, tokenize};
pub use reply::{Reply, ReplyField, ReplyKind};
