//! Command dispatch and reply rendering.

mod dispatcher;
mod render;

pub use dispatcher::{CommandDispatcher, DispatchError};
pub use render::{board_reply, column_heading, help_reply, render_column, usage};
