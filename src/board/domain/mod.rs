//! Domain model for the kanban board.
//!
//! Tasks live in exactly one of three columns owned by a [`Board`]. The board
//! keeps names unique and mediates every mutation that spans columns, while
//! infrastructure concerns such as locking stay outside this module.

mod board;
mod column;
mod error;
mod ids;
mod status;
mod task;

pub use board::Board;
pub use column::Column;
pub use error::{BoardDomainError, BoardResult, ParseTaskStatusError};
pub use ids::{AssigneeName, TaskId, TaskName};
pub use status::TaskStatus;
pub use task::{Task, TaskRef};
