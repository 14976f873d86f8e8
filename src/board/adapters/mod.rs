//! Adapters implementing the board ports.
//!
//! - [`memory::InMemoryBoardStore`]: lock-guarded board held in memory

pub mod memory;
