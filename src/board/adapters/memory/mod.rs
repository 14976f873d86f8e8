//! In-memory adapter implementations.
//!
//! These adapters keep the board in process memory; nothing survives a
//! restart.

mod store;

pub use store::InMemoryBoardStore;
