//! Store port guarding the shared board.

use crate::board::domain::Board;
use thiserror::Error;

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Serialization boundary around the single shared [`Board`].
///
/// Implementations must run every `write` operation exclusively. `read`
/// operations may overlap with each other but never with a write.
pub trait BoardStore: Send + Sync {
    /// Runs a read-only operation against the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError`] when the board cannot be accessed.
    fn read<T>(&self, operation: impl FnOnce(&Board) -> T) -> BoardStoreResult<T>;

    /// Runs a mutating operation against the board.
    ///
    /// The operation completes atomically from the perspective of every
    /// other caller.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError`] when the board cannot be accessed.
    fn write<T>(&self, operation: impl FnOnce(&mut Board) -> T) -> BoardStoreResult<T>;
}

/// Errors returned by board store implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardStoreError {
    /// The board could not be accessed, for example after a writer panicked.
    #[error("board store unavailable: {0}")]
    Unavailable(String),
}
