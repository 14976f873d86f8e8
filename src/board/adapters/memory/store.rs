//! In-memory board store backed by a read-write lock.

use std::sync::{Arc, RwLock};

use crate::board::{
    domain::Board,
    ports::{BoardStore, BoardStoreError, BoardStoreResult},
};

/// Thread-safe in-memory board store.
///
/// Clones share the same board.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardStore {
    state: Arc<RwLock<Board>>,
}

impl InMemoryBoardStore {
    /// Creates a store holding an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given board.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            state: Arc::new(RwLock::new(board)),
        }
    }
}

impl BoardStore for InMemoryBoardStore {
    fn read<T>(&self, operation: impl FnOnce(&Board) -> T) -> BoardStoreResult<T> {
        let board = self
            .state
            .read()
            .map_err(|err| BoardStoreError::Unavailable(err.to_string()))?;
        Ok(operation(&board))
    }

    fn write<T>(&self, operation: impl FnOnce(&mut Board) -> T) -> BoardStoreResult<T> {
        let mut board = self
            .state
            .write()
            .map_err(|err| BoardStoreError::Unavailable(err.to_string()))?;
        Ok(operation(&mut board))
    }
}
