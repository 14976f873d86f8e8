//! Shared world state for kanban board BDD scenarios.

use std::sync::Arc;

use kanbot::board::{
    adapters::memory::InMemoryBoardStore,
    domain::TaskStatus,
    services::{KanbanService, KanbanServiceError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService = KanbanService<InMemoryBoardStore, DefaultClock>;

/// Scenario world for board lifecycle behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub last_error: Option<KanbanServiceError>,
}

impl BoardWorld {
    /// Creates a world around an empty board.
    #[must_use]
    pub fn new() -> Self {
        let service =
            KanbanService::new(Arc::new(InMemoryBoardStore::new()), Arc::new(DefaultClock));
        Self {
            service,
            last_error: None,
        }
    }

    /// Records the outcome of a step so `then` steps can inspect failures.
    pub fn record<T>(&mut self, result: Result<T, KanbanServiceError>) {
        self.last_error = result.err();
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a column label used in feature files.
///
/// # Errors
///
/// Returns an error when the label names no column.
pub fn column_kind(label: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(label).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}
