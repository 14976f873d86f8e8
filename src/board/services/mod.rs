//! Application services for board orchestration.

mod kanban;

pub use kanban::{KanbanService, KanbanServiceError, KanbanServiceResult};
