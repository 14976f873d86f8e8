//! Service layer for board mutations and lookups.

use crate::board::{
    domain::{AssigneeName, Board, BoardDomainError, Task, TaskName, TaskStatus},
    ports::{BoardStore, BoardStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for board operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KanbanServiceError {
    /// Domain validation or a board rule failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// The board store could not be accessed.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
}

/// Result type for board service operations.
pub type KanbanServiceResult<T> = Result<T, KanbanServiceError>;

/// Board orchestration service.
///
/// Every mutation runs inside a single [`BoardStore::write`] scope, so a
/// lookup and the change that depends on it can never interleave with
/// another writer.
#[derive(Clone)]
pub struct KanbanService<S, C>
where
    S: BoardStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> KanbanService<S, C>
where
    S: BoardStore,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates a task and appends it to the backlog.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] when the name is empty or a
    /// task with the same name is already on the board.
    pub fn add_to_backlog(&self, name: &str, creator: Option<&str>) -> KanbanServiceResult<Task> {
        let task_name = TaskName::new(name)?;
        let mut task = Task::new(task_name.clone(), &*self.clock);
        if let Some(author) = creator {
            task = task.with_creator(author);
        }

        let stored = self.store.write(|board| {
            board.add_to_backlog(task)?;
            board.find_match(&task_name).cloned()
        })??;
        debug!(
            task = %stored.name(),
            display_id = ?stored.display_id(),
            "task added to backlog"
        );
        Ok(stored)
    }

    /// Returns `true` when a task with the given name is on the board.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError`] when the name is empty or the store is
    /// unavailable.
    pub fn contains_task(&self, name: &str) -> KanbanServiceResult<bool> {
        let task_name = TaskName::new(name)?;
        Ok(self.store.read(|board| board.contains_task(&task_name))?)
    }

    /// Finds a task by name across all columns.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] wrapping
    /// [`BoardDomainError::NotFound`] when no column holds the task.
    pub fn find_match(&self, name: &str) -> KanbanServiceResult<Task> {
        let task_name = TaskName::new(name)?;
        Ok(self
            .store
            .read(|board| board.find_match(&task_name).cloned())??)
    }

    /// Returns the stage of the column holding the task, if any.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError`] when the name is empty or the store is
    /// unavailable.
    pub fn status_of(&self, name: &str) -> KanbanServiceResult<Option<TaskStatus>> {
        let task_name = TaskName::new(name)?;
        Ok(self.store.read(|board| board.status_of(&task_name))?)
    }

    /// Removes a task from whichever column holds it.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] wrapping
    /// [`BoardDomainError::NotFound`] when no column holds the task.
    pub fn remove(&self, name: &str) -> KanbanServiceResult<Task> {
        let task_name = TaskName::new(name)?;
        let clock = &*self.clock;
        let removed = self
            .store
            .write(|board| board.remove(&task_name, clock))??;
        debug!(task = %removed.name(), "task removed");
        Ok(removed)
    }

    /// Moves a task from the backlog to in progress.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] wrapping
    /// [`BoardDomainError::NotFound`] when the backlog does not hold the task.
    pub fn start(&self, name: &str) -> KanbanServiceResult<Task> {
        self.forward(name, TaskStatus::Backlog, TaskStatus::InProgress)
    }

    /// Moves a task from in progress to complete.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] wrapping
    /// [`BoardDomainError::NotFound`] when the in-progress column does not
    /// hold the task.
    pub fn complete(&self, name: &str) -> KanbanServiceResult<Task> {
        self.forward(name, TaskStatus::InProgress, TaskStatus::Complete)
    }

    /// Moves a task between two columns and returns it as stored afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] wrapping
    /// [`BoardDomainError::InvalidTransition`] unless `to` follows `from`,
    /// or [`BoardDomainError::NotFound`] when `from` does not hold the task.
    pub fn forward(
        &self,
        name: &str,
        from: TaskStatus,
        to: TaskStatus,
    ) -> KanbanServiceResult<Task> {
        let task_name = TaskName::new(name)?;
        let clock = &*self.clock;
        let moved = self.store.write(|board| {
            board.forward(&task_name, from, to, clock)?;
            board.find_match(&task_name).cloned()
        })??;
        debug!(task = %moved.name(), %from, %to, "task forwarded");
        Ok(moved)
    }

    /// Assigns a user to a task.
    ///
    /// Returns `false` when the user was already assigned.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] when a name is empty or the
    /// task is not on the board.
    pub fn add_assignee(&self, task: &str, assignee: &str) -> KanbanServiceResult<bool> {
        let task_name = TaskName::new(task)?;
        let assignee_name = AssigneeName::new(assignee)?;
        let clock = &*self.clock;
        let changed = self
            .store
            .write(|board| board.add_assignee(&task_name, assignee_name, clock))??;
        debug!(task = %task_name, assignee, changed, "assignee added");
        Ok(changed)
    }

    /// Unassigns a user from a task.
    ///
    /// Returns `false` when the user was not assigned.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] when a name is empty or the
    /// task is not on the board.
    pub fn remove_assignee(&self, task: &str, assignee: &str) -> KanbanServiceResult<bool> {
        let task_name = TaskName::new(task)?;
        let assignee_name = AssigneeName::new(assignee)?;
        let clock = &*self.clock;
        let changed = self
            .store
            .write(|board| board.remove_assignee(&task_name, &assignee_name, clock))??;
        debug!(task = %task_name, assignee, changed, "assignee removed");
        Ok(changed)
    }

    /// Makes `parent` depend on `child` and returns the updated parent.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] when either task is absent or
    /// both names are equal.
    pub fn add_dependency(&self, parent: &str, child: &str) -> KanbanServiceResult<Task> {
        let parent_name = TaskName::new(parent)?;
        let child_name = TaskName::new(child)?;
        let clock = &*self.clock;
        let updated = self.store.write(|board| {
            board.add_dependency(&parent_name, &child_name, clock)?;
            board.find_match(&parent_name).cloned()
        })??;
        debug!(
            parent = %parent_name,
            child = %child_name,
            primitive = updated.is_primitive(),
            "dependency added"
        );
        Ok(updated)
    }

    /// Removes `child` from the dependencies of `parent` and returns the
    /// updated parent.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] when the parent is absent.
    pub fn remove_dependency(&self, parent: &str, child: &str) -> KanbanServiceResult<Task> {
        let parent_name = TaskName::new(parent)?;
        let child_name = TaskName::new(child)?;
        let clock = &*self.clock;
        let updated = self.store.write(|board| {
            board.remove_dependency(&parent_name, &child_name, clock)?;
            board.find_match(&parent_name).cloned()
        })??;
        debug!(
            parent = %parent_name,
            child = %child_name,
            primitive = updated.is_primitive(),
            "dependency removed"
        );
        Ok(updated)
    }

    /// Empties the board and returns the number of tasks discarded.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Store`] when the store is unavailable.
    pub fn clear_board(&self) -> KanbanServiceResult<usize> {
        let discarded = self.store.write(Board::clear_board)?;
        debug!(discarded, "board cleared");
        Ok(discarded)
    }

    /// Returns a copy of the whole board for display.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Store`] when the store is unavailable.
    pub fn snapshot(&self) -> KanbanServiceResult<Board> {
        Ok(self.store.read(Board::clone)?)
    }
}
