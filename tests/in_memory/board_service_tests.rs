//! Lifecycle tests for [`KanbanService`] over [`InMemoryBoardStore`].

use std::sync::Arc;

use crate::in_memory::helpers::{TestService, column_names, service, store};
use kanbot::board::{
    adapters::memory::InMemoryBoardStore,
    domain::{BoardDomainError, TaskName, TaskStatus},
    services::{KanbanService, KanbanServiceError},
};
use mockable::DefaultClock;
use rstest::rstest;

/// Tests that a task walks backlog, in progress, and complete in order.
#[rstest]
fn task_moves_through_every_column(service: TestService) {
    service.add_to_backlog("Write spec", Some("alice")).expect("add");

    service.start("Write spec").expect("start");
    let [backlog, in_progress, complete] = column_names(&service).expect("columns");
    assert!(backlog.is_empty());
    assert_eq!(in_progress, ["Write spec"]);
    assert!(complete.is_empty());

    service.complete("Write spec").expect("complete");
    let [backlog_after, in_progress_after, complete_after] =
        column_names(&service).expect("columns");
    assert!(backlog_after.is_empty());
    assert!(in_progress_after.is_empty());
    assert_eq!(complete_after, ["Write spec"]);
}

/// Tests that adding a name already on the board leaves it unchanged.
#[rstest]
fn duplicate_names_are_rejected_in_any_column(service: TestService) {
    service.add_to_backlog("A", None).expect("add");
    service.start("A").expect("start");
    let before = service.snapshot().expect("snapshot");

    let result = service.add_to_backlog("A", None);

    assert!(matches!(
        result,
        Err(KanbanServiceError::Domain(BoardDomainError::DuplicateTask(_)))
    ));
    assert_eq!(service.snapshot().expect("snapshot"), before);
}

/// Tests that a missed forward leaves every column untouched.
#[rstest]
fn forwarding_a_missing_task_changes_nothing(service: TestService) {
    service.add_to_backlog("A", None).expect("add");
    let before = service.snapshot().expect("snapshot");

    let result = service.start("Nonexistent");

    assert_eq!(
        result.err(),
        Some(KanbanServiceError::Domain(BoardDomainError::NotFound(
            TaskName::new("Nonexistent").expect("name")
        )))
    );
    assert_eq!(service.snapshot().expect("snapshot"), before);
}

/// Tests that dependency edges follow tasks between columns and vanish with
/// the removed task.
#[rstest]
fn dependencies_follow_tasks_and_vanish_on_removal(service: TestService) {
    service.add_to_backlog("Ship", None).expect("add parent");
    service.add_to_backlog("Test", None).expect("add child");
    service.add_dependency("Ship", "Test").expect("depend");
    service.start("Ship").expect("start");

    let moved = service.find_match("Ship").expect("find");
    assert_eq!(moved.status(), Some(TaskStatus::InProgress));
    assert!(!moved.is_primitive());

    service.remove("Test").expect("remove child");
    assert!(service.find_match("Ship").expect("find").is_primitive());
}

/// Tests that two services over one store observe the same board.
#[rstest]
fn services_sharing_a_store_share_the_board(store: Arc<InMemoryBoardStore>) {
    let first = KanbanService::new(Arc::clone(&store), Arc::new(DefaultClock));
    let second = KanbanService::new(store, Arc::new(DefaultClock));

    first.add_to_backlog("Shared", None).expect("add");

    assert!(second.contains_task("Shared").expect("lookup"));
    assert_eq!(
        second.status_of("Shared").expect("status"),
        Some(TaskStatus::Backlog)
    );
}

/// Tests that clearing restarts the display ids.
#[rstest]
fn clear_restarts_display_ids(service: TestService) {
    service.add_to_backlog("A", None).expect("add");
    service.add_to_backlog("B", None).expect("add");

    assert_eq!(service.clear_board().expect("clear"), 2);
    let task = service.add_to_backlog("C", None).expect("add");

    assert_eq!(task.display_id(), Some(1));
}
