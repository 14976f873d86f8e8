//! Concurrency tests: racing writers against one shared board.

use std::sync::Arc;

use crate::in_memory::helpers::{TestService, service};
use kanbot::board::{domain::BoardDomainError, services::KanbanServiceError};
use rstest::rstest;

const WRITERS: usize = 16;

/// Tests that exactly one of many concurrent adds of one name succeeds.
#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_of_one_name_admit_exactly_one(service: TestService) {
    let shared = Arc::new(service);
    let handles: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let service = Arc::clone(&shared);
            tokio::task::spawn_blocking(move || {
                service.add_to_backlog("Race", Some(&format!("writer-{writer}")))
            })
        })
        .collect();

    let mut successes = 0_usize;
    let mut duplicates = 0_usize;
    for handle in handles {
        match handle.await.expect("writer task joins") {
            Ok(_) => successes += 1,
            Err(KanbanServiceError::Domain(BoardDomainError::DuplicateTask(_))) => {
                duplicates += 1;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(duplicates, WRITERS - 1);
    assert_eq!(shared.snapshot().expect("snapshot").len(), 1);
}

/// Tests that a task raced by start and remove ends in exactly one place.
#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_start_and_remove_never_duplicate_a_task(service: TestService) {
    let shared = Arc::new(service);
    shared.add_to_backlog("Contested", None).expect("add");

    let starter = {
        let service = Arc::clone(&shared);
        tokio::task::spawn_blocking(move || service.start("Contested"))
    };
    let remover = {
        let service = Arc::clone(&shared);
        tokio::task::spawn_blocking(move || service.remove("Contested"))
    };
    let started = starter.await.expect("starter joins");
    let removed = remover.await.expect("remover joins");

    assert!(removed.is_ok(), "remove searches every column");
    let board = shared.snapshot().expect("snapshot");
    assert!(board.is_empty());
    if let Err(error) = started {
        assert!(matches!(
            error,
            KanbanServiceError::Domain(BoardDomainError::NotFound(_))
        ));
    }
}

/// Tests that distinct names added concurrently all land on the board with
/// distinct display ids.
#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_distinct_adds_all_land(service: TestService) {
    let shared = Arc::new(service);
    let handles: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let service = Arc::clone(&shared);
            tokio::task::spawn_blocking(move || {
                service.add_to_backlog(&format!("Task {writer}"), None)
            })
        })
        .collect();

    let mut ids = Vec::with_capacity(WRITERS);
    for handle in handles {
        let task = handle.await.expect("writer joins").expect("add");
        ids.push(task.display_id().expect("placed task has an id"));
    }
    ids.sort_unstable();

    let expected: Vec<u64> = (1..).take(WRITERS).collect();
    assert_eq!(ids, expected);
}
