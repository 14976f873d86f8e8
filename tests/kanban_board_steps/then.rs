//! Then steps for kanban board BDD scenarios.

use super::world::{BoardWorld, column_kind};
use kanbot::board::{domain::BoardDomainError, services::KanbanServiceError};
use rstest_bdd_macros::then;

#[then(r#"the "{column}" column holds "{name}""#)]
fn column_holds(world: &BoardWorld, column: String, name: String) -> Result<(), eyre::Report> {
    let kind = column_kind(&column)?;
    let board = world.service.snapshot()?;
    let names: Vec<&str> = board
        .column(kind)
        .tasks()
        .iter()
        .map(|task| task.name().as_str())
        .collect();
    if names != [name.as_str()] {
        return Err(eyre::eyre!("expected {column} to hold [{name}], found {names:?}"));
    }
    Ok(())
}

#[then(r#"the "{column}" column is empty"#)]
fn column_is_empty(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let kind = column_kind(&column)?;
    let board = world.service.snapshot()?;
    if !board.column(kind).is_empty() {
        return Err(eyre::eyre!(
            "expected {column} to be empty, found {} task(s)",
            board.column(kind).len()
        ));
    }
    Ok(())
}

#[then(r#"the last operation failed because "{name}" already exists"#)]
fn failed_as_duplicate(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(KanbanServiceError::Domain(BoardDomainError::DuplicateTask(existing)))
            if existing.as_str() == name =>
        {
            Ok(())
        }
        other => Err(eyre::eyre!("expected DuplicateTask({name}), got {other:?}")),
    }
}

#[then(r#"the last operation failed because "{name}" was not found"#)]
fn failed_as_not_found(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(KanbanServiceError::Domain(BoardDomainError::NotFound(missing)))
            if missing.as_str() == name =>
        {
            Ok(())
        }
        other => Err(eyre::eyre!("expected NotFound({name}), got {other:?}")),
    }
}

#[then("the board holds {count:usize} task")]
fn board_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.service.snapshot()?.len();
    if held != count {
        return Err(eyre::eyre!("expected {count} task(s), found {held}"));
    }
    Ok(())
}

#[then(r#""{name}" is primitive"#)]
fn is_primitive(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    if !world.service.find_match(&name)?.is_primitive() {
        return Err(eyre::eyre!("expected {name} to have no dependencies"));
    }
    Ok(())
}

#[then(r#""{name}" is not primitive"#)]
fn is_not_primitive(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    if world.service.find_match(&name)?.is_primitive() {
        return Err(eyre::eyre!("expected {name} to have dependencies"));
    }
    Ok(())
}

#[then(r#""{name}" has no assignees"#)]
fn has_no_assignees(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    let task = world.service.find_match(&name)?;
    if !task.assignees().is_empty() {
        return Err(eyre::eyre!(
            "expected no assignees on {name}, found {:?}",
            task.assignees()
        ));
    }
    Ok(())
}
