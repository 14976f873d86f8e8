//! When steps for kanban board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::when;

#[when(r#""{name}" is added to the backlog"#)]
fn added_to_backlog(world: &mut BoardWorld, name: String) {
    let result = world.service.add_to_backlog(&name, None);
    world.record(result);
}

#[when(r#""{name}" is started"#)]
fn started(world: &mut BoardWorld, name: String) {
    let result = world.service.start(&name);
    world.record(result);
}

#[when(r#""{name}" is completed"#)]
fn completed(world: &mut BoardWorld, name: String) {
    let result = world.service.complete(&name);
    world.record(result);
}

#[when(r#""{parent}" is made to depend on "{child}""#)]
fn made_to_depend(world: &mut BoardWorld, parent: String, child: String) {
    let result = world.service.add_dependency(&parent, &child);
    world.record(result);
}

#[when(r#""{parent}" no longer depends on "{child}""#)]
fn no_longer_depends(world: &mut BoardWorld, parent: String, child: String) {
    let result = world.service.remove_dependency(&parent, &child);
    world.record(result);
}

#[when(r#""{assignee}" is assigned to "{task}""#)]
fn assigned(world: &mut BoardWorld, assignee: String, task: String) {
    let result = world.service.add_assignee(&task, &assignee);
    world.record(result);
}

#[when(r#""{assignee}" is unassigned from "{task}""#)]
fn unassigned(world: &mut BoardWorld, assignee: String, task: String) {
    let result = world.service.remove_assignee(&task, &assignee);
    world.record(result);
}
