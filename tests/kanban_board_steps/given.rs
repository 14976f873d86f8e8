//! Given steps for kanban board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.service.clear_board().wrap_err("clear board")?;
    world.last_error = None;
    Ok(())
}

#[given(r#"the backlog holds "{name}""#)]
fn backlog_holds(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    world
        .service
        .add_to_backlog(&name, None)
        .wrap_err("seed backlog")?;
    Ok(())
}
