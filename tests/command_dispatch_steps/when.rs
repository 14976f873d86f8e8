//! When steps for chat command dispatch BDD scenarios.

use super::world::ChatWorld;
use rstest_bdd_macros::when;

#[when("{author} says: {line}")]
fn author_says(world: &mut ChatWorld, author: String, line: String) {
    world.last_reply = Some(world.dispatcher.handle(&author, &line));
}
