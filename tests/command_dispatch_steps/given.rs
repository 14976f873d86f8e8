//! Given steps for chat command dispatch BDD scenarios.

use super::world::ChatWorld;
use rstest_bdd_macros::given;

#[given(r#"a bot listening for "{signal}""#)]
fn bot_listening_for(world: &mut ChatWorld, signal: String) {
    *world = ChatWorld::listening_for(&signal);
}

#[given("{author} has said: {line}")]
fn author_has_said(
    world: &mut ChatWorld,
    author: String,
    line: String,
) -> Result<(), eyre::Report> {
    let reply = world
        .dispatcher
        .handle(&author, &line)
        .ok_or_else(|| eyre::eyre!("the bot ignored {line:?}"))?;
    if reply.is_failure() {
        return Err(eyre::eyre!("setup line {line:?} failed: {reply}"));
    }
    Ok(())
}
