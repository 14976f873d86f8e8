//! Then steps for chat command dispatch BDD scenarios.

use super::world::ChatWorld;
use rstest_bdd_macros::then;

#[then(r#"the reply says "{text}""#)]
fn reply_says(world: &ChatWorld, text: String) -> Result<(), eyre::Report> {
    let reply = world.reply()?;
    if reply.is_failure() || reply.description.as_deref() != Some(text.as_str()) {
        return Err(eyre::eyre!("expected reply {text:?}, got {reply:?}"));
    }
    Ok(())
}

#[then("there is no reply")]
fn no_reply(world: &ChatWorld) -> Result<(), eyre::Report> {
    match &world.last_reply {
        Some(None) => Ok(()),
        other => Err(eyre::eyre!("expected silence, got {other:?}")),
    }
}

#[then(r#"the "{field}" field lists task "{name}""#)]
fn field_lists_task(world: &ChatWorld, field: String, name: String) -> Result<(), eyre::Report> {
    let reply = world.reply()?;
    let value = reply
        .fields
        .iter()
        .find(|candidate| candidate.name == field)
        .map(|candidate| candidate.value.as_str())
        .ok_or_else(|| eyre::eyre!("reply has no {field:?} field"))?;
    if !value.contains(&format!("name: \"{name}\"")) {
        return Err(eyre::eyre!("{field:?} does not list {name:?}: {value}"));
    }
    Ok(())
}

#[then(r#"the reply is a failure mentioning "{text}""#)]
fn reply_is_failure(world: &ChatWorld, text: String) -> Result<(), eyre::Report> {
    let reply = world.reply()?;
    let mentions = reply
        .description
        .as_deref()
        .is_some_and(|description| description.contains(&text));
    if !reply.is_failure() || !mentions {
        return Err(eyre::eyre!("expected a failure mentioning {text:?}, got {reply:?}"));
    }
    Ok(())
}

#[then(r#"the reply is titled "{title}""#)]
fn reply_is_titled(world: &ChatWorld, title: String) -> Result<(), eyre::Report> {
    let reply = world.reply()?;
    if reply.title.as_deref() != Some(title.as_str()) {
        return Err(eyre::eyre!("expected title {title:?}, got {:?}", reply.title));
    }
    Ok(())
}
