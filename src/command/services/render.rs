//! Board display and help listing.

use minijinja::{Environment, context};

use crate::board::domain::{Board, Column, TaskStatus};
use crate::command::domain::{KanbotCommand, Reply};

const COLUMN_TEMPLATE: &str =
    "{% for task in tasks %}{{ task }}\n{% else %}No tasks\n{% endfor %}";

/// Returns the heading a column gets on the board display.
#[must_use]
pub const fn column_heading(kind: TaskStatus) -> &'static str {
    match kind {
        TaskStatus::Backlog => "Project Backlog",
        TaskStatus::InProgress => "In Progress",
        TaskStatus::Complete => "Completed Tasks",
    }
}

/// Renders a column as one task per line.
///
/// # Errors
///
/// Returns [`minijinja::Error`] when template rendering fails.
pub fn render_column(column: &Column) -> Result<String, minijinja::Error> {
    let lines: Vec<String> = column.tasks().iter().map(ToString::to_string).collect();
    let environment = Environment::new();
    let rendered = environment.render_str(COLUMN_TEMPLATE, context! { tasks => lines })?;
    Ok(rendered.trim_end().to_owned())
}

/// Builds the board display reply: one field per column.
///
/// # Errors
///
/// Returns [`minijinja::Error`] when a column fails to render.
pub fn board_reply(board: &Board, bot_name: &str) -> Result<Reply, minijinja::Error> {
    let mut reply = Reply::titled(bot_name);
    for column in board.columns() {
        reply = reply.with_field(column_heading(column.kind()), render_column(column)?, false);
    }
    Ok(reply)
}

/// Returns the syntax line for a command, prefixed with `signal`.
#[must_use]
pub fn usage(command: KanbotCommand, signal: &str) -> String {
    let arguments = match command {
        KanbotCommand::Add
        | KanbotCommand::Remove
        | KanbotCommand::Start
        | KanbotCommand::Complete => " <task>",
        KanbotCommand::Assign => " <task> add|remove <assignee>",
        KanbotCommand::Depend => " add|remove <child task> <parent task>",
        KanbotCommand::Clear | KanbotCommand::Help => "",
    };
    format!("{signal} {command}{arguments}")
}

const fn describe(command: KanbotCommand) -> &'static str {
    match command {
        KanbotCommand::Add => "Adds a task to the backlog.",
        KanbotCommand::Remove => "Removes a task from the board.",
        KanbotCommand::Clear => "Removes every task from the board.",
        KanbotCommand::Start => "Moves a task from the backlog to in progress.",
        KanbotCommand::Complete => "Moves a task from in progress to complete.",
        KanbotCommand::Assign => "Adds or removes a user assigned to a task.",
        KanbotCommand::Depend => "Makes the parent task depend on the child task, or undoes it.",
        KanbotCommand::Help => "Lists the board commands.",
    }
}

/// Builds the help listing for every command.
#[must_use]
pub fn help_reply(signal: &str) -> Reply {
    let mut reply = Reply::titled("List of Board Commands").with_description(
        "Tasks are referenced by name. Quote names that contain spaces when a command takes more than one argument.",
    );
    reply = reply.with_field(signal, "Displays the board.", true);
    for command in KanbotCommand::ALL {
        reply = reply.with_field(usage(command, signal), describe(command), true);
    }
    reply
}
