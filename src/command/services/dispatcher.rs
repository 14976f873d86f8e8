//! Dispatcher turning chat lines into board operations and replies.

use mockable::Clock;
use thiserror::Error;
use tracing::{info, warn};

use super::render::{board_reply, help_reply, usage};
use crate::board::{
    domain::{BoardDomainError, TaskStatus},
    ports::BoardStore,
    services::{KanbanService, KanbanServiceError},
};
use crate::command::domain::{
    AssignArguments, ChangeAction, CommandError, DependArguments, KanbotCommand, KanbotRequest,
    Reply, tokenize,
};
use crate::config::KanbotConfig;

/// Errors that abort a command before or while it runs.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The command line or its arguments were unusable.
    #[error(transparent)]
    Command(#[from] CommandError),
    /// The board rejected the operation.
    #[error(transparent)]
    Service(#[from] KanbanServiceError),
    /// The board display could not be rendered.
    #[error(transparent)]
    Render(#[from] minijinja::Error),
}

/// Routes addressed chat lines to the board service.
pub struct CommandDispatcher<S, C>
where
    S: BoardStore,
    C: Clock + Send + Sync,
{
    service: KanbanService<S, C>,
    config: KanbotConfig,
}

impl<S, C> CommandDispatcher<S, C>
where
    S: BoardStore,
    C: Clock + Send + Sync,
{
    /// Creates a dispatcher over a board service.
    #[must_use]
    pub const fn new(service: KanbanService<S, C>, config: KanbotConfig) -> Self {
        Self { service, config }
    }

    /// Returns the underlying board service.
    #[must_use]
    pub const fn service(&self) -> &KanbanService<S, C> {
        &self.service
    }

    /// Returns the dispatcher configuration.
    #[must_use]
    pub const fn config(&self) -> &KanbotConfig {
        &self.config
    }

    /// Returns `true` when the first word of `line` is the signal.
    #[must_use]
    pub fn is_addressed(&self, line: &str) -> bool {
        line.split_whitespace().next() == Some(self.config.signal.as_str())
    }

    /// Handles one chat line written by `author`.
    ///
    /// Returns `None` for lines not addressed to the bot. A line holding
    /// only the signal displays the board; anything else runs a command.
    /// Every failure comes back as a [`Reply`] of kind failure.
    #[must_use]
    pub fn handle(&self, author: &str, line: &str) -> Option<Reply> {
        if !self.is_addressed(line) {
            return None;
        }

        let reply = match tokenize(line) {
            Ok(tokens) if tokens.len() <= 1 => self.display_board(),
            Ok(tokens) => self.execute(author, &KanbotRequest::parse(&tokens)),
            Err(error) => {
                warn!(author, %error, "unreadable command line");
                Reply::failure(error.to_string())
            }
        };
        Some(reply)
    }

    /// Renders the whole board.
    #[must_use]
    pub fn display_board(&self) -> Reply {
        self.service
            .snapshot()
            .map_err(DispatchError::from)
            .and_then(|board| {
                board_reply(&board, &self.config.bot_name).map_err(DispatchError::from)
            })
            .unwrap_or_else(|error| {
                warn!(%error, "board display failed");
                Reply::failure(error.to_string())
            })
    }

    /// Runs a parsed request on behalf of `author`.
    #[must_use]
    pub fn execute(&self, author: &str, request: &KanbotRequest) -> Reply {
        info!(
            author,
            command = %request.command(),
            args = ?request.args(),
            "dispatching command"
        );
        self.try_execute(author, request).unwrap_or_else(|error| {
            warn!(author, command = %request.command(), %error, "command rejected");
            self.failure_reply(request.command(), &error)
        })
    }

    fn try_execute(&self, author: &str, request: &KanbotRequest) -> Result<Reply, DispatchError> {
        match request.command() {
            KanbotCommand::Add => {
                let task = self
                    .service
                    .add_to_backlog(&request.task_name()?, Some(author))?;
                Ok(Reply::info(format!(
                    "{} has been added to the Backlog by {author}",
                    task.name()
                )))
            }
            KanbotCommand::Remove => {
                let task = self.service.remove(&request.task_name()?)?;
                Ok(Reply::info(format!("Removed {} by {author}", task.name())))
            }
            KanbotCommand::Start => {
                self.forward(author, request, TaskStatus::Backlog, TaskStatus::InProgress)
            }
            KanbotCommand::Complete => {
                self.forward(author, request, TaskStatus::InProgress, TaskStatus::Complete)
            }
            KanbotCommand::Clear => {
                self.service.clear_board()?;
                Ok(Reply::info(format!("Board cleared by: {author}")))
            }
            KanbotCommand::Assign => self.change_assignees(author, request),
            KanbotCommand::Depend => self.change_dependencies(request),
            KanbotCommand::Help => Ok(help_reply(&self.config.signal)),
        }
    }

    fn forward(
        &self,
        author: &str,
        request: &KanbotRequest,
        from: TaskStatus,
        to: TaskStatus,
    ) -> Result<Reply, DispatchError> {
        let task = self.service.forward(&request.task_name()?, from, to)?;
        Ok(Reply::info(format!(
            "{} moved from \"{from}\" to \"{to}\" by: {author}",
            task.name()
        )))
    }

    fn change_assignees(
        &self,
        author: &str,
        request: &KanbotRequest,
    ) -> Result<Reply, DispatchError> {
        let AssignArguments {
            task,
            action,
            assignee,
        } = request.assign_arguments()?;
        let description = match action {
            ChangeAction::Add => {
                if self.service.add_assignee(&task, &assignee)? {
                    format!("{assignee} assigned to {task} by {author}")
                } else {
                    format!("{assignee} is already assigned to {task}")
                }
            }
            ChangeAction::Remove => {
                if self.service.remove_assignee(&task, &assignee)? {
                    format!("{assignee} unassigned from {task} by {author}")
                } else {
                    format!("{assignee} is not assigned to {task}")
                }
            }
        };
        Ok(Reply::info(description))
    }

    fn change_dependencies(&self, request: &KanbotRequest) -> Result<Reply, DispatchError> {
        let DependArguments {
            action,
            child,
            parent,
        } = request.depend_arguments()?;
        let description = match action {
            ChangeAction::Add => {
                let updated = self.service.add_dependency(&parent, &child)?;
                format!("{} now depends on {child}", updated.name())
            }
            ChangeAction::Remove => {
                let updated = self.service.remove_dependency(&parent, &child)?;
                if updated.is_primitive() {
                    format!(
                        "{} no longer depends on {child} and has no dependencies left",
                        updated.name()
                    )
                } else {
                    format!("{} no longer depends on {child}", updated.name())
                }
            }
        };
        Ok(Reply::info(description))
    }

    fn failure_reply(&self, command: KanbotCommand, error: &DispatchError) -> Reply {
        let description = match error {
            DispatchError::Service(KanbanServiceError::Domain(domain_error)) => {
                describe_domain_failure(command, domain_error)
            }
            DispatchError::Command(CommandError::MalformedCommand { .. }) => {
                format!("{error}. Usage: {}", usage(command, &self.config.signal))
            }
            DispatchError::Command(_)
            | DispatchError::Service(KanbanServiceError::Store(_))
            | DispatchError::Render(_) => error.to_string(),
        };
        Reply::failure(description)
    }
}

fn describe_domain_failure(command: KanbotCommand, error: &BoardDomainError) -> String {
    match (command, error) {
        (_, BoardDomainError::DuplicateTask(name)) => {
            format!("Not adding task {name} because it already exists in the kanban board.")
        }
        (KanbotCommand::Remove, BoardDomainError::NotFound(_)) => {
            "No matching item found, nothing removed.".to_owned()
        }
        (KanbotCommand::Start, BoardDomainError::NotFound(name)) => {
            format!("No task named {name} in \"{}\".", TaskStatus::Backlog)
        }
        (KanbotCommand::Complete, BoardDomainError::NotFound(name)) => {
            format!("No task named {name} in \"{}\".", TaskStatus::InProgress)
        }
        (_, BoardDomainError::NotFound(name)) => format!("No task named {name} was found."),
        (
            _,
            BoardDomainError::EmptyTaskName
            | BoardDomainError::EmptyAssigneeName
            | BoardDomainError::SelfDependency(_)
            | BoardDomainError::InvalidTransition { .. },
        ) => error.to_string(),
    }
}
