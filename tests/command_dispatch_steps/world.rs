//! Shared world state for chat command dispatch BDD scenarios.

use std::sync::Arc;

use kanbot::board::{adapters::memory::InMemoryBoardStore, services::KanbanService};
use kanbot::command::{domain::Reply, services::CommandDispatcher};
use kanbot::config::KanbotConfig;
use mockable::DefaultClock;
use rstest::fixture;

/// Dispatcher type used by the BDD world.
pub type TestDispatcher = CommandDispatcher<InMemoryBoardStore, DefaultClock>;

/// Scenario world for chat dispatch behaviour tests.
pub struct ChatWorld {
    pub dispatcher: TestDispatcher,
    pub last_reply: Option<Option<Reply>>,
}

impl ChatWorld {
    /// Creates a world whose bot answers to `signal`.
    #[must_use]
    pub fn listening_for(signal: &str) -> Self {
        let service =
            KanbanService::new(Arc::new(InMemoryBoardStore::new()), Arc::new(DefaultClock));
        Self {
            dispatcher: CommandDispatcher::new(
                service,
                KanbotConfig::default().with_signal(signal),
            ),
            last_reply: None,
        }
    }

    /// Returns the reply to the most recent line, failing if the bot stayed
    /// silent or nothing was said yet.
    ///
    /// # Errors
    ///
    /// Returns an error when there is no reply to inspect.
    pub fn reply(&self) -> Result<&Reply, eyre::Report> {
        self.last_reply
            .as_ref()
            .ok_or_else(|| eyre::eyre!("nothing was said in this scenario"))?
            .as_ref()
            .ok_or_else(|| eyre::eyre!("the bot did not reply"))
    }
}

impl Default for ChatWorld {
    fn default() -> Self {
        Self::listening_for("!kanban")
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ChatWorld {
    ChatWorld::default()
}
