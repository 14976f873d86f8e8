//! Kanbot: a chat-bot command handler for a small kanban board.
//!
//! Tasks move from the backlog to in progress to complete, can carry
//! assignees, and can depend on other tasks. Chat lines that start with the
//! configured signal are parsed into commands and applied to a single shared
//! board.
//!
//! # Architecture
//!
//! Kanbot follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board and command logic with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for board access
//! - **Adapters**: Concrete implementations of ports (in-memory storage)
//!
//! # Modules
//!
//! - [`board`]: Tasks, columns, the board aggregate, and its service
//! - [`command`]: Command parsing, dispatch, and replies
//! - [`config`]: Environment-driven configuration
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use kanbot::board::{adapters::memory::InMemoryBoardStore, services::KanbanService};
//! use kanbot::command::services::CommandDispatcher;
//! use kanbot::config::KanbotConfig;
//! use mockable::DefaultClock;
//!
//! let service = KanbanService::new(Arc::new(InMemoryBoardStore::new()), Arc::new(DefaultClock));
//! let dispatcher = CommandDispatcher::new(service, KanbotConfig::default());
//!
//! let reply = dispatcher
//!     .handle("alice", "!kanban add \"Write spec\"")
//!     .expect("line is addressed to the bot");
//! assert!(!reply.is_failure());
//! assert!(dispatcher.handle("alice", "hello there").is_none());
//! ```

pub mod board;
pub mod command;
pub mod config;
