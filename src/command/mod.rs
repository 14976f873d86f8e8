//! Chat command handling for the kanban board.
//!
//! An adapter hands every incoming line to a
//! [`services::CommandDispatcher`], which ignores lines without the
//! configured signal, parses the rest with the [`domain`] command model, runs
//! the matching board operation, and answers with a [`domain::Reply`].

pub mod domain;
pub mod services;
