//! Kanban board management for Kanbot.
//!
//! Tasks move from the backlog to in progress to complete, carry assignees,
//! and may depend on other tasks. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
