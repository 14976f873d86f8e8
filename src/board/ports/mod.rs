//! Port contracts for board access.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod store;

pub use store::{BoardStore, BoardStoreError, BoardStoreResult};
