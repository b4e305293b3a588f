//! opsdeck-app - Application state and orchestration for opsdeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the model ([`AppState`]), the messages operators and
//! collaborators dispatch ([`Message`]), and the update function that turns
//! them into state transitions and [`UpdateAction`]s for the event loop.
//! It also carries configuration loading and the snapshot file watcher.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;
pub mod watcher;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{DocsLink, Message};
pub use state::{AppState, EnvironmentCardState};
pub use watcher::SnapshotWatcher;
