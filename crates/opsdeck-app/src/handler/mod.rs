//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use opsdeck_core::BootstrapPlan;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update.
///
/// These are the outward-facing capabilities the components dispatch into:
/// the shell that runs the event loop decides what each one actually does.
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Delete an environment. The shell owns the list mutation and feeds
    /// `Message::EnvironmentDeleted` back once done.
    DeleteEnvironment { name: String },

    /// Initialize an environment's gitops repositories.
    ///
    /// Not wired to a gitops backend yet; the executor records the intent.
    BootstrapGitops { plan: BootstrapPlan },

    /// Open a documentation URL in the system browser
    OpenDocs { url: String },

    /// Re-read the snapshot file and feed `Message::SnapshotLoaded` back
    ReloadSnapshot,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
