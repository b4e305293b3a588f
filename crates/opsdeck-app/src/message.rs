//! Message types for the application (TEA pattern)

use opsdeck_core::DeploySnapshot;

use crate::input_key::InputKey;

/// Documentation link targets the card can open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocsLink {
    /// Agent installation guide, offered for disconnected environments
    InstallAgent,
    /// Infra repository documentation link
    GitopsInfra,
    /// Apps repository documentation link
    GitopsApps,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the dashboard
    Quit,

    // ─────────────────────────────────────────────────────────
    // Tab Strip Messages
    // ─────────────────────────────────────────────────────────
    /// Operator activated a tab in the full navigation form
    SwitchTab { name: String },

    // ─────────────────────────────────────────────────────────
    // Environment Card Messages
    // ─────────────────────────────────────────────────────────
    /// Flip the selected card's "separate repositories" toggle
    ToggleRepoPerEnv,

    /// Bootstrap the selected environment's gitops repositories
    RequestBootstrap,

    /// Delete the selected environment (no confirmation step)
    RequestDelete,

    /// Open a documentation link in the browser
    OpenDocs { link: DocsLink },

    // ─────────────────────────────────────────────────────────
    // Snapshot Messages
    // ─────────────────────────────────────────────────────────
    /// The snapshot file changed on disk (debounced)
    SnapshotChanged,

    /// A reloaded snapshot is ready to apply
    SnapshotLoaded { snapshot: DeploySnapshot },

    /// The shell finished deleting an environment
    EnvironmentDeleted { name: String },

    /// Watcher error occurred
    WatcherError { message: String },
}
