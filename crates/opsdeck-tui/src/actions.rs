//! Action executor - the shell side of the update loop
//!
//! Components dispatch intent; this module decides what each intent does in
//! this shell. Effects feed results back into the message channel so state
//! mutation stays inside `update()`.

use std::path::Path;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use opsdeck_app::{Message, UpdateAction};
use opsdeck_core::DeploySnapshot;

/// Execute one action produced by `update()`
pub fn handle_action(
    action: UpdateAction,
    msg_tx: &mpsc::Sender<Message>,
    snapshot_path: Option<&Path>,
) {
    match action {
        UpdateAction::DeleteEnvironment { name } => {
            // This shell has no control plane to call; it acknowledges the
            // deletion immediately and lets update() apply the mutation.
            info!("Delete requested for environment: {name}");
            send(msg_tx, Message::EnvironmentDeleted { name });
        }

        UpdateAction::BootstrapGitops { plan } => {
            // Integration point for a gitops backend; not wired up yet.
            debug!(
                "Bootstrap requested for {}: {}",
                plan.env,
                plan.describe()
            );
        }

        UpdateAction::OpenDocs { url } => {
            if let Err(err) = open::that(&url) {
                warn!("Failed to open {url}: {err}");
            }
        }

        UpdateAction::ReloadSnapshot => {
            let Some(path) = snapshot_path else {
                debug!("Snapshot reload requested without a snapshot file");
                return;
            };
            match DeploySnapshot::load(path) {
                Ok(snapshot) => send(msg_tx, Message::SnapshotLoaded { snapshot }),
                Err(err) => warn!("Snapshot reload failed: {err}"),
            }
        }
    }
}

fn send(msg_tx: &mpsc::Sender<Message>, message: Message) {
    if let Err(err) = msg_tx.try_send(message) {
        warn!("Dropping message, channel full or closed: {err}");
    }
}
