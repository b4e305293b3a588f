//! Main TUI runner - entry point and event loop

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;

use opsdeck_app::config::Settings;
use opsdeck_app::{update, AppState, Message, SnapshotWatcher};
use opsdeck_core::prelude::*;
use opsdeck_core::DeploySnapshot;

use super::{actions, event, render, terminal};

/// Run the TUI application over an already-loaded snapshot.
///
/// `snapshot_path` enables watch-triggered reloads; `None` runs the
/// dashboard on the initial data only.
pub async fn run(
    settings: Settings,
    snapshot: DeploySnapshot,
    snapshot_path: Option<PathBuf>,
) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::from_snapshot(settings, snapshot);
    info!(
        "Dashboard starting with {} environment(s)",
        state.environments().len()
    );

    // Unified message channel (watcher, future collaborators)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let mut watcher = snapshot_path
        .clone()
        .map(|path| SnapshotWatcher::new(path, state.settings.watcher.clone()));
    if let Some(watcher) = watcher.as_mut() {
        if let Err(err) = watcher.start(msg_tx.clone()) {
            warn!("Failed to start snapshot watcher: {err}");
        }
    }

    let result = run_loop(
        &mut term,
        &mut state,
        msg_rx,
        msg_tx,
        snapshot_path.as_deref(),
    );

    if let Some(watcher) = watcher.as_mut() {
        watcher.stop();
    }

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    snapshot_path: Option<&Path>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (watcher, etc.)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, snapshot_path);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, snapshot_path);
        }
    }

    Ok(())
}

/// Run one message through update(), chasing follow-ups and actions
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    snapshot_path: Option<&Path>,
) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let result = update(state, message);
        next = result.message;
        if let Some(action) = result.action {
            actions::handle_action(action, msg_tx, snapshot_path);
        }
    }
}
