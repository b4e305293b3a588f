//! Snapshot file watcher
//!
//! The shell refreshes the snapshot file out of band; watching it keeps the
//! most recent render in step with the most recent facts without polling.
//! Watches the file's parent directory because editors and atomic writers
//! replace the file rather than modifying it in place.

use std::path::PathBuf;
use std::time::Duration;

use notify::RecursiveMode;
use notify_debouncer_full::{new_debouncer, DebounceEventResult};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::config::WatcherSettings;
use crate::message::Message;

/// Watches one snapshot file and reports changes as messages
pub struct SnapshotWatcher {
    /// Absolute path of the snapshot file
    snapshot_path: PathBuf,
    settings: WatcherSettings,
    /// Handle to stop the watcher
    stop_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl SnapshotWatcher {
    pub fn new(snapshot_path: PathBuf, settings: WatcherSettings) -> Self {
        Self {
            snapshot_path,
            settings,
            stop_tx: None,
        }
    }

    /// Start watching for file changes.
    ///
    /// Sends `Message::SnapshotChanged` (debounced) or `Message::WatcherError`
    /// to the channel.
    pub fn start(&mut self, message_tx: mpsc::Sender<Message>) -> Result<(), String> {
        if self.is_running() {
            return Err("Watcher is already running".to_string());
        }
        if !self.settings.auto_reload {
            debug!("Snapshot auto-reload disabled; watcher not started");
            return Ok(());
        }

        let snapshot_path = self.snapshot_path.clone();
        let debounce = Duration::from_millis(self.settings.debounce_ms);
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel();

        self.stop_tx = Some(stop_tx);

        // Spawn the watcher in a blocking task
        tokio::task::spawn_blocking(move || {
            Self::run_watcher(snapshot_path, debounce, message_tx, stop_rx);
        });

        Ok(())
    }

    /// Stop the file watcher
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Check if watcher is running
    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }

    /// Internal: run the blocking watcher
    fn run_watcher(
        snapshot_path: PathBuf,
        debounce: Duration,
        message_tx: mpsc::Sender<Message>,
        mut stop_rx: tokio::sync::oneshot::Receiver<()>,
    ) {
        let tx_clone = message_tx.clone();
        let watched_file = snapshot_path.clone();

        let debouncer_result = new_debouncer(
            debounce,
            None, // No tick rate override
            move |result: DebounceEventResult| match result {
                Ok(events) => {
                    let relevant = events
                        .iter()
                        .any(|event| event.paths.iter().any(|path| path == &watched_file));
                    if !relevant {
                        return;
                    }
                    debug!("Snapshot file changed: {}", watched_file.display());
                    let _ = tx_clone.blocking_send(Message::SnapshotChanged);
                }
                Err(errors) => {
                    for error in errors {
                        warn!("Snapshot watcher error: {:?}", error);
                        let _ = tx_clone.blocking_send(Message::WatcherError {
                            message: error.to_string(),
                        });
                    }
                }
            },
        );

        let mut debouncer = match debouncer_result {
            Ok(d) => d,
            Err(e) => {
                error!("Failed to create snapshot watcher: {}", e);
                let _ = message_tx.blocking_send(Message::WatcherError {
                    message: format!("Failed to create watcher: {}", e),
                });
                return;
            }
        };

        // Watch the containing directory; the file itself may be replaced
        let watch_dir = snapshot_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        if let Err(e) = debouncer.watch(&watch_dir, RecursiveMode::NonRecursive) {
            warn!("Failed to watch {}: {}", watch_dir.display(), e);
            let _ = message_tx.blocking_send(Message::WatcherError {
                message: format!("Failed to watch {}: {}", watch_dir.display(), e),
            });
            return;
        }
        info!("Watching snapshot: {}", snapshot_path.display());

        // Keep running until stop signal
        loop {
            match stop_rx.try_recv() {
                Ok(()) | Err(tokio::sync::oneshot::error::TryRecvError::Closed) => {
                    info!("Snapshot watcher stopping");
                    break;
                }
                Err(tokio::sync::oneshot::error::TryRecvError::Empty) => {
                    std::thread::sleep(Duration::from_millis(100));
                }
            }
        }
    }
}

impl Drop for SnapshotWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}
