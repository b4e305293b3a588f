//! Main update function (TEA pattern)

use opsdeck_core::prelude::*;
use opsdeck_core::BootstrapPlan;

use crate::message::Message;
use crate::state::AppState;

use super::{keys, UpdateAction, UpdateResult};

/// Process one message against the state.
///
/// Pure state transition plus at most one follow-up message or one action
/// for the event loop; no IO happens here.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => keys::handle_key(state, key),

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::SwitchTab { name } => {
            match state.switch_tab(&name) {
                Ok(()) => debug!("Switched to tab: {name}"),
                Err(err) => warn!("Tab switch rejected: {err}"),
            }
            UpdateResult::none()
        }

        Message::ToggleRepoPerEnv => {
            let Some((name, enabled)) = state
                .selected_env()
                .map(|env| env.name.clone())
                .and_then(|name| {
                    let card = state.card(&name)?;
                    Some((name, !card.repo_per_env()))
                })
            else {
                return UpdateResult::none();
            };
            state.set_repo_per_env(&name, enabled);
            UpdateResult::none()
        }

        Message::RequestBootstrap => {
            let Some(env) = state.selected_env() else {
                return UpdateResult::none();
            };
            if env.has_gitops_repo {
                return UpdateResult::none();
            }
            let repo_per_env = state
                .selected_card()
                .map(|card| card.repo_per_env())
                .unwrap_or(false);
            match BootstrapPlan::new(&env.name, repo_per_env) {
                Ok(plan) => UpdateResult::action(UpdateAction::BootstrapGitops { plan }),
                Err(err) => {
                    warn!("Cannot build bootstrap plan: {err}");
                    UpdateResult::none()
                }
            }
        }

        Message::RequestDelete => match state.selected_env() {
            // Deletion is offered for disconnected environments only; the
            // shell mutates the list and reports back.
            Some(env) if !env.is_online => UpdateResult::action(UpdateAction::DeleteEnvironment {
                name: env.name.clone(),
            }),
            _ => UpdateResult::none(),
        },

        Message::OpenDocs { link } => {
            let url = state.settings.docs.url_for(link).to_string();
            UpdateResult::action(UpdateAction::OpenDocs { url })
        }

        Message::SnapshotChanged => UpdateResult::action(UpdateAction::ReloadSnapshot),

        Message::SnapshotLoaded { snapshot } => {
            info!(
                "Applying snapshot with {} environment(s)",
                snapshot.environments.len()
            );
            state.apply_snapshot(snapshot);
            UpdateResult::none()
        }

        Message::EnvironmentDeleted { name } => {
            if state.remove_environment(&name) {
                info!("Environment removed: {name}");
            } else {
                warn!("Delete reported for unknown environment: {name}");
            }
            UpdateResult::none()
        }

        Message::WatcherError { message } => {
            warn!("Snapshot watcher error: {message}");
            UpdateResult::none()
        }
    }
}
