//! Key event handlers
//!
//! Maps raw key input to intent messages. The guards here mirror the
//! affordances the card actually renders: delete and the install-agent link
//! exist only for disconnected environments, the wizard controls only for
//! environments without a gitops repository.

use crate::input_key::InputKey;
use crate::message::{DocsLink, Message};
use crate::state::AppState;

use super::UpdateResult;

/// Handle a key press against the current state
pub fn handle_key(state: &AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => {
            UpdateResult::message(Message::Quit)
        }

        // Tab strip: activating a neighbor dispatches its name, the same
        // path an explicit activation of that tab would take.
        InputKey::Tab | InputKey::Right | InputKey::Char(']') => switch_to(state.next_tab_name()),
        InputKey::BackTab | InputKey::Left | InputKey::Char('[') => {
            switch_to(state.prev_tab_name())
        }

        // Wizard controls (uninitialized environments only)
        InputKey::Char('t') if wizard_visible(state) => {
            UpdateResult::message(Message::ToggleRepoPerEnv)
        }
        InputKey::Char('b') | InputKey::Enter if wizard_visible(state) => {
            UpdateResult::message(Message::RequestBootstrap)
        }

        // Offline-only controls
        InputKey::Char('d') | InputKey::Delete if offline_selected(state) => {
            UpdateResult::message(Message::RequestDelete)
        }
        InputKey::Char('o') if offline_selected(state) => {
            UpdateResult::message(Message::OpenDocs {
                link: DocsLink::InstallAgent,
            })
        }

        // Initialized environments: documentation links
        InputKey::Char('g') if repo_links_visible(state) => {
            UpdateResult::message(Message::OpenDocs {
                link: DocsLink::GitopsInfra,
            })
        }
        InputKey::Char('a') if repo_links_visible(state) => {
            UpdateResult::message(Message::OpenDocs {
                link: DocsLink::GitopsApps,
            })
        }

        _ => UpdateResult::none(),
    }
}

fn switch_to(name: Option<&str>) -> UpdateResult {
    match name {
        Some(name) => UpdateResult::message(Message::SwitchTab {
            name: name.to_string(),
        }),
        None => UpdateResult::none(),
    }
}

fn wizard_visible(state: &AppState) -> bool {
    state
        .selected_env()
        .is_some_and(|env| !env.has_gitops_repo)
}

fn repo_links_visible(state: &AppState) -> bool {
    state.selected_env().is_some_and(|env| env.has_gitops_repo)
}

fn offline_selected(state: &AppState) -> bool {
    state.selected_env().is_some_and(|env| !env.is_online)
}
