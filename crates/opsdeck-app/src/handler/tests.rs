//! Handler tests - message dispatch and state transitions

use opsdeck_core::{DeploySnapshot, EnvironmentSummary, RepoLayout};

use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::{DocsLink, Message};
use crate::state::AppState;

use super::{update, UpdateAction, UpdateResult};

fn snapshot(envs: &[(&str, bool, bool)]) -> DeploySnapshot {
    DeploySnapshot {
        environments: envs
            .iter()
            .map(|(name, online, repo)| EnvironmentSummary::new(*name, *online, *repo))
            .collect(),
        fetched_at: None,
    }
}

fn state_with(envs: &[(&str, bool, bool)]) -> AppState {
    AppState::from_snapshot(Settings::default(), snapshot(envs))
}

fn press(state: &mut AppState, key: InputKey) -> UpdateResult {
    update(state, Message::Key(key))
}

// ─────────────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_quit_key_requests_quit() {
    let mut state = state_with(&[("staging", true, true)]);
    let result = press(&mut state, InputKey::Char('q'));
    assert!(matches!(result.message, Some(Message::Quit)));

    let result = update(&mut state, Message::Quit);
    assert!(state.should_quit());
    assert!(result.message.is_none() && result.action.is_none());
}

// ─────────────────────────────────────────────────────────────────
// Tab Strip
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_tab_key_dispatches_single_switch_message() {
    let mut state = state_with(&[("overview", true, true), ("logs", true, true)]);

    let result = press(&mut state, InputKey::Tab);
    match result.message {
        Some(Message::SwitchTab { ref name }) => assert_eq!(name, "logs"),
        other => panic!("expected SwitchTab, got {other:?}"),
    }
    assert!(result.action.is_none());
    // Dispatch alone does not mutate selection; the update does
    assert_eq!(state.selected_env().map(|e| e.name.as_str()), Some("overview"));
}

#[test]
fn test_switch_tab_applies_once() {
    let mut state = state_with(&[("overview", true, true), ("logs", true, true)]);

    let result = update(
        &mut state,
        Message::SwitchTab {
            name: "logs".to_string(),
        },
    );
    assert!(result.message.is_none() && result.action.is_none());
    assert_eq!(state.selected_env().map(|e| e.name.as_str()), Some("logs"));
}

#[test]
fn test_switch_to_current_tab_is_accepted() {
    let mut state = state_with(&[("overview", true, true), ("logs", true, true)]);
    update(
        &mut state,
        Message::SwitchTab {
            name: "overview".to_string(),
        },
    );
    assert_eq!(state.selected_env().map(|e| e.name.as_str()), Some("overview"));
}

#[test]
fn test_switch_to_unknown_tab_is_rejected_quietly() {
    let mut state = state_with(&[("overview", true, true)]);
    let result = update(
        &mut state,
        Message::SwitchTab {
            name: "missing".to_string(),
        },
    );
    assert!(result.message.is_none() && result.action.is_none());
    assert_eq!(state.selected_env().map(|e| e.name.as_str()), Some("overview"));
}

#[test]
fn test_tab_keys_noop_without_environments() {
    let mut state = AppState::new(Settings::default());
    let result = press(&mut state, InputKey::Tab);
    assert!(result.message.is_none() && result.action.is_none());
}

// ─────────────────────────────────────────────────────────────────
// Wizard Toggle
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_toggle_flips_selected_card_only() {
    let mut state = state_with(&[("staging", true, false), ("production", true, false)]);

    let result = press(&mut state, InputKey::Char('t'));
    assert!(matches!(result.message, Some(Message::ToggleRepoPerEnv)));

    update(&mut state, Message::ToggleRepoPerEnv);
    assert!(state.card("staging").unwrap().repo_per_env());
    assert!(!state.card("production").unwrap().repo_per_env());

    update(&mut state, Message::ToggleRepoPerEnv);
    assert!(!state.card("staging").unwrap().repo_per_env());
}

#[test]
fn test_toggle_key_ignored_for_initialized_environment() {
    let mut state = state_with(&[("staging", true, true)]);
    let result = press(&mut state, InputKey::Char('t'));
    assert!(result.message.is_none() && result.action.is_none());
}

// ─────────────────────────────────────────────────────────────────
// Bootstrap
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_bootstrap_dispatches_shared_plan_by_default() {
    let mut state = state_with(&[("staging", true, false)]);

    let result = update(&mut state, Message::RequestBootstrap);
    match result.action {
        Some(UpdateAction::BootstrapGitops { plan }) => {
            assert_eq!(plan.env, "staging");
            assert_eq!(plan.layout, RepoLayout::Shared);
            assert_eq!(plan.repos.infra, "gitops-infra");
            assert_eq!(plan.target_folder.as_deref(), Some("staging"));
        }
        other => panic!("expected BootstrapGitops, got {other:?}"),
    }
}

#[test]
fn test_bootstrap_plan_reads_toggle() {
    let mut state = state_with(&[("staging", true, false)]);
    update(&mut state, Message::ToggleRepoPerEnv);

    let result = update(&mut state, Message::RequestBootstrap);
    match result.action {
        Some(UpdateAction::BootstrapGitops { plan }) => {
            assert_eq!(plan.layout, RepoLayout::PerEnvironment);
            assert_eq!(plan.repos.infra, "gitops-staging-infra");
            assert_eq!(plan.repos.apps, "gitops-staging-apps");
        }
        other => panic!("expected BootstrapGitops, got {other:?}"),
    }
}

#[test]
fn test_bootstrap_ignored_for_initialized_environment() {
    let mut state = state_with(&[("staging", true, true)]);
    let result = update(&mut state, Message::RequestBootstrap);
    assert!(result.action.is_none());

    let result = press(&mut state, InputKey::Char('b'));
    assert!(result.message.is_none());
}

// ─────────────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_delete_dispatches_exactly_one_action_for_offline_env() {
    let mut state = state_with(&[("staging", false, true)]);

    let result = update(&mut state, Message::RequestDelete);
    match result.action {
        Some(UpdateAction::DeleteEnvironment { ref name }) => assert_eq!(name, "staging"),
        other => panic!("expected DeleteEnvironment, got {other:?}"),
    }
    assert!(result.message.is_none());
    // No optimistic removal: the environment stays until the shell reports back
    assert_eq!(state.environments().len(), 1);
}

#[test]
fn test_delete_refused_for_online_env() {
    let mut state = state_with(&[("staging", true, true)]);
    let result = update(&mut state, Message::RequestDelete);
    assert!(result.action.is_none());

    let result = press(&mut state, InputKey::Char('d'));
    assert!(result.message.is_none());
}

#[test]
fn test_environment_deleted_applies_list_mutation() {
    let mut state = state_with(&[("staging", false, true), ("production", true, true)]);

    update(
        &mut state,
        Message::EnvironmentDeleted {
            name: "staging".to_string(),
        },
    );
    assert_eq!(state.environments().len(), 1);
    assert_eq!(state.selected_env().map(|e| e.name.as_str()), Some("production"));
}

// ─────────────────────────────────────────────────────────────────
// Documentation Links
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_install_agent_link_offline_only() {
    let mut offline = state_with(&[("staging", false, true)]);
    let result = press(&mut offline, InputKey::Char('o'));
    assert!(matches!(
        result.message,
        Some(Message::OpenDocs {
            link: DocsLink::InstallAgent
        })
    ));

    let mut online = state_with(&[("staging", true, true)]);
    let result = press(&mut online, InputKey::Char('o'));
    assert!(result.message.is_none());
}

#[test]
fn test_open_docs_resolves_configured_url() {
    let mut state = state_with(&[("staging", false, true)]);
    state.settings.docs.install_agent_url = "https://example.test/agent".to_string();

    let result = update(
        &mut state,
        Message::OpenDocs {
            link: DocsLink::InstallAgent,
        },
    );
    match result.action {
        Some(UpdateAction::OpenDocs { ref url }) => assert_eq!(url, "https://example.test/agent"),
        other => panic!("expected OpenDocs, got {other:?}"),
    }
}

#[test]
fn test_repo_links_require_initialized_environment() {
    let mut initialized = state_with(&[("staging", true, true)]);
    let result = press(&mut initialized, InputKey::Char('g'));
    assert!(matches!(
        result.message,
        Some(Message::OpenDocs {
            link: DocsLink::GitopsInfra
        })
    ));

    let mut uninitialized = state_with(&[("staging", true, false)]);
    let result = press(&mut uninitialized, InputKey::Char('g'));
    assert!(result.message.is_none());
}

// ─────────────────────────────────────────────────────────────────
// Snapshot Lifecycle
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_snapshot_change_requests_reload() {
    let mut state = state_with(&[("staging", true, true)]);
    let result = update(&mut state, Message::SnapshotChanged);
    assert!(matches!(result.action, Some(UpdateAction::ReloadSnapshot)));
}

#[test]
fn test_snapshot_loaded_replaces_environments() {
    let mut state = state_with(&[("staging", true, true)]);
    update(
        &mut state,
        Message::SnapshotLoaded {
            snapshot: snapshot(&[("staging", true, true), ("production", false, false)]),
        },
    );
    assert_eq!(state.environments().len(), 2);
}

#[test]
fn test_watcher_error_is_swallowed() {
    let mut state = state_with(&[("staging", true, true)]);
    let result = update(
        &mut state,
        Message::WatcherError {
            message: "inotify limit".to_string(),
        },
    );
    assert!(result.message.is_none() && result.action.is_none());
}
