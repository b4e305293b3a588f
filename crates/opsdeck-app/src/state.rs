//! Application state (Model in TEA pattern)

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use opsdeck_core::prelude::*;
use opsdeck_core::{DeploySnapshot, EnvironmentSummary, TabDescriptor};

use crate::config::Settings;

/// Local wizard state for one environment card.
///
/// Created when the environment first appears in a snapshot (mount) and
/// discarded when it disappears (unmount). Mutated only through
/// [`set_repo_per_env`](EnvironmentCardState::set_repo_per_env), invoked by
/// the toggle key handler. The flag has no externally observable effect
/// beyond the card's own rendering until a bootstrap plan is built from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentCardState {
    repo_per_env: bool,
}

impl EnvironmentCardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the operator chose per-environment git repositories
    pub fn repo_per_env(&self) -> bool {
        self.repo_per_env
    }

    /// The single mutation path for the wizard toggle
    pub fn set_repo_per_env(&mut self, enabled: bool) {
        self.repo_per_env = enabled;
    }
}

/// Top-level application state.
///
/// Owns the authoritative environment list and the authoritative "current
/// tab" value. Widgets derive everything they draw from this state on every
/// render and echo operator intent back through messages.
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    /// Environments in snapshot order
    environments: Vec<EnvironmentSummary>,

    /// Index of the current tab into `environments`
    current: usize,

    /// Per-environment card state, keyed by environment name
    cards: HashMap<String, EnvironmentCardState>,

    /// When the shell fetched the current snapshot
    pub fetched_at: Option<DateTime<Utc>>,

    should_quit: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            environments: Vec::new(),
            current: 0,
            cards: HashMap::new(),
            fetched_at: None,
            should_quit: false,
        }
    }

    pub fn from_snapshot(settings: Settings, snapshot: DeploySnapshot) -> Self {
        let mut state = Self::new(settings);
        state.apply_snapshot(snapshot);
        state
    }

    pub fn environments(&self) -> &[EnvironmentSummary] {
        &self.environments
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }

    /// Build the tab descriptor list for the current render.
    ///
    /// One descriptor per environment; the current flag is derived from the
    /// authoritative index, so exactly one descriptor is current whenever
    /// the list is non-empty.
    pub fn tabs(&self) -> Vec<TabDescriptor> {
        self.environments
            .iter()
            .enumerate()
            .map(|(idx, env)| TabDescriptor::new(env.name.clone(), idx == self.current))
            .collect()
    }

    /// The environment shown by the card, if any
    pub fn selected_env(&self) -> Option<&EnvironmentSummary> {
        self.environments.get(self.current)
    }

    /// Card state for one environment by name
    pub fn card(&self, name: &str) -> Option<&EnvironmentCardState> {
        self.cards.get(name)
    }

    /// Card state for the selected environment
    pub fn selected_card(&self) -> Option<&EnvironmentCardState> {
        self.selected_env().and_then(|env| self.cards.get(&env.name))
    }

    /// Flip one card's toggle through its setter. Returns the new value,
    /// or `None` when the environment is unknown.
    pub fn set_repo_per_env(&mut self, name: &str, enabled: bool) -> Option<bool> {
        let card = self.cards.get_mut(name)?;
        card.set_repo_per_env(enabled);
        Some(card.repo_per_env())
    }

    /// Switch the current tab to the environment with `name`
    pub fn switch_tab(&mut self, name: &str) -> Result<()> {
        match self.environments.iter().position(|env| env.name == name) {
            Some(idx) => {
                self.current = idx;
                Ok(())
            }
            None => Err(Error::unknown_tab(name)),
        }
    }

    /// Name of the tab after the current one, wrapping around
    pub fn next_tab_name(&self) -> Option<&str> {
        if self.environments.is_empty() {
            return None;
        }
        let idx = (self.current + 1) % self.environments.len();
        Some(&self.environments[idx].name)
    }

    /// Name of the tab before the current one, wrapping around
    pub fn prev_tab_name(&self) -> Option<&str> {
        if self.environments.is_empty() {
            return None;
        }
        let idx = (self.current + self.environments.len() - 1) % self.environments.len();
        Some(&self.environments[idx].name)
    }

    /// Replace the environment list with a freshly loaded snapshot.
    ///
    /// Card state survives for environments still present, is created for
    /// new ones, and is dropped for removed ones. The current tab follows
    /// the previously selected environment by name when it survives.
    pub fn apply_snapshot(&mut self, snapshot: DeploySnapshot) {
        let selected_name = self.selected_env().map(|env| env.name.clone());

        self.environments = snapshot.environments;
        self.fetched_at = snapshot.fetched_at;

        let environments = &self.environments;
        self.cards
            .retain(|name, _| environments.iter().any(|env| &env.name == name));
        for env in &self.environments {
            self.cards
                .entry(env.name.clone())
                .or_insert_with(EnvironmentCardState::new);
        }

        self.current = selected_name
            .and_then(|name| self.environments.iter().position(|env| env.name == name))
            .unwrap_or(0);
    }

    /// Remove one environment and its card state. Returns whether it existed.
    pub fn remove_environment(&mut self, name: &str) -> bool {
        let Some(idx) = self.environments.iter().position(|env| env.name == name) else {
            return false;
        };
        self.environments.remove(idx);
        self.cards.remove(name);
        if self.current >= idx && self.current > 0 {
            self.current -= 1;
        }
        true
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_core::find_current;

    fn snapshot(envs: &[(&str, bool, bool)]) -> DeploySnapshot {
        DeploySnapshot {
            environments: envs
                .iter()
                .map(|(name, online, repo)| EnvironmentSummary::new(*name, *online, *repo))
                .collect(),
            fetched_at: None,
        }
    }

    fn state(envs: &[(&str, bool, bool)]) -> AppState {
        AppState::from_snapshot(Settings::default(), snapshot(envs))
    }

    #[test]
    fn test_tabs_derive_exactly_one_current() {
        let state = state(&[("staging", true, true), ("production", true, true)]);
        let tabs = state.tabs();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs.iter().filter(|t| t.current).count(), 1);
        assert_eq!(find_current(&tabs).map(|t| t.name.as_str()), Some("staging"));
    }

    #[test]
    fn test_switch_tab() {
        let mut state = state(&[("staging", true, true), ("production", true, true)]);
        state.switch_tab("production").unwrap();
        assert_eq!(state.selected_env().map(|e| e.name.as_str()), Some("production"));

        let err = state.switch_tab("nope").unwrap_err();
        assert!(matches!(err, Error::UnknownTab { .. }));
        // Failed switch leaves the selection untouched
        assert_eq!(state.selected_env().map(|e| e.name.as_str()), Some("production"));
    }

    #[test]
    fn test_tab_neighbors_wrap() {
        let mut state = state(&[("a", true, true), ("b", true, true), ("c", true, true)]);
        assert_eq!(state.next_tab_name(), Some("b"));
        assert_eq!(state.prev_tab_name(), Some("c"));

        state.switch_tab("c").unwrap();
        assert_eq!(state.next_tab_name(), Some("a"));
    }

    #[test]
    fn test_card_state_mounts_per_environment() {
        let state = state(&[("staging", true, false), ("production", true, false)]);
        assert!(state.card("staging").is_some());
        assert!(state.card("production").is_some());
        assert!(state.card("nope").is_none());
    }

    #[test]
    fn test_toggle_isolated_between_cards() {
        let mut state = state(&[("staging", true, false), ("production", true, false)]);
        state.set_repo_per_env("staging", true).unwrap();

        assert!(state.card("staging").unwrap().repo_per_env());
        assert!(!state.card("production").unwrap().repo_per_env());
    }

    #[test]
    fn test_apply_snapshot_preserves_surviving_card_state() {
        let mut state = state(&[("staging", true, false), ("edge", true, false)]);
        state.set_repo_per_env("staging", true).unwrap();

        // edge disappears, production appears
        state.apply_snapshot(snapshot(&[("staging", false, false), ("production", true, true)]));

        assert!(state.card("staging").unwrap().repo_per_env());
        assert!(state.card("edge").is_none());
        assert!(!state.card("production").unwrap().repo_per_env());
    }

    #[test]
    fn test_apply_snapshot_follows_selection_by_name() {
        let mut state = state(&[("a", true, true), ("b", true, true)]);
        state.switch_tab("b").unwrap();

        state.apply_snapshot(snapshot(&[("b", true, true), ("c", true, true)]));
        assert_eq!(state.selected_env().map(|e| e.name.as_str()), Some("b"));

        // Selected environment removed: selection falls back to the first tab
        state.apply_snapshot(snapshot(&[("c", true, true), ("d", true, true)]));
        assert_eq!(state.selected_env().map(|e| e.name.as_str()), Some("c"));
    }

    #[test]
    fn test_remove_environment() {
        let mut state = state(&[("a", false, true), ("b", false, true), ("c", false, true)]);
        state.switch_tab("c").unwrap();

        assert!(state.remove_environment("b"));
        assert_eq!(state.environments().len(), 2);
        assert!(state.card("b").is_none());
        // Selection still points at "c" after the removal shifts indices
        assert_eq!(state.selected_env().map(|e| e.name.as_str()), Some("c"));

        assert!(!state.remove_environment("b"));
    }

    #[test]
    fn test_remove_selected_environment() {
        let mut state = state(&[("a", false, true), ("b", false, true)]);
        state.switch_tab("b").unwrap();

        assert!(state.remove_environment("b"));
        assert_eq!(state.selected_env().map(|e| e.name.as_str()), Some("a"));

        assert!(state.remove_environment("a"));
        assert!(state.selected_env().is_none());
        assert!(state.tabs().is_empty());
    }

    #[test]
    fn test_quit_flag() {
        let mut state = AppState::new(Settings::default());
        assert!(!state.should_quit());
        state.request_quit();
        assert!(state.should_quit());
    }
}
