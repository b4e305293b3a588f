//! Settings type definitions

use serde::{Deserialize, Serialize};

use crate::message::DocsLink;

/// User-facing settings, all optional in the file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub docs: DocsSettings,
    pub watcher: WatcherSettings,
}

/// Tab strip / layout tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Terminal width below which the tab strip collapses to its compact form
    pub compact_tabs_below: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            compact_tabs_below: 70,
        }
    }
}

/// External documentation links shown by the environment card.
///
/// Referenced but not owned by the dashboard; overridable for air-gapped
/// installs with mirrored docs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsSettings {
    pub install_agent_url: String,
    pub gitops_infra_url: String,
    pub gitops_apps_url: String,
}

impl Default for DocsSettings {
    fn default() -> Self {
        Self {
            install_agent_url: "https://opsdeck.dev/docs/installing-agent".to_string(),
            gitops_infra_url: "https://opsdeck.dev/docs/gitops-infra".to_string(),
            gitops_apps_url: "https://opsdeck.dev/docs/gitops-apps".to_string(),
        }
    }
}

impl DocsSettings {
    /// Resolve a link target to its configured URL
    pub fn url_for(&self, link: DocsLink) -> &str {
        match link {
            DocsLink::InstallAgent => &self.install_agent_url,
            DocsLink::GitopsInfra => &self.gitops_infra_url,
            DocsLink::GitopsApps => &self.gitops_apps_url,
        }
    }
}

/// Snapshot file watcher behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatcherSettings {
    /// Reload the snapshot automatically when the file changes
    pub auto_reload: bool,
    /// Debounce duration in milliseconds
    pub debounce_ms: u64,
}

impl Default for WatcherSettings {
    fn default() -> Self {
        Self {
            auto_reload: true,
            debounce_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ui.compact_tabs_below, 70);
        assert!(settings.watcher.auto_reload);
        assert_eq!(settings.watcher.debounce_ms, 500);
        assert!(settings.docs.install_agent_url.starts_with("https://"));
    }

    #[test]
    fn test_url_for_link() {
        let docs = DocsSettings::default();
        assert_eq!(docs.url_for(DocsLink::InstallAgent), docs.install_agent_url);
        assert_eq!(docs.url_for(DocsLink::GitopsInfra), docs.gitops_infra_url);
        assert_eq!(docs.url_for(DocsLink::GitopsApps), docs.gitops_apps_url);
    }
}
