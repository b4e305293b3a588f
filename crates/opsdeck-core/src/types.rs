//! Core domain type definitions

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One named view in a tab strip, carrying whether it is presently selected.
///
/// Descriptors are rebuilt from authoritative application state on every
/// render; the tab strip never mutates them. Within one list, `name` is
/// unique and exactly one descriptor should have `current == true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor {
    pub name: String,
    pub current: bool,
}

impl TabDescriptor {
    pub fn new(name: impl Into<String>, current: bool) -> Self {
        Self {
            name: name.into(),
            current,
        }
    }
}

/// Find the current tab in a descriptor list.
///
/// Returns the *first* descriptor with `current == true`. A list with more
/// than one current entry is a caller bug; the first match wins. `None`
/// means no descriptor is current, which callers should treat as a contract
/// violation rather than guessing a default.
pub fn find_current(tabs: &[TabDescriptor]) -> Option<&TabDescriptor> {
    tabs.iter().find(|tab| tab.current)
}

/// Facts about one deployment target, as fetched by the dashboard shell.
///
/// `name` doubles as a path/namespace token (manifest folder, repository
/// name suffix), so it is validated as a lowercase DNS-label-style name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSummary {
    /// Unique environment identifier (e.g. "staging", "production")
    pub name: String,

    /// Whether the environment's agent is connected
    #[serde(rename = "online")]
    pub is_online: bool,

    /// Whether the environment's gitops repository has been bootstrapped
    #[serde(rename = "gitops_repo")]
    pub has_gitops_repo: bool,
}

impl EnvironmentSummary {
    pub fn new(name: impl Into<String>, is_online: bool, has_gitops_repo: bool) -> Self {
        Self {
            name: name.into(),
            is_online,
            has_gitops_repo,
        }
    }

    /// Human-readable connectivity label shown next to the status icon
    pub fn connectivity_label(&self) -> &'static str {
        if self.is_online {
            "Connected"
        } else {
            "Disconnected"
        }
    }

    /// Validate the environment name as a path/namespace token
    pub fn validate(&self) -> Result<()> {
        validate_environment_name(&self.name)
    }
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // DNS label: lowercase alphanumerics and inner dashes, max 63 chars
        Regex::new(r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?$").expect("valid name pattern")
    })
}

/// Check an environment name against the DNS-label naming rules
pub fn validate_environment_name(name: &str) -> Result<()> {
    if name_pattern().is_match(name) {
        Ok(())
    } else {
        Err(Error::invalid_environment_name(name))
    }
}
