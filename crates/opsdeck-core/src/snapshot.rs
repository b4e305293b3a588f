//! Deploy snapshot parsing
//!
//! The dashboard does not fetch environment state itself. The shell that
//! launches it hands over a snapshot file with already-fetched facts, and
//! re-renders follow from re-reading that file.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::EnvironmentSummary;

/// Externally supplied dashboard input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploySnapshot {
    #[serde(default)]
    pub environments: Vec<EnvironmentSummary>,

    /// When the shell fetched these facts; shown in the header when present
    #[serde(default)]
    pub fetched_at: Option<DateTime<Utc>>,
}

impl DeploySnapshot {
    /// Parse a snapshot from JSON text
    pub fn from_str(json: &str) -> Result<Self> {
        let snapshot: DeploySnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Load and parse a snapshot file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::snapshot_not_found(path));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Validate environment names and uniqueness
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for env in &self.environments {
            env.validate()?;
            if !seen.insert(env.name.as_str()) {
                return Err(Error::duplicate_environment(&env.name));
            }
        }
        Ok(())
    }
}
