//! Gitops repository layout conventions
//!
//! An environment's manifests live either in a per-environment folder of the
//! shared `gitops-infra`/`gitops-apps` repositories, or in dedicated
//! `gitops-<env>-infra`/`gitops-<env>-apps` repositories. The bootstrap
//! wizard surfaces these names to the operator and the bootstrap action
//! carries them to whatever backend eventually performs the initialization.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::validate_environment_name;

/// Name of the shared infra repository (shared layout)
pub const SHARED_INFRA_REPO: &str = "gitops-infra";

/// Name of the shared apps repository (shared layout)
pub const SHARED_APPS_REPO: &str = "gitops-apps";

/// How an environment's manifests are split across git repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepoLayout {
    /// Manifests live in a `<env>/` folder of the shared repositories
    #[default]
    Shared,

    /// Manifests live in dedicated `gitops-<env>-*` repositories
    PerEnvironment,
}

impl RepoLayout {
    /// Map the wizard's "separate environments by git repositories" toggle
    pub fn from_split_flag(repo_per_env: bool) -> Self {
        if repo_per_env {
            RepoLayout::PerEnvironment
        } else {
            RepoLayout::Shared
        }
    }

    pub fn is_per_environment(&self) -> bool {
        matches!(self, RepoLayout::PerEnvironment)
    }
}

/// Infra/apps repository name pair for one environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitopsRepos {
    pub infra: String,
    pub apps: String,
}

/// Resolve the repository names for an environment under a layout
pub fn repo_names(env: &str, layout: RepoLayout) -> GitopsRepos {
    match layout {
        RepoLayout::Shared => GitopsRepos {
            infra: SHARED_INFRA_REPO.to_string(),
            apps: SHARED_APPS_REPO.to_string(),
        },
        RepoLayout::PerEnvironment => GitopsRepos {
            infra: format!("gitops-{env}-infra"),
            apps: format!("gitops-{env}-apps"),
        },
    }
}

/// Folder inside the infra repository that receives the manifests.
///
/// Dedicated repositories are environment-scoped already, so manifests go to
/// the repository root there.
pub fn manifests_folder(env: &str, layout: RepoLayout) -> Option<String> {
    match layout {
        RepoLayout::Shared => Some(env.to_string()),
        RepoLayout::PerEnvironment => None,
    }
}

/// Everything the bootstrap backend needs to initialize an environment's
/// gitops repositories. Computed from the card's toggle at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPlan {
    pub env: String,
    pub layout: RepoLayout,
    pub repos: GitopsRepos,
    /// Target folder inside the infra repo; `None` means repository root
    pub target_folder: Option<String>,
}

impl BootstrapPlan {
    /// Build a plan for `env`, validating the name it will be interpolated into
    pub fn new(env: &str, repo_per_env: bool) -> Result<Self> {
        validate_environment_name(env)?;
        let layout = RepoLayout::from_split_flag(repo_per_env);
        Ok(Self {
            env: env.to_string(),
            layout,
            repos: repo_names(env, layout),
            target_folder: manifests_folder(env, layout),
        })
    }

    /// One-line description used when the plan is logged or surfaced
    pub fn describe(&self) -> String {
        match &self.target_folder {
            Some(folder) => format!(
                "manifests in the {folder}/ folder of the shared {} repository",
                self.repos.infra
            ),
            None => format!(
                "manifests in the environment specific {} repository",
                self.repos.infra
            ),
        }
    }
}
