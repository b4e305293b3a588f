//! # opsdeck-core - Core Domain Types
//!
//! Foundation crate for opsdeck. Provides domain types, error handling,
//! gitops repository naming, and snapshot parsing.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`TabDescriptor`] - One named view in a tab strip, with its selection flag
//! - [`find_current()`] - First-match "current tab" lookup over a descriptor list
//! - [`EnvironmentSummary`] - Connectivity and gitops-repository facts for one environment
//!
//! ### Gitops Conventions (`gitops`)
//! - [`RepoLayout`] - Shared vs. per-environment repository split
//! - [`repo_names()`], [`manifests_folder()`] - Naming convention helpers
//! - [`BootstrapPlan`] - What a bootstrap of one environment would create
//!
//! ### Snapshot (`snapshot`)
//! - [`DeploySnapshot`] - Externally fetched dashboard input, parsed from JSON
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use opsdeck_core::prelude::*;
//! ```

pub mod error;
pub mod gitops;
pub mod logging;
pub mod snapshot;
pub mod types;

/// Prelude for common imports used throughout all opsdeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use gitops::{
    manifests_folder, repo_names, BootstrapPlan, GitopsRepos, RepoLayout, SHARED_APPS_REPO,
    SHARED_INFRA_REPO,
};
pub use snapshot::DeploySnapshot;
pub use types::{find_current, validate_environment_name, EnvironmentSummary, TabDescriptor};
