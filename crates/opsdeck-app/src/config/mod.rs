//! Configuration loading for the dashboard
//!
//! Settings come from `.opsdeck/config.toml` next to the snapshot (project
//! level), falling back to the user-level config directory, falling back to
//! defaults.

mod settings;
mod types;

pub use settings::{load_settings, try_load};
pub use types::{DocsSettings, Settings, UiSettings, WatcherSettings};
