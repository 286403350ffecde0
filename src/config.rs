//! Runtime settings resolved from the environment
//!
//! The catalog must be loaded before arguments are parsed, since its records
//! become subcommands. Settings therefore come from the environment only.

use std::path::PathBuf;

/// Environment variable naming the commands file
pub const KEX_FILE: &str = "KEX_FILE";

/// Environment variable holding a `tracing` filter directive
pub const KEX_LOG: &str = "KEX_LOG";

/// Commands file used when `KEX_FILE` is not set
pub const DEFAULT_CATALOG_FILE: &str = "commands.yaml";

/// Log filter used when `KEX_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the commands file
    pub catalog_path: PathBuf,
    /// Filter directive for the log subscriber
    pub log_filter: String,
}

impl Settings {
    /// Resolve settings from the process environment
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup
    ///
    /// Empty values count as unset.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Settings {
            catalog_path: non_empty(KEX_FILE)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE)),
            log_filter: non_empty(KEX_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}
