//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values.
//! Keep `STABLE_PROJECT_ID` stable across rename transitions.

pub const DISPLAY_NAME: &str = "DotGet";
pub const BINARY_NAME: &str = "dotget";
pub const STABLE_PROJECT_ID: &str = "dotget";
pub const ENV_PREFIX: &str = "DOTGET";

/// Directory under the user profile that holds `etc/` and `bin/`.
pub const INSTALL_ROOT_DIR_NAME: &str = ".nuget";

/// Host command the generated launchers invoke against the artifact.
pub const RUNTIME_COMMAND: &str = "dotnet";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}
