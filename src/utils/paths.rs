use crate::error::{DotGetError, Result};
use crate::project_identity;
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// The per-user installation layout, resolved once per command invocation
/// and threaded explicitly through the registry and launcher steps.
#[derive(Debug, Clone)]
pub struct InstallationPaths {
    pub root: PathBuf,
    pub etc_dir: PathBuf,
    pub bin_dir: PathBuf,
}

impl InstallationPaths {
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let etc_dir = root.join("etc");
        let bin_dir = root.join("bin");
        Self {
            root,
            etc_dir,
            bin_dir,
        }
    }

    /// Resolve the global installation root for the current user:
    /// `DOTGET_HOME` override, else `{USERPROFILE|HOME}/.nuget`.
    pub fn resolve() -> Result<Self> {
        if let Some(over) = std::env::var_os(project_identity::env_key("HOME")) {
            return Ok(Self::from_root(PathBuf::from(over)));
        }

        let profile = user_profile_dir()?;
        Ok(Self::from_root(
            profile.join(project_identity::INSTALL_ROOT_DIR_NAME),
        ))
    }

    /// Create `etc/` and `bin/` (including missing parents) if absent.
    pub fn ensure_dirs(&self) -> Result<()> {
        create_dir(&self.etc_dir)?;
        create_dir(&self.bin_dir)?;
        Ok(())
    }
}

fn user_profile_dir() -> Result<PathBuf> {
    let var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    if let Some(dir) = std::env::var_os(var) {
        return Ok(PathBuf::from(dir));
    }

    let user_dirs = UserDirs::new()
        .ok_or_else(|| DotGetError::PathError("Could not determine user home directory".into()))?;
    Ok(user_dirs.home_dir().to_path_buf())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| DotGetError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}
