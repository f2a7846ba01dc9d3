//! Launcher script generation
//!
//! A launcher is the small platform script placed in `bin/` that users run.
//! It invokes the runtime command against the resolved artifact and forwards
//! every argument. Generation is parameterized on the platform family so
//! both flavors stay testable on one host.

use crate::error::{DotGetError, Result};
use crate::project_identity::RUNTIME_COMMAND;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    Windows,
    Posix,
}

impl PlatformFamily {
    pub fn current() -> Self {
        if cfg!(windows) {
            PlatformFamily::Windows
        } else {
            PlatformFamily::Posix
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherScript {
    pub filename: String,
    pub contents: String,
}

/// Build the launcher for an artifact. The filename is the artifact's base
/// name without extension, `.cmd`-suffixed on Windows.
pub fn generate(artifact: &Path, platform: PlatformFamily) -> Result<LauncherScript> {
    let stem = artifact
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            DotGetError::PathError(format!(
                "Artifact path has no usable file name: {}",
                artifact.display()
            ))
        })?;

    let script = match platform {
        PlatformFamily::Windows => LauncherScript {
            filename: format!("{}.cmd", stem),
            contents: format!("@{} \"{}\" %*\r\n", RUNTIME_COMMAND, artifact.display()),
        },
        PlatformFamily::Posix => LauncherScript {
            filename: stem.to_string(),
            contents: format!(
                "#!/usr/bin/env bash\nexec {} \"{}\" \"$@\"\n",
                RUNTIME_COMMAND,
                artifact.display()
            ),
        },
    };

    Ok(script)
}

/// Write the launcher into `bin_dir` and, on POSIX, mark it executable.
pub fn write(script: &LauncherScript, bin_dir: &Path) -> Result<()> {
    let path = bin_dir.join(&script.filename);

    // Stage then rename so a crash never leaves a half-written launcher.
    let tmp_path = bin_dir.join(format!("{}.tmp", script.filename));
    fs::write(&tmp_path, &script.contents).map_err(|e| DotGetError::IoError {
        path: tmp_path.clone(),
        source: e,
    })?;
    fs::rename(&tmp_path, &path).map_err(|e| DotGetError::IoError {
        path: path.clone(),
        source: e,
    })?;

    mark_executable(&path)
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|e| {
        DotGetError::IoError {
            path: path.to_path_buf(),
            source: e,
        }
    })
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}
