//! Local artifact strategy: the `path` option points at an entry-point
//! file already on disk (a published tool directory, a framework-dependent
//! dll). Resolution verifies the file and canonicalizes it so launchers
//! never embed relative paths.

use super::{ResolutionType, Resolver};
use crate::error::{DotGetError, Result};
use std::path::PathBuf;

pub struct LocalArtifactResolver {
    tool: String,
    path: PathBuf,
    resolution: ResolutionType,
}

impl LocalArtifactResolver {
    pub fn new(tool: &str, path: impl Into<PathBuf>, resolution: ResolutionType) -> Self {
        Self {
            tool: tool.to_string(),
            path: path.into(),
            resolution,
        }
    }
}

impl Resolver for LocalArtifactResolver {
    fn resolve(&self) -> Result<PathBuf> {
        if !self.path.is_file() {
            let verb = match self.resolution {
                ResolutionType::Install => "install",
                ResolutionType::Update => "update",
            };
            return Err(DotGetError::ResolutionFailed {
                tool: self.tool.clone(),
                reason: format!(
                    "cannot {} from '{}': not a file",
                    verb,
                    self.path.display()
                ),
            });
        }

        self.path
            .canonicalize()
            .map_err(|e| DotGetError::ResolutionFailed {
                tool: self.tool.clone(),
                reason: format!("cannot canonicalize '{}': {}", self.path.display(), e),
            })
    }
}
