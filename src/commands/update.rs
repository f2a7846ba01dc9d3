//! Update command
//!
//! Looks up the tool's metadata record and replays the recorded options
//! through the install pipeline with update intent. The caller supplies no
//! options directly; the record is the source of truth.

use super::install::{self, InstallOptions};
use crate::error::{DotGetError, Result};
use crate::registry;
use crate::resolvers::{DefaultResolverFactory, ResolutionType, ResolverFactory};
use crate::ui as output;
use crate::utils::paths::InstallationPaths;

#[derive(Debug)]
pub struct UpdateOptions {
    /// Tool to update
    pub tool: String,
}

/// Run the update command against the user's installation root.
pub fn run(options: UpdateOptions) -> Result<()> {
    let paths = InstallationPaths::resolve()?;
    run_with(&options, &DefaultResolverFactory, &paths)
}

/// Update pipeline with explicit collaborators.
pub fn run_with(
    options: &UpdateOptions,
    factory: &dyn ResolverFactory,
    paths: &InstallationPaths,
) -> Result<()> {
    output::verbose(&format!(
        "Scanning {} for '{}'...",
        paths.etc_dir.display(),
        options.tool
    ));

    let record = registry::find_by_tool(&paths.etc_dir, &options.tool)?
        .ok_or_else(|| DotGetError::ToolNotInstalled(options.tool.clone()))?;

    install::run_with(
        &InstallOptions {
            tool: options.tool.clone(),
            options: record.options,
            resolution: ResolutionType::Update,
        },
        factory,
        paths,
    )
}

#[cfg(test)]
mod tests;
