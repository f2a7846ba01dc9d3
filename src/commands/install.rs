//! Install command
//!
//! Resolution first, registration second: a resolver materializes the
//! artifact, then the metadata record and the launcher are written under
//! the installation root with the same base filename. A failed resolution
//! leaves the filesystem untouched.

use crate::error::Result;
use crate::launcher::{self, PlatformFamily};
use crate::registry::{self, ToolRecord};
use crate::resolvers::{DefaultResolverFactory, ResolutionType, ResolverFactory, ResolverOptions};
use crate::ui as output;
use crate::utils::paths::InstallationPaths;
use std::fs;

#[derive(Debug)]
pub struct InstallOptions {
    /// Tool to install
    pub tool: String,
    /// Options forwarded to resolution and recorded for later updates
    pub options: ResolverOptions,
    /// Install vs. update intent, forwarded to resolvers
    pub resolution: ResolutionType,
}

/// Run the install command against the user's installation root.
pub fn run(options: InstallOptions) -> Result<()> {
    let paths = InstallationPaths::resolve()?;
    run_with(&options, &DefaultResolverFactory, &paths)
}

/// Install pipeline with explicit collaborators.
pub fn run_with(
    options: &InstallOptions,
    factory: &dyn ResolverFactory,
    paths: &InstallationPaths,
) -> Result<()> {
    output::verbose(&format!("Resolving '{}'...", options.tool));

    let resolver = factory.get_resolver(&options.tool, &options.options, options.resolution)?;
    let artifact = resolver.resolve()?;

    output::verbose(&format!("Resolved artifact: {}", artifact.display()));

    // Hold the root lock across both writes so concurrent invocations
    // cannot interleave a record with someone else's launcher.
    fs::create_dir_all(&paths.root)?;
    let _lock = registry::acquire_lock(&paths.root)?;
    paths.ensure_dirs()?;

    let script = launcher::generate(&artifact, PlatformFamily::current())?;
    let record = ToolRecord::new(&options.tool, options.options.clone());

    registry::write_record(paths, &script.filename, &record)?;
    launcher::write(&script, &paths.bin_dir)?;

    match options.resolution {
        ResolutionType::Install => {
            output::success(&format!("{} successfully installed!", options.tool))
        }
        ResolutionType::Update => {
            output::success(&format!("{} successfully updated!", options.tool))
        }
    }

    Ok(())
}
