//! List command: enumerate every installed tool from its metadata record.

use crate::error::Result;
use crate::registry;
use crate::ui as output;
use crate::utils::paths::InstallationPaths;

pub fn run() -> Result<()> {
    let paths = InstallationPaths::resolve()?;
    run_with(&paths)
}

pub fn run_with(paths: &InstallationPaths) -> Result<()> {
    let mut records = registry::read_all(&paths.etc_dir)?;

    if records.is_empty() {
        output::info("No tools installed");
        return Ok(());
    }

    records.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (filename, record) in records {
        output::keyval(&record.tool, &filename);
        for (key, value) in record.options.iter() {
            output::indent(&format!("{} = {}", key, value), 1);
        }
    }

    Ok(())
}
