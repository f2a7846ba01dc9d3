//! Installation registry
//!
//! One metadata record per installed tool lives in `etc/`, under the same
//! filename as the tool's launcher in `bin/`, so the two can always be
//! correlated by name alone. A record is line-oriented `key=:=value` text:
//! first line `tool=:=<name>`, then one line per install option.

mod lock;

pub use lock::{RootLock, acquire_lock};

use crate::error::{DotGetError, Result};
use crate::resolvers::ResolverOptions;
use crate::ui;
use crate::utils::paths::InstallationPaths;
use std::fs;
use std::path::{Path, PathBuf};

const PAIR_SEPARATOR: &str = "=:=";
const TOOL_KEY: &str = "tool";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRecord {
    pub tool: String,
    pub options: ResolverOptions,
}

impl ToolRecord {
    pub fn new(tool: impl Into<String>, options: ResolverOptions) -> Self {
        Self {
            tool: tool.into(),
            options,
        }
    }

    pub fn encode(&self) -> String {
        let mut contents = format!("{}{}{}\n", TOOL_KEY, PAIR_SEPARATOR, self.tool);
        for (key, value) in self.options.iter() {
            contents.push_str(&format!("{}{}{}\n", key, PAIR_SEPARATOR, value));
        }
        contents
    }

    pub fn decode(path: &Path, contents: &str) -> Result<Self> {
        let mut tool = None;
        let mut options = ResolverOptions::new();

        for line in contents.lines() {
            if line.is_empty() {
                continue;
            }
            let (key, value) = line.split_once(PAIR_SEPARATOR).ok_or_else(|| {
                DotGetError::MalformedRecord {
                    path: path.to_path_buf(),
                    message: format!("line without '{}' separator: {}", PAIR_SEPARATOR, line),
                }
            })?;
            if key == TOOL_KEY {
                tool = Some(value.to_string());
            } else {
                options.insert(key, value);
            }
        }

        let tool = tool.ok_or_else(|| DotGetError::MalformedRecord {
            path: path.to_path_buf(),
            message: format!("missing '{}' field", TOOL_KEY),
        })?;

        Ok(Self { tool, options })
    }
}

/// Persist a record to `etc/<filename>`, staging to a temp name and renaming
/// into place so a crash never leaves a truncated record.
pub fn write_record(paths: &InstallationPaths, filename: &str, record: &ToolRecord) -> Result<()> {
    let target = paths.etc_dir.join(filename);
    let tmp_path = paths.etc_dir.join(format!("{}.tmp", filename));

    fs::write(&tmp_path, record.encode()).map_err(|e| DotGetError::IoError {
        path: tmp_path.clone(),
        source: e,
    })?;
    fs::rename(&tmp_path, &target).map_err(|e| DotGetError::IoError {
        path: target,
        source: e,
    })
}

/// Linear scan of `etc/` for the record whose `tool` field matches.
/// Enumeration order is filesystem-dependent; the first match wins.
/// Unreadable or malformed records are skipped with a warning so one bad
/// file cannot poison every update.
pub fn find_by_tool(etc_dir: &Path, tool: &str) -> Result<Option<ToolRecord>> {
    for (path, record) in readable_records(etc_dir)? {
        if record.tool == tool {
            ui::verbose(&format!("Matched record: {}", path.display()));
            return Ok(Some(record));
        }
    }
    Ok(None)
}

/// Every readable record in `etc/`, with its filename, for enumeration.
pub fn read_all(etc_dir: &Path) -> Result<Vec<(String, ToolRecord)>> {
    Ok(readable_records(etc_dir)?
        .into_iter()
        .filter_map(|(path, record)| {
            let name = path.file_name()?.to_str()?.to_string();
            Some((name, record))
        })
        .collect())
}

fn readable_records(etc_dir: &Path) -> Result<Vec<(PathBuf, ToolRecord)>> {
    // A root that was never installed into simply has no records.
    if !etc_dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(etc_dir).map_err(|e| DotGetError::IoError {
        path: etc_dir.to_path_buf(),
        source: e,
    })?;

    let mut records = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| DotGetError::IoError {
                path: etc_dir.to_path_buf(),
                source: e,
            })?
            .path();
        if !path.is_file() {
            continue;
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                ui::warning(&format!(
                    "Skipping unreadable record '{}': {}",
                    path.display(),
                    e
                ));
                continue;
            }
        };

        match ToolRecord::decode(&path, &contents) {
            Ok(record) => records.push((path, record)),
            Err(e) => ui::warning(&format!("Skipping malformed record: {}", e)),
        }
    }

    Ok(records)
}
