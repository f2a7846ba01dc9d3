use crate::error::{DotGetError, Result};
use crate::project_identity;
use crate::ui;
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

const LOCK_TIMEOUT_SECONDS: u64 = 300;

/// Exclusive advisory lock on the installation root, held for the duration
/// of an install or update so concurrent invocations cannot interleave the
/// metadata and launcher writes.
pub struct RootLock {
    _file: std::fs::File,
    path: PathBuf,
}

impl Drop for RootLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub fn acquire_lock(root: &Path) -> Result<RootLock> {
    let lock_path = root.join(".lock");

    if lock_path.exists() {
        let metadata = fs::metadata(&lock_path)?;
        let age_secs = metadata
            .modified()
            .ok()
            .and_then(|modified| SystemTime::now().duration_since(modified).ok())
            .map_or(0, |age| age.as_secs());

        let existing_file = OpenOptions::new().write(true).open(&lock_path)?;

        match existing_file.try_lock_exclusive() {
            Ok(()) => {
                if age_secs > LOCK_TIMEOUT_SECONDS {
                    ui::warning("Removing stale lock file (not actively locked)");
                }
                let _ = fs::remove_file(&lock_path);
            }
            Err(_) => {
                return Err(DotGetError::LockError(format!(
                    "Another {} process is currently installing into this root.\n\
                     Lock file: {}\n\
                     Wait for it to complete, or delete the lock file if you're sure no other process is running.",
                    project_identity::BINARY_NAME,
                    lock_path.display(),
                )));
            }
        }
    }

    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .map_err(|e| DotGetError::IoError {
            path: lock_path.clone(),
            source: e,
        })?;

    lock_file
        .lock_exclusive()
        .map_err(|e| DotGetError::LockError(e.to_string()))?;

    let pid = std::process::id();
    let _ = writeln!(&lock_file, "{}", pid);

    Ok(RootLock {
        _file: lock_file,
        path: lock_path,
    })
}

#[cfg(test)]
mod tests {
    use super::acquire_lock;
    use tempfile::tempdir;

    #[test]
    fn lock_contention_returns_error() {
        let dir = tempdir().expect("tempdir");

        let _lock = acquire_lock(dir.path()).expect("first lock");
        match acquire_lock(dir.path()) {
            Ok(_) => panic!("second lock should fail"),
            Err(err) => assert!(err.to_string().contains("currently installing")),
        }
    }

    #[test]
    fn lock_is_released_on_drop() {
        let dir = tempdir().expect("tempdir");

        let lock = acquire_lock(dir.path()).expect("first lock");
        drop(lock);
        let _again = acquire_lock(dir.path()).expect("relock after drop");
    }
}
