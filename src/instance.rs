/// Single-instance guard
///
/// Two reviewers on one machine would overwrite each other's vote file, so
/// only one process may run at a time. The guard holds an exclusive advisory
/// lock on a file in the user data directory until it is dropped.
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::{Result, VoteError};

#[derive(Debug)]
pub struct InstanceGuard {
    file: File,
    path: PathBuf,
}

impl InstanceGuard {
    /// Take the lock at the default location
    ///
    /// - Linux: ~/.local/share/emotion-vote/instance.lock
    /// - macOS: ~/Library/Application Support/emotion-vote/instance.lock
    /// - Windows: %LOCALAPPDATA%\emotion-vote\instance.lock
    pub fn acquire_default() -> Result<Self> {
        let mut path = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(std::env::temp_dir);
        path.push("emotion-vote");
        path.push("instance.lock");
        Self::acquire(&path)
    }

    /// Take the lock on `path`, failing with `AlreadyRunning` when another
    /// process holds it.
    pub fn acquire(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| VoteError::io(parent, e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)
            .map_err(|e| VoteError::io(path, e))?;

        match file.try_lock_exclusive() {
            Ok(()) => {}
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                return Err(VoteError::AlreadyRunning);
            }
            Err(e) => return Err(VoteError::io(path, e)),
        }

        log::debug!("🔒 Holding instance lock {}", path.display());
        Ok(InstanceGuard {
            file,
            path: path.to_path_buf(),
        })
    }
}

impl Drop for InstanceGuard {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            log::warn!("⚠️  Failed to release {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_fails_until_release() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app").join("instance.lock");

        let first = InstanceGuard::acquire(&path).unwrap();
        assert!(matches!(
            InstanceGuard::acquire(&path),
            Err(VoteError::AlreadyRunning)
        ));

        drop(first);
        assert!(InstanceGuard::acquire(&path).is_ok());
    }
}
