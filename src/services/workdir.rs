use std::env;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Scoped working-directory change.
///
/// Captures the current directory, switches to the target, and restores the
/// captured value when dropped, on every exit path including unwind.
#[derive(Debug)]
pub struct WorkingDirGuard {
    previous: PathBuf,
}

impl WorkingDirGuard {
    pub fn enter(target: &Path) -> Result<Self, AppError> {
        let previous = env::current_dir()?;
        env::set_current_dir(target)?;
        Ok(Self { previous })
    }

    /// Directory the process will return to when the guard drops.
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if let Err(err) = env::set_current_dir(&self.previous) {
            eprintln!(
                "WARNING: failed to restore working directory to {}: {}",
                self.previous.display(),
                err
            );
        }
    }
}
