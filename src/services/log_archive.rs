use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::domain::{AppError, DEFAULT_LOG_NAME};

/// Copy `dbt.log` to a timestamped sibling, leaving the original in place
/// so the next invocation keeps appending to it.
///
/// A missing default log is a silent no-op; some sub-commands never
/// produce one.
pub fn archive_log(log_dir: &Path) -> Result<Option<PathBuf>, AppError> {
    let default_log = log_dir.join(DEFAULT_LOG_NAME);
    if !default_log.is_file() {
        return Ok(None);
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let archived = log_dir.join(format!("dbt_{timestamp}.log"));

    fs::copy(&default_log, &archived)?;

    // Carry the source's modified time onto the copy so archives sort by
    // when the log was last written, not when it was archived.
    if let Ok(modified) = fs::metadata(&default_log).and_then(|meta| meta.modified()) {
        let file = fs::OpenOptions::new().write(true).open(&archived)?;
        file.set_modified(modified)?;
    }

    println!("Log archived to: {}", archived.display());
    Ok(Some(archived))
}
