use crate::domain::{AppError, ProjectPaths};
use crate::ports::IngestionService;
use crate::services::workdir::WorkingDirGuard;

/// Ensure the backing analytic store exists before a data-touching command.
///
/// Present store: immediate no-op. Absent store: switch to the repository
/// root, run the ingestion service, and restore the working directory
/// whether ingestion succeeds, fails, or unwinds. An ingestion failure is
/// propagated after restoration, never swallowed.
pub fn ensure_store<I: IngestionService>(
    paths: &ProjectPaths,
    ingestion: &I,
) -> Result<(), AppError> {
    let store = paths.store_path();
    if store.exists() {
        return Ok(());
    }

    println!("WARNING: Database not found at: {}", store.display());
    println!("Loading raw data from CSV files...");

    {
        let _guard = WorkingDirGuard::enter(paths.root())?;
        ingestion.bootstrap()?;
    }

    println!();
    Ok(())
}
