use crate::domain::AppError;

/// Seam over the raw-file-to-analytic-store ingestion routine.
///
/// Called with the working directory already set to the repository root.
/// A failure outcome is communicated back, never panicked.
pub trait IngestionService {
    fn bootstrap(&self) -> Result<(), AppError>;
}
