use std::path::PathBuf;

use crate::domain::AppError;

/// Everything the child process needs, assembled immediately before launch.
///
/// Carrying the profiles directory as an explicit field keeps the value off
/// the orchestrator's own environment, so nothing leaks across invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    /// Argument vector, excluding the tool name itself.
    pub args: Vec<String>,
    /// Working directory for the child (the dbt project directory).
    pub working_dir: PathBuf,
    /// Value injected into the child's `DBT_PROFILES_DIR`.
    pub profiles_dir: PathBuf,
}

/// Seam over the blocking dbt subprocess.
///
/// Implementations return the child's exit code; a nonzero exit is a normal
/// outcome, not an error. Only failure to start the process at all is an
/// `Err`.
pub trait DbtRunner {
    fn invoke(&self, request: &InvocationRequest) -> Result<i32, AppError>;
}
