use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::AppError;
use crate::ports::IngestionService;

/// Environment override for the raw-data loader command line.
pub const INGEST_CMD_VAR: &str = "AIDA_INGEST_CMD";

const DEFAULT_LOADER: &[&str] = &["python3", "-m", "aida_challenge.data_loader"];

/// Ingestion adapter shelling out to the project's loader command.
///
/// The command line comes from `AIDA_INGEST_CMD` when set, otherwise the
/// project's default loader. Runs blocking from the repository root with
/// inherited streams; a nonzero exit becomes an ingestion failure outcome.
#[derive(Debug, Clone)]
pub struct LoaderCommandIngestion {
    root: PathBuf,
    command: Vec<String>,
}

impl LoaderCommandIngestion {
    pub fn from_env(root: &Path) -> Self {
        let command = env::var(INGEST_CMD_VAR)
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| raw.split_whitespace().map(str::to_string).collect())
            .unwrap_or_else(|| DEFAULT_LOADER.iter().map(|token| token.to_string()).collect());

        Self { root: root.to_path_buf(), command }
    }
}

impl IngestionService for LoaderCommandIngestion {
    fn bootstrap(&self) -> Result<(), AppError> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| AppError::config_error("Empty ingestion command"))?;

        let status = Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .status()
            .map_err(|err| AppError::Ingestion(format!("failed to launch {program}: {err}")))?;

        if !status.success() {
            return Err(AppError::Ingestion(format!("{program} exited with {status}")));
        }

        Ok(())
    }
}
