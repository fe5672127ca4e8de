use std::path::PathBuf;
use std::process::Command;

use crate::domain::{AppError, PROFILES_DIR_VAR, TOOL_NAME};
use crate::ports::{DbtRunner, InvocationRequest};

/// Runs dbt as a blocking child process inheriting our standard streams.
#[derive(Debug, Clone)]
pub struct DbtProcessRunner {
    program: PathBuf,
}

impl DbtProcessRunner {
    pub fn new() -> Self {
        Self { program: PathBuf::from(TOOL_NAME) }
    }
}

impl Default for DbtProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl DbtRunner for DbtProcessRunner {
    fn invoke(&self, request: &InvocationRequest) -> Result<i32, AppError> {
        let mut command = Command::new(&self.program);
        command
            .args(&request.args)
            .current_dir(&request.working_dir)
            .env(PROFILES_DIR_VAR, &request.profiles_dir);

        let status = command.status().map_err(|err| AppError::DbtLaunch {
            details: format!("{}: {}", self.program.display(), err),
        })?;

        // A child killed by a signal carries no exit code; report failure.
        Ok(status.code().unwrap_or(1))
    }
}
