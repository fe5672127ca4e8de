use std::env;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Subdirectory of the repository root holding the dbt project.
pub const PROJECT_DIR_NAME: &str = "dbt_project";

/// The DuckDB file that transformation commands read from and write to.
pub const STORE_FILE: &str = "aida_challenge.duckdb";

/// Default log file dbt appends to inside `logs/`.
pub const DEFAULT_LOG_NAME: &str = "dbt.log";

/// Environment override for the repository root.
pub const ROOT_VAR: &str = "AIDA_PROJECT_ROOT";

/// Resolved filesystem layout for one command invocation.
///
/// Recomputed at the start of every catalog entry; never cached across
/// invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn from_root<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Locate the repository root.
    ///
    /// Precedence: explicit override, `AIDA_PROJECT_ROOT`, then the first
    /// ancestor of the installed binary containing a `dbt_project/`
    /// directory. An unresolvable root is a fatal startup error.
    pub fn discover(override_root: Option<&Path>) -> Result<Self, AppError> {
        if let Some(root) = override_root {
            return Ok(Self::from_root(root));
        }

        if let Some(root) = env::var_os(ROOT_VAR).filter(|value| !value.is_empty()) {
            return Ok(Self::from_root(PathBuf::from(root)));
        }

        let anchor = env::current_exe()?;
        for dir in anchor.ancestors().skip(1) {
            if dir.join(PROJECT_DIR_NAME).is_dir() {
                return Ok(Self::from_root(dir));
            }
        }

        Err(AppError::ProjectRootNotFound(anchor))
    }

    /// `<root>/`
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/dbt_project/`
    pub fn project_dir(&self) -> PathBuf {
        self.root.join(PROJECT_DIR_NAME)
    }

    /// `<root>/data/aida_challenge.duckdb`
    pub fn store_path(&self) -> PathBuf {
        self.root.join("data").join(STORE_FILE)
    }

    /// `<root>/dbt_project/logs/`
    pub fn log_dir(&self) -> PathBuf {
        self.project_dir().join("logs")
    }

    /// `<root>/dbt_project/logs/dbt.log`
    pub fn default_log(&self) -> PathBuf {
        self.log_dir().join(DEFAULT_LOG_NAME)
    }
}
