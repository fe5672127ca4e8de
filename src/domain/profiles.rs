use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Environment variable dbt reads its profiles directory from.
pub const PROFILES_DIR_VAR: &str = "DBT_PROFILES_DIR";

/// Profile file checked for inside the project directory.
pub const PROFILE_FILE: &str = "profiles.yml";

/// Which precedence branch produced the profiles directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    /// `DBT_PROFILES_DIR` was set and non-empty.
    Environment,
    /// `profiles.yml` sits directly inside the project directory.
    Project,
    /// Fallback to `~/.dbt`.
    Home,
}

/// Resolved profiles directory plus the branch that won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilesDir {
    pub path: PathBuf,
    pub source: ProfileSource,
}

impl ProfilesDir {
    /// Diagnostic line matching the original tool's wording.
    pub fn describe(&self) -> String {
        match self.source {
            ProfileSource::Environment => {
                format!("Using environment profiles directory: {}", self.path.display())
            }
            ProfileSource::Project => {
                format!("Using local profiles directory: {}", self.path.display())
            }
            ProfileSource::Home => {
                format!("Using home profiles directory: {}", self.path.display())
            }
        }
    }
}

/// Resolve the profiles directory, first match wins:
///
/// 1. the environment override, verbatim, if set and non-empty;
/// 2. the project directory itself, if `profiles.yml` exists there;
/// 3. `$HOME/.dbt`, whether or not it exists (dbt reports a missing
///    profile on its own).
pub fn resolve(
    env_override: Option<&str>,
    project_dir: &Path,
    home: Option<&Path>,
) -> Result<ProfilesDir, AppError> {
    if let Some(dir) = env_override.filter(|value| !value.is_empty()) {
        return Ok(ProfilesDir { path: PathBuf::from(dir), source: ProfileSource::Environment });
    }

    if project_dir.join(PROFILE_FILE).is_file() {
        return Ok(ProfilesDir {
            path: project_dir.to_path_buf(),
            source: ProfileSource::Project,
        });
    }

    let home = home.ok_or_else(|| AppError::config_error("HOME environment variable not set"))?;
    Ok(ProfilesDir { path: home.join(".dbt"), source: ProfileSource::Home })
}
