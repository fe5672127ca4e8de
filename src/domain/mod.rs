mod command_spec;
mod error;
mod paths;
pub mod profiles;

pub use command_spec::{CommandSpec, DbtCommand, InvocationResult, PROFILE_NAME, Selection, TOOL_NAME};
pub use error::AppError;
pub use paths::{DEFAULT_LOG_NAME, PROJECT_DIR_NAME, ProjectPaths, ROOT_VAR, STORE_FILE};
pub use profiles::{PROFILE_FILE, PROFILES_DIR_VAR, ProfileSource, ProfilesDir};
