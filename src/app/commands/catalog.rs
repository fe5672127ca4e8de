use std::env;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{
    AppError, CommandSpec, InvocationResult, PROFILES_DIR_VAR, TOOL_NAME, profiles,
};
use crate::ports::{DbtRunner, IngestionService, InvocationRequest};
use crate::services::{bootstrap, log_archive};

/// Execute one catalog entry end to end.
///
/// Order: bootstrap precondition (data-touching commands only), profile
/// resolution, blocking dbt invocation, log archival. A launch failure
/// aborts before archival; a nonzero child exit is a normal outcome
/// captured in the result.
pub fn execute<R: DbtRunner, I: IngestionService>(
    ctx: &AppContext<R, I>,
    spec: &CommandSpec,
) -> Result<InvocationResult, AppError> {
    let project_dir = ctx.paths().project_dir();

    if spec.command.touches_store() {
        bootstrap::ensure_store(ctx.paths(), ctx.ingestion())?;
    }

    let env_override = env::var(PROFILES_DIR_VAR).ok();
    let home = env::var_os("HOME").map(PathBuf::from);
    let profiles_dir = profiles::resolve(env_override.as_deref(), &project_dir, home.as_deref())?;

    println!("Project directory: {}", project_dir.display());
    println!("{}", profiles_dir.describe());

    let args = spec.to_args(&project_dir, &profiles_dir.path);
    println!("Running: {} {}", TOOL_NAME, args.join(" "));

    let exit_code = ctx.runner().invoke(&InvocationRequest {
        args,
        working_dir: project_dir,
        profiles_dir: profiles_dir.path,
    })?;

    let log_archive = log_archive::archive_log(&ctx.paths().log_dir())?;

    Ok(InvocationResult { exit_code, log_archive })
}
