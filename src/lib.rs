//! aida: orchestrate dbt invocations for the AIDA insurance analytics project.
//!
//! Each public function is one catalog entry: resolve paths, bootstrap the
//! backing store where needed, resolve the profiles directory, invoke dbt
//! as a blocking child process, and archive its log.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use app::{AppContext, commands::catalog};
use domain::{CommandSpec, DbtCommand, ProjectPaths};
use services::{DbtProcessRunner, LoaderCommandIngestion};

pub use domain::{AppError, InvocationResult, Selection};
pub use ports::{DbtRunner, IngestionService, InvocationRequest};

fn entry(
    command: DbtCommand,
    select: Option<Selection>,
    root: Option<&Path>,
) -> Result<InvocationResult, AppError> {
    let paths = ProjectPaths::discover(root)?;
    let ingestion = LoaderCommandIngestion::from_env(paths.root());
    let ctx = AppContext::new(paths, DbtProcessRunner::new(), ingestion);
    catalog::execute(&ctx, &CommandSpec { command, select })
}

/// Validate the dbt installation and profile connection.
pub fn debug(root: Option<&Path>) -> Result<InvocationResult, AppError> {
    entry(DbtCommand::Debug, None, root)
}

/// Install dbt package dependencies.
pub fn deps(root: Option<&Path>) -> Result<InvocationResult, AppError> {
    entry(DbtCommand::Deps, None, root)
}

/// Run dbt models, optionally restricted by a selection filter.
///
/// Bootstraps the backing store first when it is missing. The child's
/// exit code is the entry's own termination status.
pub fn run(select: Option<Selection>, root: Option<&Path>) -> Result<InvocationResult, AppError> {
    entry(DbtCommand::Run, select, root)
}

/// Test dbt models, optionally restricted by a selection filter.
pub fn test(select: Option<Selection>, root: Option<&Path>) -> Result<InvocationResult, AppError> {
    entry(DbtCommand::Test, select, root)
}

/// Build and test all dbt models.
pub fn build(root: Option<&Path>) -> Result<InvocationResult, AppError> {
    entry(DbtCommand::Build, None, root)
}

/// Clean dbt artifacts.
pub fn clean(root: Option<&Path>) -> Result<InvocationResult, AppError> {
    entry(DbtCommand::Clean, None, root)
}

/// Generate dbt documentation.
pub fn docs_generate(root: Option<&Path>) -> Result<InvocationResult, AppError> {
    entry(DbtCommand::DocsGenerate, None, root)
}

/// Serve dbt documentation.
pub fn docs_serve(root: Option<&Path>) -> Result<InvocationResult, AppError> {
    entry(DbtCommand::DocsServe, None, root)
}
