mod dbt_process;
mod loader_command;

pub use dbt_process::DbtProcessRunner;
pub use loader_command::{INGEST_CMD_VAR, LoaderCommandIngestion};
