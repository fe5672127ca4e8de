mod adapters;
pub mod bootstrap;
pub mod log_archive;
pub mod workdir;

pub use adapters::{DbtProcessRunner, INGEST_CMD_VAR, LoaderCommandIngestion};
