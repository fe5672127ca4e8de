mod dbt_runner;
mod ingestion;

pub use dbt_runner::{DbtRunner, InvocationRequest};
pub use ingestion::IngestionService;
