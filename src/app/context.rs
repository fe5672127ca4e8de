use crate::domain::ProjectPaths;
use crate::ports::{DbtRunner, IngestionService};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: DbtRunner, I: IngestionService> {
    paths: ProjectPaths,
    runner: R,
    ingestion: I,
}

impl<R: DbtRunner, I: IngestionService> AppContext<R, I> {
    pub fn new(paths: ProjectPaths, runner: R, ingestion: I) -> Self {
        Self { paths, runner, ingestion }
    }

    pub fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn ingestion(&self) -> &I {
        &self.ingestion
    }
}
