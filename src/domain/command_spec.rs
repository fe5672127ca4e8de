use std::path::{Path, PathBuf};

/// Name of the external transformation tool binary.
pub const TOOL_NAME: &str = "dbt";

/// Fixed profile passed on every invocation.
pub const PROFILE_NAME: &str = "aida_insurance";

/// Supported dbt sub-commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbtCommand {
    Debug,
    Deps,
    Run,
    Test,
    Build,
    Clean,
    DocsGenerate,
    DocsServe,
}

impl DbtCommand {
    /// Leading argument tokens for the sub-command.
    pub fn tokens(&self) -> &'static [&'static str] {
        match self {
            DbtCommand::Debug => &["debug"],
            DbtCommand::Deps => &["deps"],
            DbtCommand::Run => &["run"],
            DbtCommand::Test => &["test"],
            DbtCommand::Build => &["build"],
            DbtCommand::Clean => &["clean"],
            DbtCommand::DocsGenerate => &["docs", "generate"],
            DbtCommand::DocsServe => &["docs", "serve"],
        }
    }

    /// Commands that read or mutate transformed data and therefore need
    /// the backing store bootstrapped first.
    pub fn touches_store(&self) -> bool {
        matches!(self, DbtCommand::Run | DbtCommand::Test | DbtCommand::Build)
    }
}

/// Model-selection filters exposed by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Staging,
    Intermediate,
    Marts,
    Sources,
}

impl Selection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Selection::Staging => "staging",
            Selection::Intermediate => "intermediate",
            Selection::Marts => "marts",
            Selection::Sources => "sources",
        }
    }
}

/// One fully-parameterized catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub command: DbtCommand,
    pub select: Option<Selection>,
}

impl CommandSpec {
    pub fn plain(command: DbtCommand) -> Self {
        Self { command, select: None }
    }

    pub fn selected(command: DbtCommand, selection: Selection) -> Self {
        Self { command, select: Some(selection) }
    }

    /// Build the argument vector handed to the dbt binary.
    ///
    /// The selection filter, when present, precedes the project and
    /// profile flags.
    pub fn to_args(&self, project_dir: &Path, profiles_dir: &Path) -> Vec<String> {
        let mut args: Vec<String> =
            self.command.tokens().iter().map(|token| token.to_string()).collect();

        if let Some(selection) = self.select {
            args.push("--select".to_string());
            args.push(selection.as_str().to_string());
        }

        args.push("--project-dir".to_string());
        args.push(project_dir.display().to_string());
        args.push("--profiles-dir".to_string());
        args.push(profiles_dir.display().to_string());
        args.push("--profile".to_string());
        args.push(PROFILE_NAME.to_string());
        args.push("--no-use-colors".to_string());

        args
    }
}

/// Terminal output of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    /// The child's exit code, authoritative for success/failure.
    pub exit_code: i32,
    /// Archived log copy, when the default log existed after the run.
    pub log_archive: Option<PathBuf>,
}

impl InvocationResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}
