use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use aida::{AppError, InvocationResult, Selection};

#[derive(Parser)]
#[command(name = "aida")]
#[command(version)]
#[command(
    about = "Orchestrate dbt commands for the AIDA insurance analytics project",
    long_about = None
)]
struct Cli {
    /// Repository root containing dbt_project/ (overrides discovery)
    #[arg(long, global = true, value_name = "PATH")]
    project_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the dbt installation and profile connection
    Debug,
    /// Install dbt package dependencies
    Deps,
    /// Run dbt models, loading raw data first if the database is missing
    Run {
        /// Restrict the run to one model layer
        #[arg(short, long, value_enum)]
        select: Option<RunSelect>,
    },
    /// Test dbt models
    Test {
        /// Restrict the tests to one selector
        #[arg(short, long, value_enum)]
        select: Option<TestSelect>,
    },
    /// Build and test all dbt models
    Build,
    /// Clean dbt artifacts
    Clean,
    /// Generate or serve dbt documentation
    #[command(subcommand)]
    Docs(DocsCommands),
}

#[derive(Subcommand)]
enum DocsCommands {
    /// Generate dbt documentation
    Generate,
    /// Serve dbt documentation
    Serve,
}

#[derive(Clone, Copy, ValueEnum)]
enum RunSelect {
    Staging,
    Intermediate,
    Marts,
}

impl From<RunSelect> for Selection {
    fn from(value: RunSelect) -> Self {
        match value {
            RunSelect::Staging => Selection::Staging,
            RunSelect::Intermediate => Selection::Intermediate,
            RunSelect::Marts => Selection::Marts,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TestSelect {
    Sources,
}

impl From<TestSelect> for Selection {
    fn from(value: TestSelect) -> Self {
        match value {
            TestSelect::Sources => Selection::Sources,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let root = cli.project_root.as_deref();

    // run/test/build propagate the child's exit code; the rest run for
    // their side effects and report orchestration success.
    let result: Result<i32, AppError> = match cli.command {
        Commands::Debug => aida::debug(root).map(side_effect_only),
        Commands::Deps => aida::deps(root).map(side_effect_only),
        Commands::Run { select } => {
            aida::run(select.map(Into::into), root).map(|result| result.exit_code)
        }
        Commands::Test { select } => {
            aida::test(select.map(Into::into), root).map(|result| result.exit_code)
        }
        Commands::Build => aida::build(root).map(|result| result.exit_code),
        Commands::Clean => aida::clean(root).map(side_effect_only),
        Commands::Docs(DocsCommands::Generate) => aida::docs_generate(root).map(side_effect_only),
        Commands::Docs(DocsCommands::Serve) => aida::docs_serve(root).map(side_effect_only),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn side_effect_only(_result: InvocationResult) -> i32 {
    0
}
