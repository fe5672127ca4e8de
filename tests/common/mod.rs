//! Shared testing utilities for aida CLI tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Isolated environment for CLI exercises: a repository root with the dbt
/// project layout, an emulated `$HOME`, a bin directory for fake tools, and
/// an output directory the fake tools record their observations into.
#[allow(dead_code)]
pub struct TestContext {
    tmp: TempDir,
    repo: PathBuf,
    home: PathBuf,
    bin_dir: PathBuf,
    out_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("Failed to create temp directory for tests");
        let repo = tmp.path().join("repo");
        let home = tmp.path().join("home");
        let bin_dir = tmp.path().join("bin");
        let out_dir = tmp.path().join("out");

        fs::create_dir_all(repo.join("dbt_project/logs")).expect("Failed to create dbt_project");
        fs::create_dir_all(repo.join("data")).expect("Failed to create data directory");
        for dir in [&home, &bin_dir, &out_dir] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }

        Self { tmp, repo, home, bin_dir, out_dir }
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn project_dir(&self) -> PathBuf {
        self.repo.join("dbt_project")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.project_dir().join("logs")
    }

    pub fn store_path(&self) -> PathBuf {
        self.repo.join("data").join("aida_challenge.duckdb")
    }

    /// Create the backing DuckDB file so bootstrap is a no-op.
    pub fn create_store(&self) {
        fs::write(self.store_path(), b"duckdb").expect("Failed to create store file");
    }

    /// Write a `profiles.yml` directly inside the project directory.
    pub fn create_local_profile(&self) {
        fs::write(self.project_dir().join("profiles.yml"), "aida_insurance:\n")
            .expect("Failed to write profiles.yml");
    }

    /// Install a fake `dbt` on the context's PATH.
    ///
    /// The fake records its argument vector, the `DBT_PROFILES_DIR` it
    /// inherited, and its working directory into the out directory, appends
    /// a line to `logs/dbt.log` relative to that working directory, and
    /// exits with `$FAKE_DBT_EXIT` (default 0).
    pub fn install_fake_dbt(&self) {
        let script = r#"#!/bin/sh
out_dir="${FAKE_DBT_OUT:?}"
echo "$@" > "$out_dir/dbt_args.txt"
printf '%s' "$DBT_PROFILES_DIR" > "$out_dir/dbt_profiles_env.txt"
pwd > "$out_dir/dbt_cwd.txt"
mkdir -p logs
echo "fake dbt output" >> logs/dbt.log
exit "${FAKE_DBT_EXIT:-0}"
"#;
        self.install_script("dbt", script);
    }

    /// Install a fake `dbt` that produces no log file at all.
    pub fn install_silent_dbt(&self) {
        let script = r#"#!/bin/sh
exit "${FAKE_DBT_EXIT:-0}"
"#;
        self.install_script("dbt", script);
    }

    /// Install a fake loader that records each call and creates the store.
    ///
    /// Returns the command line to pass via `AIDA_INGEST_CMD`.
    pub fn install_fake_loader(&self) -> String {
        let script = r#"#!/bin/sh
echo called >> "${FAKE_DBT_OUT:?}/ingest_calls.txt"
mkdir -p data
: > data/aida_challenge.duckdb
"#;
        self.install_script("load-raw-data", script)
    }

    /// Install a fake loader that records the call and fails.
    pub fn install_failing_loader(&self) -> String {
        let script = r#"#!/bin/sh
echo called >> "${FAKE_DBT_OUT:?}/ingest_calls.txt"
exit 3
"#;
        self.install_script("load-raw-data", script)
    }

    fn install_script(&self, name: &str, content: &str) -> String {
        let path = self.bin_dir.join(name);
        fs::write(&path, content).expect("Failed to write fake script");
        #[cfg(unix)]
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark script executable");
        path.display().to_string()
    }

    /// Build a command for invoking the compiled `aida` binary against the
    /// context's repository root, with a scrubbed environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("aida").expect("Failed to locate aida binary");
        cmd.arg("--project-root").arg(&self.repo);

        let path = env::var("PATH").unwrap_or_default();
        cmd.env("PATH", format!("{}:{}", self.bin_dir.display(), path));
        cmd.env("HOME", &self.home);
        cmd.env("FAKE_DBT_OUT", &self.out_dir);
        cmd.env_remove("DBT_PROFILES_DIR");
        cmd.env_remove("AIDA_PROJECT_ROOT");
        cmd.env_remove("AIDA_INGEST_CMD");
        cmd
    }

    /// Argument vector the fake dbt recorded, split on whitespace.
    pub fn recorded_dbt_args(&self) -> Vec<String> {
        let raw = fs::read_to_string(self.out_dir.join("dbt_args.txt"))
            .expect("fake dbt should have recorded its arguments");
        raw.split_whitespace().map(str::to_string).collect()
    }

    /// Number of times the fake loader was called.
    pub fn ingest_calls(&self) -> usize {
        match fs::read_to_string(self.out_dir.join("ingest_calls.txt")) {
            Ok(content) => content.lines().count(),
            Err(_) => 0,
        }
    }
}
