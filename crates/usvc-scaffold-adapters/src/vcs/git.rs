//! `git` command-line adapter.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::{debug, instrument};
use usvc_scaffold_core::{
    application::{ApplicationError, ports::VersionControl},
    error::ScaffoldResult,
};

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial scaffold from create-microservice";

/// Initializes repositories by shelling out to `git`.
///
/// Output of every step is captured; a failing step's stderr becomes the
/// error reason.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, dir: &Path, step: &str, args: &[&str]) -> ScaffoldResult<()> {
        debug!(step, "Running");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| ApplicationError::VersionControl {
                step: step.to_string(),
                reason: e.to_string(),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = match stderr.trim() {
            "" => format!("exited with {}", output.status),
            msg => msg.to_string(),
        };

        Err(ApplicationError::VersionControl {
            step: step.to_string(),
            reason,
        }
        .into())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    #[instrument(skip(self), fields(dir = %dir.display()))]
    fn initialize(&self, dir: &Path) -> ScaffoldResult<()> {
        self.run(dir, "git init", &["init"])?;
        self.run(dir, "git add", &["add", "."])?;
        self.run(
            dir,
            "git commit",
            &["commit", "-m", INITIAL_COMMIT_MESSAGE],
        )
    }
}
