//! Dirty working tree detection
//!
//! The probe runs `git ls-files` restricted to the file categories that make a
//! working tree dirty:
//!
//! - `--deleted`: tracked files missing from the workspace
//! - `--modified`: tracked files with changed contents
//! - `--unmerged`: files with unresolved merge conflicts
//! - `--killed`: files that must be removed for a checkout to succeed
//! - `--other` + `--exclude-standard`: untracked files not covered by ignore rules
//!
//! Any non-blank output means dirty. The command is bounded by a wall-clock
//! timeout; timing out, failing to launch or exiting with a non-zero status
//! all collapse to "clean".

use derive_new::new;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Upper bound on how long the prompt waits for the status command
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(2);

const GIT_PROGRAM: &str = "git";

const LS_FILES_ARGS: [&str; 7] = [
    "ls-files",
    "--deleted",
    "--modified",
    "--unmerged",
    "--killed",
    "--other",
    "--exclude-standard",
];

/// Result of a single status command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The command exited successfully with this stdout
    Output(String),
    /// The command could not be launched or exited with a non-zero status
    Failed,
    /// The command did not finish before the deadline and was killed
    TimedOut,
}

impl ProbeOutcome {
    pub fn is_dirty(&self) -> bool {
        match self {
            ProbeOutcome::Output(stdout) => !stdout.trim().is_empty(),
            ProbeOutcome::Failed | ProbeOutcome::TimedOut => false,
        }
    }
}

/// External command used to list dirty files
#[derive(Debug, Clone, new)]
pub struct StatusProbe {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl Default for StatusProbe {
    fn default() -> Self {
        StatusProbe::new(
            GIT_PROGRAM.to_string(),
            LS_FILES_ARGS.iter().map(ToString::to_string).collect(),
            STATUS_TIMEOUT,
        )
    }
}

impl StatusProbe {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run the command inside `dir` and wait for it at most `timeout`
    ///
    /// The child is killed when its handle is dropped, so the timeout path
    /// never leaves a running process behind.
    pub async fn run(&self, dir: &Path) -> ProbeOutcome {
        let child = Command::new(&self.program)
            .args(&self.args)
            // `git ls-files` only lists the subtree below its working directory,
            // so callers pass the repository root rather than the shell's cwd
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(e) => {
                crate::debug_log!("failed to launch {}: {}", self.program, e);
                return ProbeOutcome::Failed;
            }
        };

        match timeout(self.timeout, child.wait_with_output()).await {
            Err(_elapsed) => {
                crate::debug_log!("{} timed out after {:?}", self.program, self.timeout);
                ProbeOutcome::TimedOut
            }
            Ok(Err(e)) => {
                crate::debug_log!("failed to wait for {}: {}", self.program, e);
                ProbeOutcome::Failed
            }
            Ok(Ok(output)) if !output.status.success() => {
                crate::debug_log!("{} exited with {}", self.program, output.status);
                ProbeOutcome::Failed
            }
            Ok(Ok(output)) => {
                ProbeOutcome::Output(String::from_utf8_lossy(&output.stdout).into_owned())
            }
        }
    }

    pub async fn is_dirty(&self, dir: &Path) -> bool {
        self.run(dir).await.is_dirty()
    }
}
