//! External command execution for system probing.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use tracing::debug;

/// Result of running an external program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or never started).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program ran and exited with code 0.
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Run a program directly (no shell) with captured output.
///
/// A program that cannot be started yields a failed result with no exit
/// code rather than an error, since probes treat both the same way.
pub fn execute(program: &str, args: &[&str]) -> CommandResult {
    let start = Instant::now();

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output();

    let duration = start.elapsed();

    match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout).to_string();
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            if output.status.success() {
                CommandResult::success(stdout, stderr, duration)
            } else {
                CommandResult::failure(output.status.code(), stdout, stderr, duration)
            }
        }
        Err(e) => {
            debug!("Could not start {}: {}", program, e);
            CommandResult::failure(None, String::new(), e.to_string(), duration)
        }
    }
}

/// Run a program and return its trimmed stdout if it succeeded.
pub fn execute_quiet(program: &str, args: &[&str]) -> Option<String> {
    let result = execute(program, args);
    if !result.success {
        debug!(
            "{} exited with {:?}: {}",
            program,
            result.exit_code,
            result.stderr.trim()
        );
        return None;
    }
    let stdout = result.stdout.trim();
    (!stdout.is_empty()).then(|| stdout.to_string())
}
