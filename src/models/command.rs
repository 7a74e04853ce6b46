//! Captured result of one external CLI invocation.
use std::path::PathBuf;

use serde::Serialize;

use super::CommandError;

/// What to run. Arguments are passed to the program verbatim, no shell is
/// involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    /// Argument positions whose values must never be logged.
    pub secret_args: Vec<usize>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
            secret_args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Appends an argument that is masked in [`CommandSpec::display`].
    pub fn secret_arg(mut self, arg: impl Into<String>) -> Self {
        self.secret_args.push(self.args.len());
        self.args.push(arg.into());
        self
    }

    /// Command line suitable for logs, with secret arguments masked.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().enumerate().map(|(idx, arg)| {
            if self.secret_args.contains(&idx) {
                "<redacted>".to_string()
            } else {
                arg.clone()
            }
        }));
        parts.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    /// Exit code, `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn new(status: Option<i32>, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            status,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Shortcut for a zero exit with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self::new(Some(0), stdout, "")
    }

    pub fn is_success(&self) -> bool {
        self.status == Some(0)
    }

    /// Text explaining a failure: stderr, falling back to stdout.
    pub fn diagnostic(&self) -> &str {
        if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }

    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }

    /// Turns a nonzero exit into a [`CommandError::Failed`].
    pub fn classify(self, program: &str) -> Result<CommandResult, CommandError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(CommandError::Failed {
            program: program.to_string(),
            code: self.status,
            diagnostic: self.diagnostic().to_string(),
        })
    }
}
