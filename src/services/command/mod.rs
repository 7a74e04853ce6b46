//! Runs chain CLIs as child processes.
//!
//! The executor only spawns, waits and captures. Interpreting output is the
//! job of the chain clients and the receipt extractors.
use std::{process::Stdio, time::Duration, time::Instant};

use async_trait::async_trait;
use log::{debug, warn};
use tokio::{process::Command, time::timeout};

use crate::metrics::{EXTERNAL_COMMAND_COUNTER, EXTERNAL_COMMAND_DURATION};
use crate::models::{CommandError, CommandResult, CommandSpec};

#[cfg(test)]
use mockall::automock;

/// Contract for running one external command to completion.
///
/// Implementations resolve with `Ok` only for a zero exit status; any other
/// exit is a [`CommandError::Failed`] carrying the captured diagnostic text.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CommandExecutorTrait: Send + Sync {
    async fn execute(&self, spec: CommandSpec) -> Result<CommandResult, CommandError>;
}

/// Spawns processes with `tokio::process`, inheriting this process's
/// environment (RPC credentials, CLI keystores and so on).
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    timeout: Duration,
}

impl CommandExecutor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl CommandExecutorTrait for CommandExecutor {
    async fn execute(&self, spec: CommandSpec) -> Result<CommandResult, CommandError> {
        debug!(
            "Running `{}` in {}",
            spec.display(),
            spec.working_dir.display()
        );
        let started = Instant::now();

        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .current_dir(&spec.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // dropping the output future on timeout must stop the child
            .kill_on_drop(true);
        let child = command.output();

        let outcome = match timeout(self.timeout, child).await {
            Ok(Ok(output)) => CommandResult::new(
                output.status.code(),
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr),
            )
            .classify(&spec.program),
            Ok(Err(e)) => Err(CommandError::Spawn {
                program: spec.program.clone(),
                reason: e.to_string(),
            }),
            Err(_) => {
                warn!(
                    "`{}` exceeded {}s, killing it",
                    spec.display(),
                    self.timeout.as_secs()
                );
                Err(CommandError::Timeout {
                    program: spec.program.clone(),
                    seconds: self.timeout.as_secs(),
                })
            }
        };

        EXTERNAL_COMMAND_DURATION
            .with_label_values(&[spec.program.as_str()])
            .observe(started.elapsed().as_secs_f64());
        let label = match &outcome {
            Ok(_) => "success",
            Err(CommandError::Failed { .. }) => "failed",
            Err(CommandError::Spawn { .. }) => "spawn_error",
            Err(CommandError::Timeout { .. }) => "timeout",
        };
        EXTERNAL_COMMAND_COUNTER
            .with_label_values(&[spec.program.as_str(), label])
            .inc();

        if let Err(e) = &outcome {
            warn!("`{}` failed: {}", spec.display(), e);
        }
        outcome
    }
}
