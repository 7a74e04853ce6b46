use thiserror::Error;

/// Failure of a single external CLI invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Failed to start '{program}': {reason}")]
    Spawn { program: String, reason: String },

    /// The process ran and exited unsuccessfully. `diagnostic` is stderr, or
    /// stdout when stderr was empty.
    #[error(
        "FAILED ({}) running {program}\n{diagnostic}",
        code.map_or_else(|| "signal".to_string(), |c| c.to_string())
    )]
    Failed {
        program: String,
        code: Option<i32>,
        diagnostic: String,
    },

    #[error("'{program}' timed out after {seconds}s and was killed")]
    Timeout { program: String, seconds: u64 },
}

impl CommandError {
    pub fn program(&self) -> &str {
        match self {
            CommandError::Spawn { program, .. }
            | CommandError::Failed { program, .. }
            | CommandError::Timeout { program, .. } => program,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_message_carries_code_and_diagnostic() {
        let err = CommandError::Failed {
            program: "cast".to_string(),
            code: Some(1),
            diagnostic: "execution reverted".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "FAILED (1) running cast\nexecution reverted"
        );
        assert_eq!(err.program(), "cast");
    }

    #[test]
    fn test_failed_without_exit_code_reports_signal() {
        let err = CommandError::Failed {
            program: "sui".to_string(),
            code: None,
            diagnostic: String::new(),
        };
        assert!(err.to_string().starts_with("FAILED (signal)"));
    }
}
