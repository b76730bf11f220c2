use thiserror::Error;

/// Failures reported to the user as a single line with a specific exit status.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// Bad or missing arguments.
    #[error("{0}")]
    Usage(String),
    /// The environment cannot run the command (e.g. no TTY).
    #[error("{0}")]
    Environment(String),
    /// The command ran and failed.
    #[error("{0}")]
    Failed(String),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Environment(_) | CliError::Failed(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(CliError::Usage("x".into()).exit_code(), 2);
        assert_eq!(CliError::Environment("x".into()).exit_code(), 1);
        assert_eq!(CliError::Failed("x".into()).exit_code(), 1);
    }

    #[test]
    fn exit_code_is_a_process_status_byte() {
        let code: u8 = CliError::Usage("x".into()).exit_code();
        let _status = std::process::ExitCode::from(code);
        assert_eq!(code, 2);
    }

    #[test]
    fn message_is_shown_verbatim() {
        let err = CliError::Failed("Failed to fetch weather data.".into());
        assert_eq!(err.to_string(), "Failed to fetch weather data.");
    }
}
