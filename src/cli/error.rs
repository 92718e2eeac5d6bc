//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::AssertionFailed { .. } => crate::exitcode::DATAERR,
                ApplicationError::Domain(_) => crate::exitcode::SOFTWARE,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn given_each_error_kind_when_mapping_then_uses_sysexits_code() {
        let failed: CliError = ApplicationError::AssertionFailed {
            expected: 42.0,
            actual: 41.0,
        }
        .into();
        assert_eq!(failed.exit_code(), 65);

        let domain: CliError =
            ApplicationError::from(DomainError::invalid_argument("combine", "missing")).into();
        assert_eq!(domain.exit_code(), 70);

        let config: CliError = ApplicationError::Config {
            message: "bad".into(),
        }
        .into();
        assert_eq!(config.exit_code(), 78);

        assert_eq!(CliError::Usage("x".into()).exit_code(), 64);
    }
}
