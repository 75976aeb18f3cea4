//! Top-level error types and exit code mapping.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type returned by the CLI
#[derive(Error, Debug)]
pub enum PackagerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Pipeline errors, including failing tools
    #[error(transparent)]
    Packager(#[from] crate::packager::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl PackagerError {
    /// Process exit code for this error.
    ///
    /// A failing tool's own non-zero exit code is passed through; argument
    /// errors exit with 2 like clap's; everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            PackagerError::Cli(_) => 2,
            PackagerError::Packager(e) => e.tool_exit_code().filter(|code| *code != 0).unwrap_or(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packager::{Arch, Error, Phase};

    #[test]
    fn tool_exit_code_passes_through() {
        let err = PackagerError::from(Error::ToolFailed {
            phase: Phase::Build(Arch::X86),
            tool: "msbuild".into(),
            code: Some(4),
        });
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn terminated_tool_and_other_errors_exit_one() {
        let killed = PackagerError::from(Error::ToolFailed {
            phase: Phase::Package,
            tool: "iscc.exe".into(),
            code: None,
        });
        assert_eq!(killed.exit_code(), 1);
        assert_eq!(PackagerError::from(Error::Prompt("eof".into())).exit_code(), 1);
        let cli = PackagerError::from(CliError::InvalidArguments { reason: "x".into() });
        assert_eq!(cli.exit_code(), 2);
    }
}
