//! Error types for the packaging pipeline.
//!
//! Every failure is fatal to the run. [`Error::ToolFailed`] is the one a user
//! sees most: an external tool exited with a non-zero status.

use std::{fmt::Display, path::Path};

use super::Phase;

/// Result alias used throughout the packager.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building, signing or packaging.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An external tool ran and exited unsuccessfully.
    #[error("{phase} failed: {tool} exited with {}", describe_code(.code))]
    ToolFailed {
        /// Pipeline phase that was running
        phase: Phase,
        /// Program that was invoked
        tool: String,
        /// Exit code, `None` when the process was terminated by a signal
        code: Option<i32>,
    },

    /// An external tool could not be located.
    #[error("{tool} not found: {hint}")]
    ToolNotFound {
        /// Program name as configured
        tool: String,
        /// How to fix it
        hint: String,
    },

    /// Spawning or waiting on a process failed.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Program that was invoked
        command: String,
        /// Underlying I/O error
        error: std::io::Error,
    },

    /// The configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The signing command template could not be rendered.
    #[error("signing template error: {0}")]
    Template(String),

    /// Reading credentials from the user failed.
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Filesystem access with the path that caused it.
    #[error("{context} ({}): {error}", .path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: std::path::PathBuf,
        /// Underlying I/O error
        error: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// Another error wrapped with a description of the operation.
    #[error("{0}: {1}")]
    Context(String, Box<Error>),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated)".to_string(),
    }
}

impl Error {
    /// Exit code of the failing tool, looking through context wrappers.
    pub fn tool_exit_code(&self) -> Option<i32> {
        match self {
            Error::ToolFailed { code, .. } => *code,
            Error::Context(_, inner) => inner.tool_exit_code(),
            _ => None,
        }
    }
}

/// Attach filesystem context to I/O results.
pub trait ErrorExt<T> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Wrap an error with a description of what was being attempted.
pub trait Context<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }
}
