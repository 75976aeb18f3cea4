//! Build-and-package pipeline for the x3270 .NET libraries.
//!
//! A run rebuilds the solution for x86 and x64 with msbuild, signs the
//! produced DLLs (and companion executables) with signtool, then compiles
//! the Inno Setup installer, which re-signs what it packages using the same
//! certificate and password.
//!
//! # Module Organization
//!
//! - [`settings`] - project profiles, tool locations, verbosity, config file
//! - [`tools`] - command lines for each tool and the runners that execute them
//! - `orchestrator` - [`Packager`], the sequential pipeline
//! - `credentials` - [`Credentials`], never printed in full
//! - `error` - [`Error`] and context helpers

mod credentials;
pub mod error;
mod orchestrator;
mod phase;
pub mod settings;
pub mod tools;

pub use credentials::{Credentials, REDACTED};
pub use error::{Error, Result};
pub use orchestrator::{PackageReport, Packager};
pub use phase::Phase;
pub use settings::{
    Arch, BuildSettings, FileConfig, ProjectSettings, Settings, SettingsBuilder, ToolSettings,
    Verbosity,
};
pub use tools::{DryRunRunner, Invocation, ProcessRunner, ToolRunner, ToolStatus};
