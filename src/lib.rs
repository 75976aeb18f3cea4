//! Build-and-package orchestration for Windows DLL/EXE artifacts.
//!
//! This library drives three external tools in a fixed order:
//! - msbuild, once per architecture (x86, then x64)
//! - signtool, once over every produced binary
//! - Inno Setup's iscc, which re-signs the files it packages
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod packager;

// Re-export commonly used types
pub use error::{CliError, PackagerError, Result};
