//! External tool invocations.
//!
//! - `msbuild` - release build per architecture
//! - `signtool` - Authenticode signing of the produced binaries
//! - `iscc` - Inno Setup compile, with a signing template for packaged files
//! - `process` - [`ProcessRunner`], runs invocations as child processes
//! - `dry_run` - [`DryRunRunner`], prints invocations instead

mod dry_run;
pub mod iscc;
pub mod msbuild;
mod process;
pub mod signtool;

pub use dry_run::DryRunRunner;
pub use process::ProcessRunner;

use super::{Phase, error::Result};
use std::{
    fmt,
    future::Future,
    path::{Path, PathBuf},
};

/// A single command line the pipeline runs.
#[derive(Clone, PartialEq, Eq)]
pub struct Invocation {
    phase: Phase,
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    /// `(index, shown)` for arguments that carry a secret
    masked: Vec<(usize, String)>,
}

impl Invocation {
    pub fn new(phase: Phase, program: impl Into<String>) -> Self {
        Self {
            phase,
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            masked: Vec::new(),
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

    pub fn current_dir(mut self, dir: Option<&Path>) -> Self {
        self.current_dir = dir.map(Path::to_path_buf);
        self
    }

    /// An argument passed as `value` but shown as `shown` in logs and
    /// printed command lines.
    pub fn masked_arg(mut self, value: impl Into<String>, shown: impl Into<String>) -> Self {
        self.masked.push((self.args.len(), shown.into()));
        self.args.push(value.into());
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments exactly as passed to the process.
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// Arguments as shown to the user, masked ones replaced.
    pub fn redacted_args(&self) -> Vec<String> {
        let mut args = self.args.clone();
        for (index, shown) in &self.masked {
            args[*index] = shown.clone();
        }
        args
    }
}

/// Redacted command line, quoting arguments that contain spaces.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in self.redacted_args() {
            write!(f, " {}", quote(&arg))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("phase", &self.phase)
            .field("program", &self.program)
            .field("args", &self.redacted_args())
            .field("current_dir", &self.current_dir)
            .finish()
    }
}

fn quote(arg: &str) -> String {
    if arg.contains(' ') {
        format!("\"{arg}\"")
    } else {
        arg.to_string()
    }
}

/// How a tool exited.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ToolStatus {
    code: Option<i32>,
}

impl ToolStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Process ended without an exit code (killed by a signal).
    pub fn terminated() -> Self {
        Self { code: None }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for ToolStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Runs invocations to completion, one at a time.
///
/// The pipeline awaits each call before building the next invocation, so
/// implementations never see overlapping calls from one run.
pub trait ToolRunner {
    fn run(&self, invocation: &Invocation) -> impl Future<Output = Result<ToolStatus>>;
}

impl<R: ToolRunner> ToolRunner for &R {
    fn run(&self, invocation: &Invocation) -> impl Future<Output = Result<ToolStatus>> {
        (**self).run(invocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_masks_and_quotes() {
        let inv = Invocation::new(Phase::Sign, "signtool.exe")
            .args(["sign", "/p"])
            .masked_arg("hunter2", "********")
            .args(["/f", "C:\\My Certs\\a.pfx"]);
        assert_eq!(
            inv.to_string(),
            "signtool.exe sign /p ******** /f \"C:\\My Certs\\a.pfx\""
        );
        assert_eq!(inv.arguments()[2], "hunter2");
        assert!(!format!("{inv:?}").contains("hunter2"));
    }

    #[test]
    fn only_masked_arguments_change() {
        let inv = Invocation::new(Phase::Sign, "signtool.exe")
            .args(["sign", "/a", "/f", "a.pfx", "/p"])
            .masked_arg("a", "********");
        assert_eq!(inv.to_string(), "signtool.exe sign /a /f a.pfx /p ********");
    }

    #[test]
    fn status_success_only_for_zero() {
        assert!(ToolStatus::from_code(0).success());
        assert!(!ToolStatus::from_code(1).success());
        assert!(!ToolStatus::terminated().success());
    }
}
