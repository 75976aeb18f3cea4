//! Dry-run runner: shows what would be executed.

use super::{Invocation, ToolRunner, ToolStatus};
use crate::cli::OutputManager;
use crate::packager::error::Result;

/// Prints each invocation, secrets redacted, and reports success.
#[derive(Debug, Clone)]
pub struct DryRunRunner {
    output: OutputManager,
}

impl DryRunRunner {
    pub fn new(output: OutputManager) -> Self {
        Self { output }
    }
}

impl ToolRunner for DryRunRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ToolStatus> {
        if let Some(dir) = invocation.working_dir() {
            self.output.indent(&format!("(in {})", dir.display()));
        }
        self.output.indent(&invocation.to_string());
        Ok(ToolStatus::from_code(0))
    }
}
