//! Build, sign and package pipeline.

use super::{
    Arch, Credentials, Phase, Settings,
    error::{Error, Result},
    tools::{Invocation, ToolRunner, iscc, msbuild, signtool},
};
use crate::cli::OutputManager;
use std::path::PathBuf;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    /// Binaries signed in place.
    pub signed: Vec<PathBuf>,
    /// Script iscc compiled into the installer.
    pub installer_script: PathBuf,
}

/// Runs the packaging pipeline.
///
/// Steps run strictly in order: x86 build, x64 build, signing, installer.
/// The first tool that exits unsuccessfully ends the run with
/// [`Error::ToolFailed`]; nothing after it runs and nothing before it is
/// undone.
///
/// # Examples
///
/// ```no_run
/// use x3270_packager::cli::OutputManager;
/// use x3270_packager::packager::{Credentials, Packager, ProcessRunner, SettingsBuilder};
///
/// # async fn example() -> x3270_packager::packager::Result<()> {
/// let settings = SettingsBuilder::new().project_name("x3270is").build()?;
/// let output = OutputManager::new(false, false);
/// let packager = Packager::new(settings, ProcessRunner::new(output.clone()), output);
/// let report = packager.run(&Credentials::new("C:\\cert.pfx", "secret")).await?;
/// println!("signed {} files", report.signed.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Packager<R> {
    settings: Settings,
    runner: R,
    output: OutputManager,
}

impl<R: ToolRunner> Packager<R> {
    pub fn new(settings: Settings, runner: R, output: OutputManager) -> Self {
        Self {
            settings,
            runner,
            output,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Every command the run executes, in order.
    pub fn plan(&self, credentials: &Credentials) -> Result<Vec<Invocation>> {
        let mut plan: Vec<Invocation> = Arch::ALL
            .iter()
            .map(|&arch| msbuild::invocation(&self.settings, arch))
            .collect();
        plan.push(signtool::invocation(&self.settings, credentials));
        plan.push(iscc::invocation(&self.settings, credentials)?);
        Ok(plan)
    }

    /// Build both architectures, sign the binaries, compile the installer.
    pub async fn run(&self, credentials: &Credentials) -> Result<PackageReport> {
        let project = self.settings.project();
        log::info!(
            "packaging {} ({} mode)",
            project.name,
            if self.settings.verbosity().is_verbose() { "verbose" } else { "quiet" }
        );

        for invocation in self.plan(credentials)? {
            let title = invocation.phase().banner(project);
            self.output.banner(&project.banner_style.render(&title));
            self.run_step(&invocation).await?;
        }

        let report = PackageReport {
            signed: self.settings.artifacts(),
            installer_script: self.settings.installer_script().to_path_buf(),
        };
        self.output.success(&format!(
            "Packaged {} from {}",
            project.name,
            report.installer_script.display()
        ));
        Ok(report)
    }

    async fn run_step(&self, invocation: &Invocation) -> Result<()> {
        let phase: Phase = invocation.phase();
        let status = self.runner.run(invocation).await?;

        if !status.success() {
            log::error!("{phase} failed: {invocation}");
            return Err(Error::ToolFailed {
                phase,
                tool: invocation.program().to_string(),
                code: status.code(),
            });
        }

        log::info!("{phase} complete");
        Ok(())
    }
}
