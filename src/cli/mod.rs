//! Command line interface for x3270-package.
//!
//! Parses arguments, layers configuration, prompts for credentials and runs
//! the pipeline with either the process runner or the dry-run runner.

mod args;
mod output;
pub mod prompt;

pub use args::Args;
pub use output::OutputManager;

use crate::error::{CliError, Result};
use crate::packager::{
    DryRunRunner, FileConfig, Packager, ProcessRunner, ProjectSettings, Settings, SettingsBuilder,
    Verbosity,
};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let output = OutputManager::new(args.verbose, false);
    if let Some(project) = &args.project {
        if ProjectSettings::builtin(project).is_none() {
            output.warn(&format!(
                "{project} is not a built-in project ({}); assuming {project}.dll and {project}.iss",
                ProjectSettings::builtin_names().join(", ")
            ));
        }
    }
    let settings = load_settings(&args).await?;
    output.verbose(&format!(
        "Packaging {} with {}",
        settings.project().name,
        settings.installer_script().display()
    ));

    let credentials = prompt::read_credentials(args.hide_password)?;

    if args.dry_run {
        output.section("Dry run: commands are printed, not executed");
        let runner = DryRunRunner::new(output.clone());
        Packager::new(settings, runner, output).run(&credentials).await?;
    } else {
        let runner = ProcessRunner::new(output.clone());
        Packager::new(settings, runner, output).run(&credentials).await?;
    }

    Ok(0)
}

/// Build settings from the command line and the optional config file.
///
/// Precedence: command line, then configuration file, then built-in
/// project profile and defaults.
pub async fn load_settings(args: &Args) -> Result<Settings> {
    let mut builder = SettingsBuilder::new().verbosity(Verbosity::from_flag(args.verbose));

    if let Some(project) = &args.project {
        builder = builder.project_name(project);
    }

    if let Some(path) = &args.config {
        log::debug!("loading configuration from {}", path.display());
        builder = FileConfig::load(path).await?.apply(builder);
    }

    if let Some(dir) = &args.directory {
        builder = builder.working_dir(dir);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[tokio::test]
    async fn config_file_and_flags_combine() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[project]\nname = \"x3270ifSimple\"\n\n[tools]\nmsbuild = \"C:\\\\VS\\\\MSBuild.exe\""
        )
        .unwrap();

        let path = file.path().to_string_lossy().to_string();
        let args = Args::try_parse_from(["x3270-package", "-v", "--config", path.as_str()]).unwrap();
        let settings = load_settings(&args).await.unwrap();

        assert_eq!(settings.project().name, "x3270ifSimple");
        assert_eq!(settings.tools().msbuild, "C:\\VS\\MSBuild.exe");
        assert_eq!(settings.verbosity(), Verbosity::Verbose);
    }

    #[tokio::test]
    async fn bad_config_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[project]\ndlls = []").unwrap();
        let path = file.path().to_string_lossy().to_string();
        let args = Args::try_parse_from(["x3270-package", "--config", path.as_str()]).unwrap();
        let err = load_settings(&args).await.unwrap_err();
        assert!(err.to_string().contains("no DLLs"));
    }
}
