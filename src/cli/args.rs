//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Build, sign and package the x3270 .NET libraries
#[derive(Parser, Debug)]
#[command(
    name = "x3270-package",
    version,
    about = "Build, sign and package the x3270 .NET libraries",
    long_about = "Rebuilds the solution for x86 and x64 with msbuild, signs the produced binaries \
with signtool, then compiles the Inno Setup installer, which re-signs the files it packages.

The certificate path and password are prompted for on every run and never stored.

Usage:
  x3270-package
  x3270-package -v --project x3270ifSimple
  x3270-package --config package.toml --dry-run

Any failing tool stops the run; its exit code becomes this program's exit code."
)]
pub struct Args {
    /// Forward verbose flags to msbuild, signtool and iscc
    #[arg(short, long)]
    pub verbose: bool,

    /// Project to package (built-in: x3270is, x3270ifSimple)
    ///
    /// Other names assume <NAME>.dll and <NAME>.iss. Defaults to x3270is, or
    /// to project.name from the configuration file.
    #[arg(short, long, value_name = "NAME")]
    pub project: Option<String>,

    /// TOML file overriding project, tool and build settings
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory to run the tools in
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Print the commands that would run, without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Do not echo the password while it is typed
    #[arg(long)]
    pub hide_password: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Some(project) = &self.project {
            if project.trim().is_empty() {
                return Err("Project name cannot be empty".to_string());
            }
        }

        if let Some(dir) = &self.directory {
            if !dir.is_dir() {
                return Err(format!("Directory not found: {}", dir.display()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_verbose_flag() {
        let args = Args::try_parse_from(["x3270-package", "-v"]).unwrap();
        assert!(args.verbose);
        assert!(args.project.is_none());
        assert!(!args.dry_run);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn full_surface() {
        let args = Args::try_parse_from([
            "x3270-package",
            "--project",
            "x3270ifSimple",
            "--config",
            "package.toml",
            "--dry-run",
            "--hide-password",
        ])
        .unwrap();
        assert_eq!(args.project.as_deref(), Some("x3270ifSimple"));
        assert_eq!(args.config, Some(PathBuf::from("package.toml")));
        assert!(args.dry_run && args.hide_password && !args.verbose);
    }

    #[test]
    fn empty_project_rejected() {
        let args = Args::try_parse_from(["x3270-package", "--project", " "]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn missing_directory_rejected() {
        let args =
            Args::try_parse_from(["x3270-package", "-C", "/definitely/not/here/x3270"]).unwrap();
        assert!(args.validate().unwrap_err().contains("Directory not found"));
    }
}
