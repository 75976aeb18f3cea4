//! Builder for constructing Settings.

use super::{BuildSettings, ProjectSettings, Settings, ToolSettings, Verbosity};
use crate::packager::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use x3270_packager::packager::{SettingsBuilder, Verbosity};
///
/// # fn example() -> x3270_packager::packager::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_name("x3270ifSimple")
///     .verbosity(Verbosity::Verbose)
///     .working_dir("C:\\src\\x3270ifSimple")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project: Option<ProjectSettings>,
    tools: ToolSettings,
    build: BuildSettings,
    verbosity: Verbosity,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Selects a built-in profile, or the naming convention for other names.
    pub fn project_name(mut self, name: &str) -> Self {
        self.project = Some(ProjectSettings::resolve(name));
        self
    }

    /// Sets the project profile explicitly.
    ///
    /// Default: the `x3270is` profile
    pub fn project(mut self, project: ProjectSettings) -> Self {
        self.project = Some(project);
        self
    }

    pub fn tools(mut self, tools: ToolSettings) -> Self {
        self.tools = tools;
        self
    }

    pub fn build_settings(mut self, build: BuildSettings) -> Self {
        self.build = build;
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn working_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.build.working_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Mutable access for layering configuration file values.
    pub(crate) fn project_mut(&mut self) -> &mut ProjectSettings {
        self.project.get_or_insert_with(ProjectSettings::default)
    }

    pub(crate) fn tools_mut(&mut self) -> &mut ToolSettings {
        &mut self.tools
    }

    pub(crate) fn build_mut(&mut self) -> &mut BuildSettings {
        &mut self.build
    }

    pub(crate) fn has_project(&self) -> bool {
        self.project.is_some()
    }

    /// Validates and builds the settings.
    pub fn build(self) -> Result<Settings> {
        let project = self.project.unwrap_or_default();

        if project.name.trim().is_empty() {
            return Err(Error::Config("project name is empty".into()));
        }
        if project.dlls.is_empty() {
            return Err(Error::Config(format!(
                "project '{}' lists no DLLs to sign",
                project.name
            )));
        }
        if let Some(empty) = project
            .dlls
            .iter()
            .chain(&project.companions)
            .find(|file| file.trim().is_empty())
        {
            return Err(Error::Config(format!(
                "project '{}' has an empty artifact entry {empty:?}",
                project.name
            )));
        }
        if project.installer_script == PathBuf::new() {
            return Err(Error::Config(format!(
                "project '{}' has no installer script",
                project.name
            )));
        }

        for (key, value) in [
            ("tools.msbuild", &self.tools.msbuild),
            ("tools.signtool", &self.tools.signtool),
            ("tools.iscc", &self.tools.iscc),
            ("tools.timestamp_url", &self.tools.timestamp_url),
            ("tools.sign_tool_name", &self.tools.sign_tool_name),
            ("tools.sign_template", &self.tools.sign_template),
            ("build.configuration", &self.build.configuration),
            ("build.output_root", &self.build.output_root),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{key} must not be empty")));
            }
        }

        Ok(Settings {
            project,
            tools: self.tools,
            build: self.build,
            verbosity: self.verbosity,
        })
    }
}
