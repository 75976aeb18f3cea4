//! Optional TOML configuration file.
//!
//! Every field is optional and overrides the selected project profile or
//! the built-in defaults:
//!
//! ```toml
//! [project]
//! name = "x3270is"
//! dlls = ["x3270is.dll"]
//! companions = ["Import\\{arch}\\s3270.exe"]
//! installer_script = "x3270is.iss"
//! timestamp_direct_signing = true
//! banner_style = "framed"
//!
//! [tools]
//! msbuild = "msbuild"
//! signtool = "signtool.exe"
//! iscc = "C:\\Program Files (x86)\\Inno Setup 5\\iscc.exe"
//! timestamp_url = "http://timestamp.comodoca.com/authenticode"
//!
//! [build]
//! configuration = "Release"
//! solution = "x3270is.sln"
//! ```
//!
//! Credentials are never read from this file.

use super::{BannerStyle, ProjectSettings, SettingsBuilder};
use crate::packager::error::{Context, ErrorExt, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub tools: ToolsSection,
    #[serde(default)]
    pub build: BuildSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    pub name: Option<String>,
    pub dlls: Option<Vec<String>>,
    pub companions: Option<Vec<String>>,
    pub installer_script: Option<PathBuf>,
    pub timestamp_direct_signing: Option<bool>,
    pub banner_style: Option<BannerStyle>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    pub msbuild: Option<String>,
    pub signtool: Option<String>,
    pub iscc: Option<String>,
    pub timestamp_url: Option<String>,
    pub sign_tool_name: Option<String>,
    pub sign_template: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    pub configuration: Option<String>,
    pub solution: Option<PathBuf>,
    pub output_root: Option<String>,
}

impl FileConfig {
    /// Parse configuration from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file.
    pub async fn load(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .fs_context("reading configuration file", path)?;
        Self::parse(&text).context(format!("parsing {}", path.display()))
    }

    /// Layer this file over `builder`.
    ///
    /// A project already chosen on the builder wins over `project.name`;
    /// the remaining `[project]` keys still override that profile.
    pub fn apply(self, mut builder: SettingsBuilder) -> SettingsBuilder {
        let FileConfig {
            project,
            tools,
            build,
        } = self;

        if let Some(name) = &project.name {
            if builder.has_project() {
                log::debug!("project chosen on the command line; ignoring project.name = {name:?}");
            } else {
                builder = builder.project(ProjectSettings::resolve(name));
            }
        }

        let target = builder.project_mut();
        set(&mut target.dlls, project.dlls);
        set(&mut target.companions, project.companions);
        set(&mut target.installer_script, project.installer_script);
        set(
            &mut target.timestamp_direct_signing,
            project.timestamp_direct_signing,
        );
        set(&mut target.banner_style, project.banner_style);

        let target = builder.tools_mut();
        set(&mut target.msbuild, tools.msbuild);
        set(&mut target.signtool, tools.signtool);
        set(&mut target.iscc, tools.iscc);
        set(&mut target.timestamp_url, tools.timestamp_url);
        set(&mut target.sign_tool_name, tools.sign_tool_name);
        set(&mut target.sign_template, tools.sign_template);

        let target = builder.build_mut();
        set(&mut target.configuration, build.configuration);
        set(&mut target.output_root, build.output_root);
        if build.solution.is_some() {
            target.solution = build.solution;
        }

        builder
    }
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
