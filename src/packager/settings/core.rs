//! Core Settings struct and artifact layout.

use super::{Arch, BuildSettings, ProjectSettings, ToolSettings, Verbosity};
use std::path::{Path, PathBuf};

/// Everything a packaging run needs except the credentials.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder), which
/// validates it.
#[derive(Debug, Clone)]
pub struct Settings {
    pub(super) project: ProjectSettings,
    pub(super) tools: ToolSettings,
    pub(super) build: BuildSettings,
    pub(super) verbosity: Verbosity,
}

impl Settings {
    pub fn project(&self) -> &ProjectSettings {
        &self.project
    }

    pub fn tools(&self) -> &ToolSettings {
        &self.tools
    }

    pub fn build(&self) -> &BuildSettings {
        &self.build
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn installer_script(&self) -> &Path {
        &self.project.installer_script
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.build.working_dir.as_deref()
    }

    /// Output directory for one architecture, e.g. `bin\x64\Release`.
    pub fn output_dir(&self, arch: Arch) -> String {
        format!(
            "{}\\{}\\{}",
            self.build.output_root, arch, self.build.configuration
        )
    }

    /// Path of one produced file for one architecture.
    ///
    /// `{arch}` inside `relative` expands to the architecture name.
    pub fn artifact_path(&self, arch: Arch, relative: &str) -> PathBuf {
        let relative = relative.replace("{arch}", arch.as_str());
        PathBuf::from(format!("{}\\{}", self.output_dir(arch), relative))
    }

    /// Every binary the signing step signs, in signing order.
    ///
    /// DLLs for x86 then x64, followed by companion executables for x86
    /// then x64.
    pub fn artifacts(&self) -> Vec<PathBuf> {
        let dlls = self.project.dlls.iter();
        let companions = self.project.companions.iter();
        dlls.chain(companions)
            .flat_map(|file| Arch::ALL.map(|arch| self.artifact_path(arch, file)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::packager::settings::SettingsBuilder;
    use std::path::PathBuf;

    #[test]
    fn x3270is_signs_dlls_before_executables() {
        let settings = SettingsBuilder::new().project_name("x3270is").build().unwrap();
        assert_eq!(
            settings.artifacts(),
            vec![
                PathBuf::from("bin\\x86\\Release\\x3270is.dll"),
                PathBuf::from("bin\\x64\\Release\\x3270is.dll"),
                PathBuf::from("bin\\x86\\Release\\Import\\x86\\s3270.exe"),
                PathBuf::from("bin\\x64\\Release\\Import\\x64\\s3270.exe"),
            ]
        );
    }

    #[test]
    fn x3270if_simple_signs_only_dlls() {
        let settings = SettingsBuilder::new()
            .project_name("x3270ifSimple")
            .build()
            .unwrap();
        assert_eq!(
            settings.artifacts(),
            vec![
                PathBuf::from("bin\\x86\\Release\\x3270ifSimple.dll"),
                PathBuf::from("bin\\x64\\Release\\x3270ifSimple.dll"),
            ]
        );
    }
}
