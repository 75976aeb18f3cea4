//! Per-library packaging profile.

use serde::Deserialize;
use std::path::PathBuf;

/// Name of the project packaged when none is given.
pub const DEFAULT_PROJECT: &str = "x3270is";

/// How phase banners are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerStyle {
    /// `***** Building x86 code *****`
    #[default]
    Framed,
    /// `Building x86 code.`
    Plain,
}

impl BannerStyle {
    pub fn render(self, title: &str) -> String {
        match self {
            BannerStyle::Framed => format!("***** {title} *****"),
            BannerStyle::Plain => format!("{title}."),
        }
    }
}

/// What gets signed and which installer script packages it.
///
/// Projects follow a naming convention: `<name>.dll` built into
/// `bin\<arch>\<configuration>\`, packaged by `<name>.iss`. The built-in
/// profiles only record where a project departs from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    /// Project name, used for banners and the naming convention.
    pub name: String,

    /// DLL file names, relative to each architecture's output directory.
    pub dlls: Vec<String>,

    /// Executables shipped next to the DLLs, relative to each
    /// architecture's output directory. `{arch}` expands to `x86`/`x64`.
    ///
    /// Default: empty
    pub companions: Vec<String>,

    /// Inno Setup script compiled into the installer.
    pub installer_script: PathBuf,

    /// Whether the direct signing call passes a timestamp server.
    ///
    /// The installer's signing template always timestamps.
    pub timestamp_direct_signing: bool,

    /// Default: [`BannerStyle::Framed`]
    pub banner_style: BannerStyle,
}

impl ProjectSettings {
    /// Profile derived purely from the naming convention.
    pub fn conventional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            dlls: vec![format!("{name}.dll")],
            companions: Vec::new(),
            installer_script: PathBuf::from(format!("{name}.iss")),
            timestamp_direct_signing: true,
            banner_style: BannerStyle::default(),
        }
    }

    /// Built-in profile for `name`, if there is one.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "x3270is" => Some(Self {
                companions: vec!["Import\\{arch}\\s3270.exe".to_string()],
                ..Self::conventional(name)
            }),
            "x3270ifSimple" => Some(Self {
                timestamp_direct_signing: false,
                banner_style: BannerStyle::Plain,
                ..Self::conventional(name)
            }),
            _ => None,
        }
    }

    /// Built-in profile, or the naming convention for anything else.
    pub fn resolve(name: &str) -> Self {
        Self::builtin(name).unwrap_or_else(|| Self::conventional(name))
    }

    /// Names of the built-in profiles.
    pub fn builtin_names() -> &'static [&'static str] {
        &["x3270is", "x3270ifSimple"]
    }

    /// Whether any executables are signed alongside the DLLs.
    pub fn has_companions(&self) -> bool {
        !self.companions.is_empty()
    }
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self::resolve(DEFAULT_PROJECT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x3270is_ships_s3270() {
        let project = ProjectSettings::builtin("x3270is").unwrap();
        assert_eq!(project.dlls, vec!["x3270is.dll"]);
        assert_eq!(project.companions, vec!["Import\\{arch}\\s3270.exe"]);
        assert_eq!(project.installer_script, PathBuf::from("x3270is.iss"));
        assert!(project.timestamp_direct_signing);
    }

    #[test]
    fn x3270if_simple_signs_without_timestamp() {
        let project = ProjectSettings::builtin("x3270ifSimple").unwrap();
        assert_eq!(project.dlls, vec!["x3270ifSimple.dll"]);
        assert!(!project.has_companions());
        assert!(!project.timestamp_direct_signing);
        assert_eq!(project.banner_style, BannerStyle::Plain);
    }

    #[test]
    fn banner_styles() {
        assert_eq!(BannerStyle::Framed.render("Signing DLLs"), "***** Signing DLLs *****");
        assert_eq!(BannerStyle::Plain.render("Signing DLLs"), "Signing DLLs.");
        assert_eq!(ProjectSettings::resolve("Widget").banner_style, BannerStyle::Framed);
    }

    #[test]
    fn unknown_names_follow_convention() {
        let project = ProjectSettings::resolve("Widget");
        assert!(ProjectSettings::builtin("Widget").is_none());
        assert_eq!(project.dlls, vec!["Widget.dll"]);
        assert_eq!(project.installer_script, PathBuf::from("Widget.iss"));
    }

    #[test]
    fn builtin_names_resolve() {
        for name in ProjectSettings::builtin_names() {
            assert!(ProjectSettings::builtin(name).is_some());
        }
    }
}
