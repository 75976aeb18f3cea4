//! Pipeline phases.

use super::{Arch, ProjectSettings};
use std::fmt;

/// One step of a packaging run, in execution order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// msbuild rebuild for one architecture
    Build(Arch),
    /// signtool over every produced binary
    Sign,
    /// iscc compiling the installer
    Package,
}

impl Phase {
    /// Banner text shown before the phase starts.
    pub fn banner(self, project: &ProjectSettings) -> String {
        match self {
            Phase::Build(arch) => format!("Building {arch} code"),
            Phase::Sign if project.has_companions() => "Signing DLLs and EXEs".to_string(),
            Phase::Sign => "Signing DLLs".to_string(),
            Phase::Package => "Building installer".to_string(),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Build(arch) => write!(f, "{arch} build"),
            Phase::Sign => f.write_str("signing"),
            Phase::Package => f.write_str("packaging"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banners_follow_project_contents() {
        let is = ProjectSettings::resolve("x3270is");
        let simple = ProjectSettings::resolve("x3270ifSimple");
        assert_eq!(Phase::Build(Arch::X86).banner(&is), "Building x86 code");
        assert_eq!(Phase::Sign.banner(&is), "Signing DLLs and EXEs");
        assert_eq!(Phase::Sign.banner(&simple), "Signing DLLs");
        assert_eq!(Phase::Package.banner(&simple), "Building installer");
    }
}
