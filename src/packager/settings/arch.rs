//! Target architectures.

use std::fmt;

/// CPU architecture a release build is produced for.
///
/// The set is fixed; every run builds both, x86 first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Arch {
    /// 32-bit x86
    X86,
    /// 64-bit x86-64
    X64,
}

impl Arch {
    /// Build order used by every run.
    pub const ALL: [Arch; 2] = [Arch::X86, Arch::X64];

    /// Platform name as msbuild and the output directory layout spell it.
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::X86 => "x86",
            Arch::X64 => "x64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
