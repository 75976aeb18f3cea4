//! Verbose/quiet flag mapping for each external tool.

/// Output level forwarded to the build, signing and installer tools.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Verbosity {
    /// Normal tool output
    Verbose,
    /// Minimal tool output
    #[default]
    Quiet,
}

impl Verbosity {
    pub fn from_flag(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        }
    }

    pub fn is_verbose(self) -> bool {
        self == Verbosity::Verbose
    }

    /// msbuild `/v:` switch.
    pub fn msbuild_flag(self) -> &'static str {
        match self {
            Verbosity::Verbose => "/v:n",
            Verbosity::Quiet => "/v:q",
        }
    }

    /// signtool switch, also used inside the installer's signing template.
    pub fn signtool_flag(self) -> &'static str {
        match self {
            Verbosity::Verbose => "/v",
            Verbosity::Quiet => "/q",
        }
    }

    /// iscc switch. Verbose mode passes nothing.
    pub fn iscc_flag(self) -> Option<&'static str> {
        match self {
            Verbosity::Verbose => None,
            Verbosity::Quiet => Some("/Qp"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flags() {
        let v = Verbosity::from_flag(true);
        assert_eq!(v.msbuild_flag(), "/v:n");
        assert_eq!(v.signtool_flag(), "/v");
        assert_eq!(v.iscc_flag(), None);
    }

    #[test]
    fn quiet_flags() {
        let v = Verbosity::from_flag(false);
        assert_eq!(v.msbuild_flag(), "/v:q");
        assert_eq!(v.signtool_flag(), "/q");
        assert_eq!(v.iscc_flag(), Some("/Qp"));
    }
}
