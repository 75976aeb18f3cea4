//! Direct Authenticode signing of the built binaries.

use super::Invocation;
use crate::packager::{Credentials, Phase, REDACTED, Settings};

/// `signtool.exe sign /a <v> /f <cert> /p <password> [/t <url>] <files...>`
///
/// Files come from [`Settings::artifacts`], so every binary of both
/// architectures is signed in one call.
pub fn invocation(settings: &Settings, credentials: &Credentials) -> Invocation {
    let tools = settings.tools();
    let mut invocation = Invocation::new(Phase::Sign, &tools.signtool)
        .args([
            "sign",
            "/a",
            settings.verbosity().signtool_flag(),
            "/f",
            credentials.certificate(),
            "/p",
        ])
        .masked_arg(credentials.password(), REDACTED)
        .current_dir(settings.working_dir());

    if settings.project().timestamp_direct_signing {
        invocation = invocation.args(["/t", tools.timestamp_url.as_str()]);
    }

    invocation.args(
        settings
            .artifacts()
            .iter()
            .map(|path| path.display().to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packager::{SettingsBuilder, Verbosity};

    #[test]
    fn x3270is_verbose_signs_with_timestamp() {
        let settings = SettingsBuilder::new()
            .project_name("x3270is")
            .verbosity(Verbosity::Verbose)
            .build()
            .unwrap();
        let inv = invocation(&settings, &Credentials::new("C:\\cert.pfx", "secret"));
        assert_eq!(inv.program(), "signtool.exe");
        assert_eq!(
            inv.arguments(),
            [
                "sign",
                "/a",
                "/v",
                "/f",
                "C:\\cert.pfx",
                "/p",
                "secret",
                "/t",
                "http://timestamp.comodoca.com/authenticode",
                "bin\\x86\\Release\\x3270is.dll",
                "bin\\x64\\Release\\x3270is.dll",
                "bin\\x86\\Release\\Import\\x86\\s3270.exe",
                "bin\\x64\\Release\\Import\\x64\\s3270.exe",
            ]
        );
    }

    #[test]
    fn x3270if_simple_quiet_without_timestamp() {
        let settings = SettingsBuilder::new()
            .project_name("x3270ifSimple")
            .build()
            .unwrap();
        let inv = invocation(&settings, &Credentials::new("cert.pfx", "pw"));
        assert_eq!(
            inv.arguments(),
            [
                "sign",
                "/a",
                "/q",
                "/f",
                "cert.pfx",
                "/p",
                "pw",
                "bin\\x86\\Release\\x3270ifSimple.dll",
                "bin\\x64\\Release\\x3270ifSimple.dll",
            ]
        );
        assert!(!inv.to_string().contains(" pw "));
    }

    #[test]
    fn short_password_masks_only_its_own_argument() {
        let settings = SettingsBuilder::new()
            .project_name("x3270ifSimple")
            .build()
            .unwrap();
        let inv = invocation(&settings, &Credentials::new("a.pfx", "a"));
        assert!(
            inv.to_string()
                .starts_with("signtool.exe sign /a /q /f a.pfx /p ******** bin\\x86\\Release\\x3270ifSimple.dll")
        );
    }
}
