//! msbuild release builds.

use super::Invocation;
use crate::packager::{Arch, Phase, Settings};

/// `msbuild /t:Rebuild /p:Configuration=<cfg>;Platform=<arch> /nologo <v> [solution]`
pub fn invocation(settings: &Settings, arch: Arch) -> Invocation {
    let build = settings.build();
    let mut invocation = Invocation::new(Phase::Build(arch), &settings.tools().msbuild)
        .args([
            "/t:Rebuild".to_string(),
            format!("/p:Configuration={};Platform={}", build.configuration, arch),
            "/nologo".to_string(),
            settings.verbosity().msbuild_flag().to_string(),
        ])
        .current_dir(settings.working_dir());

    if let Some(solution) = &build.solution {
        invocation = invocation.arg(solution.display().to_string());
    }

    invocation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packager::{BuildSettings, SettingsBuilder, Verbosity};

    #[test]
    fn quiet_x86_release() {
        let settings = SettingsBuilder::new().build().unwrap();
        let inv = invocation(&settings, Arch::X86);
        assert_eq!(inv.program(), "msbuild");
        assert_eq!(
            inv.arguments(),
            ["/t:Rebuild", "/p:Configuration=Release;Platform=x86", "/nologo", "/v:q"]
        );
        assert_eq!(inv.phase(), Phase::Build(Arch::X86));
    }

    #[test]
    fn verbose_x64_with_solution() {
        let settings = SettingsBuilder::new()
            .verbosity(Verbosity::Verbose)
            .build_settings(BuildSettings {
                solution: Some("x3270is.sln".into()),
                ..BuildSettings::default()
            })
            .working_dir("work")
            .build()
            .unwrap();
        let inv = invocation(&settings, Arch::X64);
        assert_eq!(
            inv.arguments(),
            [
                "/t:Rebuild",
                "/p:Configuration=Release;Platform=x64",
                "/nologo",
                "/v:n",
                "x3270is.sln"
            ]
        );
        assert_eq!(inv.working_dir(), Some(std::path::Path::new("work")));
    }
}
