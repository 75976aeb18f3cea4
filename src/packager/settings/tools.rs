//! External tool locations and build configuration.

use std::path::PathBuf;

/// Default timestamp server for Authenticode signatures.
pub const DEFAULT_TIMESTAMP_URL: &str = "http://timestamp.comodoca.com/authenticode";

/// Default Inno Setup 5 compiler location.
pub const DEFAULT_ISCC: &str = "C:\\Program Files (x86)\\Inno Setup 5\\iscc.exe";

/// Signing command handed to iscc through `/s<name>=...`.
///
/// `$q` and `$f` are left for iscc to substitute per packaged file.
pub const DEFAULT_SIGN_TEMPLATE: &str = "{{signtool}} sign {{verbosity}} /a /f $q{{cert}}$q /t {{timestamp_url}} /p {{password}} $f";

/// Programs invoked by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSettings {
    /// Build tool.
    ///
    /// Default: `msbuild`
    pub msbuild: String,

    /// Code signing tool.
    ///
    /// Default: `signtool.exe`
    pub signtool: String,

    /// Inno Setup command-line compiler.
    pub iscc: String,

    /// Authenticode timestamp server.
    pub timestamp_url: String,

    /// Name the installer script uses for its `SignTool=` directive.
    ///
    /// Default: `signtool`
    pub sign_tool_name: String,

    /// Handlebars template for the command iscc runs to sign packaged files.
    ///
    /// Variables: `signtool`, `verbosity`, `cert`, `password`, `timestamp_url`.
    pub sign_template: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            msbuild: "msbuild".to_string(),
            signtool: "signtool.exe".to_string(),
            iscc: DEFAULT_ISCC.to_string(),
            timestamp_url: DEFAULT_TIMESTAMP_URL.to_string(),
            sign_tool_name: "signtool".to_string(),
            sign_template: DEFAULT_SIGN_TEMPLATE.to_string(),
        }
    }
}

/// msbuild configuration and output layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    /// Build configuration.
    ///
    /// Default: `Release`
    pub configuration: String,

    /// Solution or project file; msbuild picks the one in the working
    /// directory when unset.
    pub solution: Option<PathBuf>,

    /// Root of the per-architecture output tree.
    ///
    /// Default: `bin`
    pub output_root: String,

    /// Directory every tool runs in; the current directory when unset.
    pub working_dir: Option<PathBuf>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            configuration: "Release".to_string(),
            solution: None,
            output_root: "bin".to_string(),
            working_dir: None,
        }
    }
}
