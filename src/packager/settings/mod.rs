//! Configuration for packaging runs.
//!
//! Built-in project profiles, tool locations, the verbosity mapping and the
//! optional TOML file that overrides them, assembled through
//! [`SettingsBuilder`].

mod arch;
mod builder;
mod core;
mod file;
mod project;
mod tools;
mod verbosity;

pub use arch::Arch;
pub use builder::SettingsBuilder;
pub use self::core::Settings;
pub use file::{BuildSection, FileConfig, ProjectSection, ToolsSection};
pub use project::{BannerStyle, DEFAULT_PROJECT, ProjectSettings};
pub use tools::{
    BuildSettings, DEFAULT_ISCC, DEFAULT_SIGN_TEMPLATE, DEFAULT_TIMESTAMP_URL, ToolSettings,
};
pub use verbosity::Verbosity;
