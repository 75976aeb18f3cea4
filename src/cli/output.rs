//! Terminal output for banners, status lines and streamed tool output.

use console::style;

/// Colored user-facing output.
///
/// Banners and status go to stdout, warnings to stderr. `quiet` suppresses
/// everything except warnings and tool stderr.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Phase banner, already framed the way the project prints them.
    pub fn banner(&self, banner: &str) {
        if !self.quiet {
            println!("{}", style(banner).cyan().bold());
        }
    }

    pub fn section(&self, title: &str) {
        if !self.quiet {
            println!("{}", style(title).bold());
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {message}", style("✓").green().bold());
        }
    }

    /// Only shown in verbose mode.
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("{}", style(message).dim());
        }
    }

    pub fn indent(&self, message: &str) {
        if !self.quiet {
            println!("  {message}");
        }
    }

    pub fn warn(&self, message: &str) {
        eprintln!("{} {message}", style("warning:").yellow().bold().for_stderr());
    }

    /// A line a running tool wrote to stdout.
    pub fn tool_line(&self, line: &str) {
        self.indent(line);
    }

    /// A line a running tool wrote to stderr.
    pub fn tool_error_line(&self, line: &str) {
        eprintln!("  {line}");
    }
}
