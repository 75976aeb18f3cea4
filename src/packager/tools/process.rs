//! Child process execution for external tools.

use super::{Invocation, ToolRunner, ToolStatus};
use crate::cli::OutputManager;
use crate::packager::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

/// Runs tools as child processes, streaming their output to the terminal.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    output: OutputManager,
}

impl ProcessRunner {
    pub fn new(output: OutputManager) -> Self {
        Self { output }
    }
}

impl ToolRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ToolStatus> {
        let program = resolve_program(invocation.program(), invocation.working_dir())?;
        log::debug!("running {invocation} ({})", program.display());

        let mut command = Command::new(&program);
        command
            .args(invocation.arguments())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = invocation.working_dir() {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|error| Error::CommandFailed {
            command: invocation.program().to_string(),
            error,
        })?;

        // Stream both stdout and stderr concurrently
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        tokio::join!(
            async {
                if let Some(stdout) = stdout {
                    stream_lines(stdout, |line| self.output.tool_line(line)).await;
                }
            },
            async {
                if let Some(stderr) = stderr {
                    stream_lines(stderr, |line| self.output.tool_error_line(line)).await;
                }
            }
        );

        let status = child.wait().await.map_err(|error| Error::CommandFailed {
            command: invocation.program().to_string(),
            error,
        })?;

        log::debug!("{} exited with {:?}", invocation.program(), status.code());
        Ok(ToolStatus::from(status))
    }
}

/// Forward every line of `pipe` to `emit` until EOF.
///
/// Tools write in the console code page, so lines are decoded lossily. The
/// pipe is read to the end even when a line cannot be shown; closing it
/// early would break the tool's next write.
async fn stream_lines<R: AsyncRead + Unpin>(pipe: R, mut emit: impl FnMut(&str)) {
    let mut reader = BufReader::new(pipe);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                emit(line.trim_end_matches(['\r', '\n']));
            }
            Err(e) => {
                log::debug!("tool output could not be read: {e}; discarding the rest");
                if let Err(e) = tokio::io::copy(&mut reader, &mut tokio::io::sink()).await {
                    log::debug!("draining tool output failed: {e}");
                }
                break;
            }
        }
    }
}

/// Locate a program: explicit paths are checked as given, bare names are
/// looked up on `PATH`. Relative paths are taken from the working directory
/// and returned joined to it, since the child's `current_dir` does not apply
/// to the program lookup on every platform.
fn resolve_program(program: &str, working_dir: Option<&Path>) -> Result<PathBuf> {
    if program.contains(['/', '\\']) {
        let path = PathBuf::from(program);
        let candidate = match working_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        };
        return if candidate.is_file() {
            Ok(candidate)
        } else {
            Err(Error::ToolNotFound {
                tool: program.to_string(),
                hint: "the configured path does not exist; set it in the [tools] section of the configuration file".to_string(),
            })
        };
    }

    which::which(program).map_err(|e| Error::ToolNotFound {
        tool: program.to_string(),
        hint: format!("{e}; add it to PATH or set its location in the [tools] section of the configuration file"),
    })
}
