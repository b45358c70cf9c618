use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{CommandLine, ShellError};

/// Runs external commands to completion
pub trait CommandRunner {
    /// Run `cmd`, blocking until it exits. Non-zero exit is an error.
    fn run(&self, cmd: &CommandLine) -> Result<(), ShellError>;
}

/// Spawns real processes with the parent's stdin/stdout/stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &CommandLine) -> Result<(), ShellError> {
        let cwd = match cmd.get_current_dir() {
            Some(dir) => dir.to_path_buf(),
            None => env::current_dir().map_err(|source| ShellError::WorkingDir {
                path: PathBuf::from("."),
                source,
            })?,
        };

        println!("{}", trace_line(&cwd, cmd));

        let program = which::which(cmd.program()).map_err(|_| ShellError::ProgramNotFound {
            program: cmd.program().to_string(),
        })?;
        tracing::debug!(program = %program.display(), "resolved executable");

        let mut command = Command::new(&program);
        command.args(cmd.get_args());
        if let Some(dir) = cmd.get_current_dir() {
            command.current_dir(dir);
        }

        let status = command.status().map_err(|source| ShellError::Spawn {
            program: cmd.program().to_string(),
            source,
        })?;
        tracing::debug!(%status, command = %cmd, "command exited");

        if !status.success() {
            return Err(ShellError::CommandFailed {
                program: cmd.program().to_string(),
                args: cmd.get_args().to_vec(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// Trace printed before a command runs: the working directory (bold), then the command
pub fn trace_line(cwd: &Path, cmd: &CommandLine) -> String {
    format!("{}\n  {}", format!("{}:", cwd.display()).bold(), cmd)
}
