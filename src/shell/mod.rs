//! Shell execution for ff
//!
//! Handles:
//! - Building command lines and rendering them shell-escaped
//! - Tracing every command before it runs
//! - Running commands with inherited stdio, failing on non-zero exit
//! - Scoped working directory changes

mod command;
mod error;
mod runner;
mod workdir;

#[cfg(test)]
pub(crate) mod testing;

pub use command::{quote, render, CommandLine};
pub use error::ShellError;
pub use runner::{trace_line, CommandRunner, SystemRunner};
pub use workdir::WorkingDir;
