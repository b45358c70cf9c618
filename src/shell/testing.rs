//! Test doubles for code that runs external commands

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::Mutex;

use super::{CommandLine, CommandRunner, ShellError};

/// Tests that touch the process working directory hold this lock
pub(crate) static CWD_LOCK: Mutex<()> = Mutex::new(());

/// One command seen by [`RecordingRunner`]
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub argv: Vec<String>,
    /// Directory the command would have run in
    pub cwd: PathBuf,
}

/// Records commands instead of running them; optionally fails one of them
#[derive(Debug, Default)]
pub(crate) struct RecordingRunner {
    calls: RefCell<Vec<RecordedCall>>,
    fail_on: Option<(usize, i32)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `index`th call (0-based) with exit `code`
    pub fn failing_on(index: usize, code: i32) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on: Some((index, code)),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn argvs(&self) -> Vec<Vec<String>> {
        self.calls.borrow().iter().map(|c| c.argv.clone()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, cmd: &CommandLine) -> Result<(), ShellError> {
        let cwd = match cmd.get_current_dir() {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().unwrap_or_default(),
        };

        let index = {
            let mut calls = self.calls.borrow_mut();
            calls.push(RecordedCall {
                argv: cmd.argv(),
                cwd,
            });
            calls.len() - 1
        };

        match self.fail_on {
            Some((fail_index, code)) if fail_index == index => Err(ShellError::CommandFailed {
                program: cmd.program().to_string(),
                args: cmd.get_args().to_vec(),
                code: Some(code),
            }),
            _ => Ok(()),
        }
    }
}
