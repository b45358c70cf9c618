use std::path::PathBuf;

/// Errors from running external programs
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("command failed with {status}: {program} {joined}", status = describe_status(*code), joined = args.join(" "))]
    CommandFailed {
        program: String,
        args: Vec<String>,
        /// `None` when the child was terminated by a signal
        code: Option<i32>,
    },
    #[error("{program} is not installed or not on PATH")]
    ProgramNotFound { program: String },
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to change working directory to {path}: {source}", path = path.display())]
    WorkingDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ShellError {
    /// Process exit status to surface for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::CommandFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_status(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "signal".to_string(),
    }
}
