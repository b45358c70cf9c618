//! FloydHub notebook sessions
//!
//! Builds the `floyd run` command line for a Jupyter session:
//!
//! ```text
//! floyd run --mode jupyter --open --env keras:py2 (--cpu|--gpu) --data <source>:<destination>...
//! ```

use std::fmt;

use crate::shell::{CommandLine, CommandRunner, ShellError};

/// FloydHub environment the session runs in
pub const DEFAULT_ENV: &str = "keras:py2";

/// Datasets mounted into every session: (source, destination)
pub const DEFAULT_DATA_MOUNTS: &[(&str, &str)] =
    &[("bachew/datasets/dogscats/1", "/data-dogscats")];

/// Instance type for the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Machine {
    #[default]
    Cpu,
    Gpu,
}

impl Machine {
    pub fn from_gpu_flag(gpu: bool) -> Self {
        if gpu {
            Machine::Gpu
        } else {
            Machine::Cpu
        }
    }

    /// `floyd run` flag selecting this machine
    pub fn flag(self) -> &'static str {
        match self {
            Machine::Cpu => "--cpu",
            Machine::Gpu => "--gpu",
        }
    }
}

/// Binding of a FloydHub dataset to a path inside the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataMount {
    pub source: String,
    pub destination: String,
}

impl DataMount {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for DataMount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.destination)
    }
}

/// Settings for one `floyd run --mode jupyter` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JupyterLaunch {
    pub env: String,
    pub machine: Machine,
    pub data_mounts: Vec<DataMount>,
}

impl Default for JupyterLaunch {
    fn default() -> Self {
        Self {
            env: DEFAULT_ENV.to_string(),
            machine: Machine::default(),
            data_mounts: DEFAULT_DATA_MOUNTS
                .iter()
                .map(|(source, destination)| DataMount::new(*source, *destination))
                .collect(),
        }
    }
}

impl JupyterLaunch {
    pub fn with_gpu(gpu: bool) -> Self {
        Self {
            machine: Machine::from_gpu_flag(gpu),
            ..Default::default()
        }
    }

    pub fn command(&self) -> CommandLine {
        let mut cmd = CommandLine::new("floyd")
            .args(["run", "--mode", "jupyter", "--open", "--env"])
            .arg(self.env.as_str())
            .arg(self.machine.flag());

        for mount in &self.data_mounts {
            cmd = cmd.arg("--data").arg(mount.to_string());
        }

        cmd
    }
}

/// Start a Jupyter session on FloydHub and wait for `floyd` to exit
pub fn start_jupyter(
    runner: &dyn CommandRunner,
    launch: &JupyterLaunch,
) -> Result<(), ShellError> {
    tracing::debug!(machine = ?launch.machine, env = %launch.env, "starting floyd jupyter");
    runner.run(&launch.command())
}
