//! fast.ai course materials
//!
//! Keeps `<root>/courses` in sync with the upstream repository and installs
//! its Python requirements into the active environment.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::shell::{CommandLine, CommandRunner, ShellError, WorkingDir};

/// Upstream course-materials repository
pub const COURSES_URL: &str = "https://github.com/fastai/courses.git";

/// Directory name of the local clone, relative to the project root
pub const COURSES_DIR: &str = "courses";

/// Branch pulled when refreshing an existing clone
pub const COURSES_BRANCH: &str = "master";

/// Local clone location: `<root>/courses`
pub fn courses_dir(config: &Config) -> PathBuf {
    config.path([COURSES_DIR])
}

/// Clone or refresh the course materials, then install their requirements
///
/// An existing clone is cleaned of untracked files and pulled from inside
/// the directory. A missing one is shallow-cloned. The first failing
/// command aborts the rest.
pub fn setup(config: &Config, runner: &dyn CommandRunner) -> Result<(), ShellError> {
    let dir = courses_dir(config);

    if dir.is_dir() {
        refresh(&dir, runner)?;
    } else {
        clone(&dir, runner)?;
    }

    install_requirements(&dir, runner)
}

fn refresh(dir: &Path, runner: &dyn CommandRunner) -> Result<(), ShellError> {
    let _cwd = WorkingDir::enter(dir)?;
    runner.run(&CommandLine::new("git").args(["clean", "-fd"]))?;
    runner.run(&CommandLine::new("git").args(["pull", "origin", COURSES_BRANCH]))
}

fn clone(dir: &Path, runner: &dyn CommandRunner) -> Result<(), ShellError> {
    let cmd = CommandLine::new("git")
        .args(["clone", "--depth", "1", COURSES_URL])
        .arg(dir.to_string_lossy());
    runner.run(&cmd)
}

fn install_requirements(dir: &Path, runner: &dyn CommandRunner) -> Result<(), ShellError> {
    let requirements = dir.join("requirements.txt");
    let cmd = CommandLine::new("pip")
        .args(["install", "-r"])
        .arg(requirements.to_string_lossy());
    runner.run(&cmd)
}
