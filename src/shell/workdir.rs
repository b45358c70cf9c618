use std::env;
use std::path::{Path, PathBuf};

use super::ShellError;

/// Scoped change of the process working directory
///
/// The previous directory is restored when the guard drops, including on
/// early return through `?`.
#[derive(Debug)]
pub struct WorkingDir {
    original: PathBuf,
}

impl WorkingDir {
    pub fn enter(path: &Path) -> Result<Self, ShellError> {
        let original = env::current_dir().map_err(|source| ShellError::WorkingDir {
            path: PathBuf::from("."),
            source,
        })?;

        env::set_current_dir(path).map_err(|source| ShellError::WorkingDir {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(from = %original.display(), to = %path.display(), "entered directory");

        Ok(Self { original })
    }

    /// Directory that will be restored on drop
    #[cfg(test)]
    pub(crate) fn original(&self) -> &Path {
        &self.original
    }
}

impl Drop for WorkingDir {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.original) {
            tracing::warn!(
                path = %self.original.display(),
                error = %e,
                "failed to restore working directory"
            );
        }
    }
}
