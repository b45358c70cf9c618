use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

/// Environment variable that overrides the project root
pub const ROOT_ENV_VAR: &str = "FF_ROOT";

/// Configuration for ff
#[derive(Debug, Clone)]
pub struct Config {
    /// Project root directory; every relative path resolves against it
    pub project_root: PathBuf,
}

impl Config {
    /// Create a config rooted at an explicit directory
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Load configuration
    ///
    /// Uses `$FF_ROOT` when set, otherwise the directory the package was
    /// built from.
    pub fn load() -> Result<Self> {
        let project_root = resolve_root(std::env::var(ROOT_ENV_VAR).ok())?;
        tracing::debug!(root = %project_root.display(), "resolved project root");
        Ok(Self { project_root })
    }

    /// Absolute path under the project root
    ///
    /// Leading separators are dropped from each segment and `..` never
    /// climbs above the root, so the result always stays inside it.
    pub fn path<I, S>(&self, segments: I) -> PathBuf
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut path = self.project_root.clone();
        let mut depth = 0usize;

        for segment in segments {
            for component in segment.as_ref().components() {
                match component {
                    Component::Normal(part) => {
                        path.push(part);
                        depth += 1;
                    }
                    Component::ParentDir if depth > 0 => {
                        path.pop();
                        depth -= 1;
                    }
                    _ => {}
                }
            }
        }

        path
    }

    /// Same as [`Config::path`], rendered as a string
    pub fn strpath<I, S>(&self, segments: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        self.path(segments).to_string_lossy().into_owned()
    }
}

fn resolve_root(override_root: Option<String>) -> Result<PathBuf> {
    let root = match override_root.filter(|value| !value.trim().is_empty()) {
        Some(value) => PathBuf::from(shellexpand::tilde(&value).as_ref()),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR")),
    };

    if root.is_absolute() {
        return Ok(root);
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Ok(cwd.join(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root_is_package_dir() {
        let root = resolve_root(None).unwrap();
        assert_eq!(root, PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        assert!(root.is_absolute());
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let root = resolve_root(Some("  ".to_string())).unwrap();
        assert_eq!(root, PathBuf::from(env!("CARGO_MANIFEST_DIR")));
    }

    #[test]
    fn test_absolute_override() {
        let root = resolve_root(Some("/srv/fastai".to_string())).unwrap();
        assert_eq!(root, PathBuf::from("/srv/fastai"));
    }

    #[test]
    fn test_relative_override_is_made_absolute() {
        let _lock = crate::shell::testing::CWD_LOCK
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        let root = resolve_root(Some("work/fastai".to_string())).unwrap();
        assert!(root.is_absolute());
        assert!(root.ends_with("work/fastai"));
    }

    #[test]
    fn test_tilde_override_expands_home() {
        let root = resolve_root(Some("~/fastai".to_string())).unwrap();
        assert!(root.ends_with("fastai"));
        assert!(!root.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_path_joins_segments() {
        let config = Config::new("/tmp/ff-root");

        assert_eq!(config.path::<_, &str>([]), PathBuf::from("/tmp/ff-root"));
        assert_eq!(
            config.path(["courses"]),
            PathBuf::from("/tmp/ff-root/courses")
        );
        assert_eq!(
            config.path(["courses", "requirements.txt"]),
            PathBuf::from("/tmp/ff-root/courses/requirements.txt")
        );
    }

    #[test]
    fn test_absolute_segment_stays_under_root() {
        let config = Config::new("/tmp/ff-root");

        let path = config.path(["/etc", "passwd"]);
        assert!(path.starts_with("/tmp/ff-root"));
        assert_eq!(path, PathBuf::from("/tmp/ff-root/etc/passwd"));
    }

    #[test]
    fn test_parent_segments_are_normalized() {
        let config = Config::new("/tmp/ff-root");

        assert_eq!(
            config.path(["courses", "..", "x"]),
            PathBuf::from("/tmp/ff-root/x")
        );
        assert_eq!(
            config.path(["courses", "..", "..", "x"]),
            PathBuf::from("/tmp/ff-root/x")
        );
        assert_eq!(
            config.path(["./courses/./nbs"]),
            PathBuf::from("/tmp/ff-root/courses/nbs")
        );
    }

    #[test]
    fn test_path_is_deterministic() {
        let config = Config::new("/tmp/ff-root");
        assert_eq!(config.path(["courses"]), config.path(["courses"]));
        assert_eq!(config.strpath(["courses"]), "/tmp/ff-root/courses");
    }
}
