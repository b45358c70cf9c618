pub mod config;
pub mod courses;
pub mod floyd;
pub mod logging;
pub mod shell;

// Re-export commonly used types
pub use config::Config;
pub use shell::{CommandLine, CommandRunner, ShellError, SystemRunner};
