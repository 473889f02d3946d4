//! Host interface abstractions for testing and demo runs

pub mod commands;
pub mod decode;
pub mod filesystem;
pub mod types;

// Re-export commonly used items
pub use commands::{CommandExecutor, DemoCommandExecutor, ShellCommandExecutor};
pub use filesystem::{DemoFilesystemReader, FilesystemReader, RealFilesystemReader};
pub use types::{RunRequest, RunResult, SubprocessOptions};
