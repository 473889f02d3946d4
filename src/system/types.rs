use std::collections::BTreeMap;
use std::path::PathBuf;

use super::decode::decode_output;

pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Extra settings handed through to the spawned shell
#[derive(Debug, Clone, PartialEq)]
pub struct SubprocessOptions {
    pub cwd: Option<PathBuf>,
    pub env: BTreeMap<String, String>,
    pub shell: PathBuf,
}

impl Default for SubprocessOptions {
    fn default() -> Self {
        Self {
            cwd: None,
            env: BTreeMap::new(),
            shell: PathBuf::from(DEFAULT_SHELL),
        }
    }
}

/// A single command to run through the shell
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    pub command: String,
    pub options: SubprocessOptions,
}

impl RunRequest {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            options: SubprocessOptions::default(),
        }
    }

    pub fn with_options(command: impl Into<String>, options: SubprocessOptions) -> Self {
        Self {
            command: command.into(),
            options,
        }
    }
}

/// Captured outcome of one command
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub stdout_bytes: Vec<u8>,
    pub stderr_bytes: Vec<u8>,
}

impl RunResult {
    pub fn from_bytes(exit_code: i32, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            exit_code,
            stdout: decode_output(&stdout),
            stderr: decode_output(&stderr),
            stdout_bytes: stdout,
            stderr_bytes: stderr,
        }
    }

    pub fn from_text(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self::from_bytes(exit_code, stdout.as_bytes().to_vec(), stderr.as_bytes().to_vec())
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}
