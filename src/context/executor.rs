use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::state::RunState;
use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};
use crate::system::{
    CommandExecutor, DemoCommandExecutor, DemoFilesystemReader, FilesystemReader,
    RealFilesystemReader, RunRequest, RunResult, ShellCommandExecutor, SubprocessOptions,
};

/// How a single scenario command is run and judged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// Do not fail the step on a non-zero exit code
    pub can_fail: bool,
    pub expected_exit_code: Option<i32>,
    /// Overrides the scenario working directory
    pub cwd: Option<PathBuf>,
    pub env: BTreeMap<String, String>,
}

impl RunOptions {
    pub fn can_fail() -> Self {
        Self {
            can_fail: true,
            ..Self::default()
        }
    }

    pub fn expect_exit_code(mut self, code: i32) -> Self {
        self.expected_exit_code = Some(code);
        self
    }

    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }
}

/// Everything a step needs: host access, settings and the shared run state
#[derive(Debug)]
pub struct ScenarioContext {
    executor: Arc<dyn CommandExecutor>,
    filesystem: Arc<dyn FilesystemReader>,
    pub config: HarnessConfig,
    /// Working directory used when a command does not name its own
    pub working_dir: Option<PathBuf>,
    pub state: RunState,
}

impl ScenarioContext {
    pub fn new(
        executor: Arc<dyn CommandExecutor>,
        filesystem: Arc<dyn FilesystemReader>,
        config: HarnessConfig,
    ) -> Self {
        Self {
            executor,
            filesystem,
            config,
            working_dir: None,
            state: RunState::default(),
        }
    }

    /// Context backed by the real host, or by demo responses in demo mode
    pub fn from_config(config: HarnessConfig) -> Self {
        if config.demo_mode {
            Self::new(
                Arc::new(DemoCommandExecutor::new()),
                Arc::new(DemoFilesystemReader::new()),
                config,
            )
        } else {
            Self::new(
                Arc::new(ShellCommandExecutor),
                Arc::new(RealFilesystemReader),
                config,
            )
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn path_exists(&self, path: &Path) -> bool {
        self.filesystem.exists(path)
    }

    /// Run `command` with the active prefixes and check its exit code.
    ///
    /// The final command and its full result are stored on the run state
    /// before the exit code is judged, so a failed step can still be
    /// inspected.
    pub async fn run_in_context(
        &mut self,
        command: &str,
        options: RunOptions,
    ) -> HarnessResult<&RunResult> {
        let final_command = self.state.prefixes.apply(command);

        let subprocess = SubprocessOptions {
            cwd: options.cwd.or_else(|| self.working_dir.clone()),
            env: options.env,
            shell: self.config.shell.clone(),
        };
        tracing::debug!(
            command = %final_command,
            cwd = ?subprocess.cwd,
            "Running command"
        );

        let request = RunRequest::with_options(final_command.clone(), subprocess);
        let result = self.executor.execute(&request).await?;
        let exit_code = result.exit_code;
        self.state.record(final_command.clone(), result);

        if !options.can_fail && exit_code != 0 {
            tracing::warn!(command = %final_command, exit_code, "Command failed");
            return Err(HarnessError::unexpected_failure(&final_command, exit_code));
        }
        if let Some(expected) = options.expected_exit_code {
            if expected != exit_code {
                tracing::warn!(
                    command = %final_command,
                    expected,
                    exit_code,
                    "Command had unexpected exit code"
                );
                return Err(HarnessError::exit_code_mismatch(
                    &final_command,
                    expected,
                    exit_code,
                ));
            }
        }

        tracing::info!(command = %final_command, exit_code, "Command finished");
        self.state.last_result()
    }
}
