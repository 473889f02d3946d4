use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt;
use std::process::{ExitStatus, Stdio};
use std::sync::Mutex;
use tokio::process::Command as TokioCommand;

use super::types::{RunRequest, RunResult};
use crate::error::{HarnessError, HarnessResult};

/// Abstraction for command execution to enable testing without real commands
#[async_trait]
pub trait CommandExecutor: fmt::Debug + Send + Sync {
    /// Run the command to completion and capture everything it printed.
    ///
    /// A non-zero exit code is a normal result here. Only a failure to
    /// start the shell is an error.
    async fn execute(&self, request: &RunRequest) -> HarnessResult<RunResult>;
}

/// Real command executor running commands through the configured shell
#[derive(Debug, Default)]
pub struct ShellCommandExecutor;

#[async_trait]
impl CommandExecutor for ShellCommandExecutor {
    async fn execute(&self, request: &RunRequest) -> HarnessResult<RunResult> {
        let options = &request.options;
        let mut command = TokioCommand::new(&options.shell);
        command
            .arg("-c")
            .arg(&request.command)
            .envs(&options.env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(cwd) = &options.cwd {
            command.current_dir(cwd);
        }

        // Both pipes are read to the end and closed before this returns
        let output = command
            .output()
            .await
            .map_err(|e| HarnessError::spawn(&request.command, e))?;

        let exit_code = exit_code_of(output.status);
        tracing::debug!(
            command = %request.command,
            exit_code,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "Command finished"
        );
        Ok(RunResult::from_bytes(exit_code, output.stdout, output.stderr))
    }
}

/// Exit code of a finished child; a signal `N` is reported as `-N`
fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    if let Some(code) = status.code() {
        return code;
    }
    match status.signal() {
        Some(sig) => {
            let name = nix::sys::signal::Signal::try_from(sig)
                .map(|s| s.as_str())
                .unwrap_or("unknown signal");
            tracing::warn!("Command terminated by {} ({})", name, sig);
            -sig
        }
        None => 1,
    }
}

/// Demo command executor that returns predefined responses
///
/// Responses are looked up by exact command first, then by the longest
/// registered fragment the command contains, so commands still match with
/// virtualization prefixes in front. Every request is recorded.
#[derive(Debug, Default)]
pub struct DemoCommandExecutor {
    exact: BTreeMap<String, RunResult>,
    fragments: Vec<(String, RunResult)>,
    invocations: Mutex<Vec<RunRequest>>,
}

impl DemoCommandExecutor {
    /// Demo executor answering the commands the product certificate steps use
    pub fn new() -> Self {
        Self::default()
            .with_response(
                "rhc status --format json",
                RunResult::from_text(0, include_str!("../demo/rhc_status.json"), ""),
            )
            .with_fragment_response("rhc connect ", RunResult::from_text(0, "Connected\n", ""))
            .with_fragment_response("dnf5 config-manager setopt ", RunResult::from_text(0, "", ""))
            .with_fragment_response(
                "dnf5 install -y ",
                RunResult::from_text(0, "Complete!\n", ""),
            )
    }

    /// Answer `command` exactly with `result`
    pub fn with_response(mut self, command: &str, result: RunResult) -> Self {
        self.exact.insert(command.to_string(), result);
        self
    }

    /// Answer every command containing `fragment` with `result`
    pub fn with_fragment_response(mut self, fragment: &str, result: RunResult) -> Self {
        self.fragments.retain(|(f, _)| f != fragment);
        self.fragments.push((fragment.to_string(), result));
        self
    }

    /// Commands received so far, in order
    pub fn invocations(&self) -> Vec<String> {
        self.lock_invocations()
            .iter()
            .map(|r| r.command.clone())
            .collect()
    }

    /// Full requests received so far, in order
    pub fn requests(&self) -> Vec<RunRequest> {
        self.lock_invocations().clone()
    }

    fn lock_invocations(&self) -> std::sync::MutexGuard<'_, Vec<RunRequest>> {
        self.invocations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn get_demo_response(&self, command: &str) -> Option<&RunResult> {
        if let Some(result) = self.exact.get(command) {
            return Some(result);
        }
        self.fragments
            .iter()
            .filter(|(fragment, _)| command.contains(fragment.as_str()))
            .max_by_key(|(fragment, _)| fragment.len())
            .map(|(_, result)| result)
    }
}

#[async_trait]
impl CommandExecutor for DemoCommandExecutor {
    async fn execute(&self, request: &RunRequest) -> HarnessResult<RunResult> {
        self.lock_invocations().push(request.clone());
        match self.get_demo_response(&request.command) {
            Some(result) => Ok(result.clone()),
            None => {
                tracing::debug!(command = %request.command, "Demo: command not mocked");
                Ok(RunResult::from_text(
                    127,
                    "",
                    &format!("Demo: Command not mocked: {}\n", request.command),
                ))
            }
        }
    }
}
