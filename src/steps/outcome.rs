//! Steps running arbitrary commands and inspecting the last result

use crate::context::{RunOptions, ScenarioContext};
use crate::error::{HarnessError, HarnessResult};

/// Run a command that is allowed to fail; later steps judge the result
pub async fn execute(context: &mut ScenarioContext, command: &str) -> HarnessResult<()> {
    context
        .run_in_context(command, RunOptions::can_fail())
        .await?;
    Ok(())
}

pub fn exit_code_is(context: &ScenarioContext, expected: i32) -> HarnessResult<()> {
    let result = context.state.last_result()?;
    if result.exit_code == expected {
        return Ok(());
    }
    Err(HarnessError::exit_code_mismatch(
        context.state.last_command.as_deref().unwrap_or_default(),
        expected,
        result.exit_code,
    ))
}

pub fn stdout_contains(context: &ScenarioContext, text: &str) -> HarnessResult<()> {
    let result = context.state.last_result()?;
    if result.stdout.contains(text) {
        Ok(())
    } else {
        Err(HarnessError::assertion(format!(
            "stdout does not contain '{}':\n{}",
            text, result.stdout
        )))
    }
}

pub fn stderr_is_empty(context: &ScenarioContext) -> HarnessResult<()> {
    let result = context.state.last_result()?;
    if result.stderr.is_empty() {
        Ok(())
    } else {
        Err(HarnessError::assertion(format!(
            "stderr is not empty:\n{}",
            result.stderr
        )))
    }
}
