use super::prefix::CommandPrefixes;
use crate::error::{HarnessError, HarnessResult};
use crate::system::RunResult;

/// Mutable state shared by the steps of one scenario
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub prefixes: CommandPrefixes,
    /// Final command string of the last run, prefixes included
    pub last_command: Option<String>,
    pub last_result: Option<RunResult>,
}

impl RunState {
    pub fn record(&mut self, command: String, result: RunResult) {
        self.last_command = Some(command);
        self.last_result = Some(result);
    }

    /// Last result, or an error when nothing has run yet
    pub fn last_result(&self) -> HarnessResult<&RunResult> {
        self.last_result.as_ref().ok_or(HarnessError::NoCommandRun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state() {
        let state = RunState::default();
        assert!(state.prefixes.is_empty());
        assert!(state.last_command.is_none());
        assert!(matches!(state.last_result(), Err(HarnessError::NoCommandRun)));
    }

    #[test]
    fn test_record_replaces_previous_result() {
        let mut state = RunState::default();
        state.record("true".into(), RunResult::from_text(0, "", ""));
        state.record("false".into(), RunResult::from_text(1, "", ""));
        assert_eq!(state.last_command.as_deref(), Some("false"));
        assert_eq!(state.last_result().unwrap().exit_code, 1);
    }
}
