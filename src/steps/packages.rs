use crate::context::{RunOptions, ScenarioContext};
use crate::error::HarnessResult;

pub fn install_command(rpm_name: &str) -> String {
    format!("dnf5 install -y {}", rpm_name)
}

pub async fn install_rpm(context: &mut ScenarioContext, rpm_name: &str) -> HarnessResult<()> {
    context
        .run_in_context(&install_command(rpm_name), RunOptions::default())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HarnessConfig;
    use crate::error::HarnessError;
    use crate::system::{DemoCommandExecutor, DemoFilesystemReader, RunResult};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_install_runs_dnf5() {
        let executor = Arc::new(DemoCommandExecutor::new());
        let mut context = ScenarioContext::new(
            executor.clone(),
            Arc::new(DemoFilesystemReader::new()),
            HarnessConfig::default(),
        );
        install_rpm(&mut context, "awesome-1.0").await.unwrap();
        assert_eq!(executor.invocations(), vec!["dnf5 install -y awesome-1.0"]);
    }

    #[tokio::test]
    async fn test_failed_install() {
        let executor = DemoCommandExecutor::new().with_response(
            &install_command("missing"),
            RunResult::from_text(1, "", "No match for argument: missing"),
        );
        let mut context = ScenarioContext::new(
            Arc::new(executor),
            Arc::new(DemoFilesystemReader::new()),
            HarnessConfig::default(),
        );
        let err = install_rpm(&mut context, "missing").await.unwrap_err();
        assert!(matches!(err, HarnessError::UnexpectedFailure { exit_code: 1, .. }));
        assert!(context.state.last_result().unwrap().stderr.contains("No match"));
    }
}
