use serde::Deserialize;

use crate::config::Credentials;
use crate::context::{RunOptions, ScenarioContext};
use crate::error::{HarnessError, HarnessResult};

pub const STATUS_COMMAND: &str = "rhc status --format json";

/// The part of `rhc status --format json` the harness relies on
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RhcStatus {
    pub rhsm_connected: bool,
}

pub fn parse_status(stdout: &str) -> HarnessResult<RhcStatus> {
    serde_json::from_str(stdout).map_err(|e| HarnessError::status_parse(stdout, e))
}

pub fn connect_command(credentials: &Credentials) -> String {
    format!(
        "rhc connect --username {} --password {} --organization {}",
        credentials.username, credentials.password, credentials.organization
    )
}

/// Register the host unless `rhc` already reports a connection
pub async fn ensure_registered(context: &mut ScenarioContext) -> HarnessResult<()> {
    let result = context
        .run_in_context(STATUS_COMMAND, RunOptions::default())
        .await?;
    let status = parse_status(&result.stdout)?;

    if status.rhsm_connected {
        tracing::info!("System is already registered");
        return Ok(());
    }

    tracing::info!("System is not registered, connecting");
    let command = connect_command(&context.config.credentials);
    context
        .run_in_context(&command, RunOptions::default())
        .await?;
    Ok(())
}
