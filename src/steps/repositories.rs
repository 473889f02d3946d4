use super::TableRow;
use crate::context::{RunOptions, ScenarioContext};
use crate::error::{HarnessError, HarnessResult};

pub const REPO_ID_COLUMN: &str = "repo_id";

pub fn setopt_command(repo_id: &str) -> String {
    format!("dnf5 config-manager setopt {}.enabled=1", repo_id)
}

/// Enable the repository named in the `repo_id` column of every row
pub async fn enable_repositories(
    context: &mut ScenarioContext,
    rows: &[TableRow],
) -> HarnessResult<()> {
    for row in rows {
        let repo_id = row
            .get(REPO_ID_COLUMN)
            .ok_or_else(|| HarnessError::missing_column(REPO_ID_COLUMN))?;
        tracing::info!(repo_id = %repo_id, "Enabling repository");
        context
            .run_in_context(&setopt_command(repo_id), RunOptions::default())
            .await?;
    }
    Ok(())
}
