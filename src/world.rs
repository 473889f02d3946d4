//! Cucumber bindings from step phrases to step functions

use cucumber::gherkin::Step;
use cucumber::{World, given, then, when};
use tempfile::TempDir;

use crate::config::HarnessConfig;
use crate::context::ScenarioContext;
use crate::error::{HarnessError, HarnessResult};
use crate::steps::{
    TableRow, certificates, environment, outcome, packages, registration, repositories,
};

/// Per-scenario world: a fresh context and its own working directory
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct ProductIdWorld {
    pub context: ScenarioContext,
    // Removed with the world at scenario end
    _workdir: Option<TempDir>,
}

impl ProductIdWorld {
    pub fn new() -> Self {
        Self::with_config(HarnessConfig::from_env())
    }

    pub fn with_config(config: HarnessConfig) -> Self {
        let context = ScenarioContext::from_config(config);
        match tempfile::Builder::new().prefix("productid-").tempdir() {
            Ok(workdir) => Self {
                context: context.with_working_dir(workdir.path()),
                _workdir: Some(workdir),
            },
            Err(e) => {
                tracing::warn!("Cannot create scenario working directory: {}", e);
                Self {
                    context,
                    _workdir: None,
                }
            }
        }
    }
}

impl Default for ProductIdWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Cucumber fails a step by panicking
fn check(result: HarnessResult<()>) {
    if let Err(e) = result {
        panic!("{}", e);
    }
}

/// Data table rows keyed by the header row
fn table_rows(step: &Step) -> HarnessResult<Vec<TableRow>> {
    let table = step
        .table
        .as_ref()
        .ok_or_else(|| HarnessError::missing_table(&step.value))?;
    let mut rows = table.rows.iter();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    Ok(rows
        .map(|row| header.iter().cloned().zip(row.iter().cloned()).collect())
        .collect())
}

#[given("system is registered against candlepin server")]
async fn system_is_registered(world: &mut ProductIdWorld) {
    check(registration::ensure_registered(&mut world.context).await);
}

#[given("repositories are enabled")]
async fn repositories_are_enabled(world: &mut ProductIdWorld, step: &Step) {
    check(
        async {
            let rows = table_rows(step)?;
            repositories::enable_repositories(&mut world.context, &rows).await
        }
        .await,
    );
}

#[given(expr = "the date is {string}")]
fn the_date_is(world: &mut ProductIdWorld, date: String) {
    check(environment::set_date(&mut world.context, &date));
}

#[given(expr = "the kernel release is {string}")]
fn the_kernel_release_is(world: &mut ProductIdWorld, release: String) {
    environment::set_kernel_release(&mut world.context, &release);
}

#[given(expr = "LC_ALL is set to {string}")]
fn lc_all_is_set_to(world: &mut ProductIdWorld, locale: String) {
    environment::set_lc_all(&mut world.context, &locale);
}

#[when(expr = "rpm {string} is installed from RPM repository")]
async fn rpm_is_installed(world: &mut ProductIdWorld, rpm_name: String) {
    check(packages::install_rpm(&mut world.context, &rpm_name).await);
}

#[when(expr = "I execute {string}")]
async fn i_execute(world: &mut ProductIdWorld, command: String) {
    check(outcome::execute(&mut world.context, &command).await);
}

#[then(expr = "productid certificate {string} is installed in {string}")]
fn certificate_is_installed(world: &mut ProductIdWorld, cert_name: String, cert_dir: String) {
    check(certificates::certificate_installed(
        &world.context,
        &cert_name,
        &cert_dir,
    ));
}

#[then(expr = "productid certificate {string} is not installed in {string}")]
fn certificate_is_not_installed(world: &mut ProductIdWorld, cert_name: String, cert_dir: String) {
    check(certificates::certificate_not_installed(
        &world.context,
        &cert_name,
        &cert_dir,
    ));
}

#[then(expr = "the exit code is {int}")]
fn the_exit_code_is(world: &mut ProductIdWorld, code: i32) {
    check(outcome::exit_code_is(&world.context, code));
}

#[then(expr = "stdout contains {string}")]
fn stdout_contains(world: &mut ProductIdWorld, text: String) {
    check(outcome::stdout_contains(&world.context, &text));
}

#[then("stderr is empty")]
fn stderr_is_empty(world: &mut ProductIdWorld) {
    check(outcome::stderr_is_empty(&world.context));
}
