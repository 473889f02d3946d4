use chrono::{NaiveDate, NaiveDateTime};

use crate::context::ScenarioContext;
use crate::error::{HarnessError, HarnessResult};

/// Accepts `YYYY-MM-DD HH:MM:SS` or a bare `YYYY-MM-DD` (midnight)
pub fn parse_fake_date(value: &str) -> HarnessResult<NaiveDateTime> {
    let value = value.trim();
    if let Ok(at) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(at);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| HarnessError::invalid_date(value, &e.to_string()))?
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| HarnessError::invalid_date(value, "no midnight on this date"))
}

pub fn set_date(context: &mut ScenarioContext, value: &str) -> HarnessResult<()> {
    let at = parse_fake_date(value)?;
    tracing::debug!(%at, "Faking time");
    context.state.prefixes.set_faketime(at);
    Ok(())
}

pub fn set_kernel_release(context: &mut ScenarioContext, release: &str) {
    let lib = context.config.fake_uname_lib.clone();
    context.state.prefixes.set_kernel_release(release, &lib);
}

pub fn set_lc_all(context: &mut ScenarioContext, locale: &str) {
    context.state.prefixes.set_lc_all(locale);
}
