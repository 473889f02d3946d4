use std::path::{Path, PathBuf};

use crate::context::ScenarioContext;
use crate::error::{HarnessError, HarnessResult};

pub fn certificate_path(cert_dir: &str, cert_name: &str) -> PathBuf {
    Path::new(cert_dir).join(cert_name)
}

/// The certificate file exists; its content is not inspected
pub fn certificate_installed(
    context: &ScenarioContext,
    cert_name: &str,
    cert_dir: &str,
) -> HarnessResult<()> {
    let path = certificate_path(cert_dir, cert_name);
    if context.path_exists(&path) {
        Ok(())
    } else {
        Err(HarnessError::assertion(format!(
            "productid certificate {} does not exist",
            path.display()
        )))
    }
}

pub fn certificate_not_installed(
    context: &ScenarioContext,
    cert_name: &str,
    cert_dir: &str,
) -> HarnessResult<()> {
    let path = certificate_path(cert_dir, cert_name);
    if context.path_exists(&path) {
        Err(HarnessError::assertion(format!(
            "productid certificate {} exists",
            path.display()
        )))
    } else {
        Ok(())
    }
}
