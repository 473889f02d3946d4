//! Harness settings read from the environment

use std::path::PathBuf;

use crate::system::types::DEFAULT_SHELL;

pub const DEFAULT_FEATURES_PATH: &str = "features";
pub const DEFAULT_FAKE_UNAME_LIB: &str = "/usr/lib64/fake_uname.so";

/// Credentials passed to `rhc connect`
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub organization: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
            organization: "donaldduck".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    /// Use predefined command responses instead of touching the host
    pub demo_mode: bool,
    /// Feature file or directory of feature files
    pub features_path: PathBuf,
    pub shell: PathBuf,
    pub credentials: Credentials,
    /// Preload library that makes `uname` report a fake kernel release
    pub fake_uname_lib: PathBuf,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            demo_mode: false,
            features_path: PathBuf::from(DEFAULT_FEATURES_PATH),
            shell: PathBuf::from(DEFAULT_SHELL),
            credentials: Credentials::default(),
            fake_uname_lib: PathBuf::from(DEFAULT_FAKE_UNAME_LIB),
        }
    }
}

impl HarnessConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; unset or empty keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();
        let default_credentials = defaults.credentials;

        Self {
            demo_mode: get("DEMO_MODE").is_some_and(|v| v == "true"),
            features_path: get("PRODUCTID_FEATURES")
                .map(PathBuf::from)
                .unwrap_or(defaults.features_path),
            shell: get("PRODUCTID_SHELL")
                .map(PathBuf::from)
                .unwrap_or(defaults.shell),
            credentials: Credentials {
                username: get("RHC_USERNAME").unwrap_or(default_credentials.username),
                password: get("RHC_PASSWORD").unwrap_or(default_credentials.password),
                organization: get("RHC_ORGANIZATION")
                    .unwrap_or(default_credentials.organization),
            },
            fake_uname_lib: get("PRODUCTID_FAKE_UNAME_LIB")
                .map(PathBuf::from)
                .unwrap_or(defaults.fake_uname_lib),
        }
    }
}
