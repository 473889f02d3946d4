//! Acceptance harness for product certificate installation on a registered host

pub mod config;
pub mod context;
pub mod error;
pub mod steps;
pub mod system;
pub mod world;

pub use config::HarnessConfig;
pub use context::{RunOptions, ScenarioContext};
pub use error::{HarnessError, HarnessResult};
pub use world::ProductIdWorld;
