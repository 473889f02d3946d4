//! Scenario state and the context-aware command executor

pub mod executor;
pub mod prefix;
pub mod state;

#[cfg(test)]
mod integration_tests;

pub use executor::{RunOptions, ScenarioContext};
pub use prefix::CommandPrefixes;
pub use state::RunState;
