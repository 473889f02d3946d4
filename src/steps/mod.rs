//! Step implementations shared by the cucumber world and the unit tests
//!
//! Every step takes the scenario context by `&mut` reference and returns
//! `HarnessResult<()>`; an `Err` fails the step.

pub mod certificates;
pub mod environment;
pub mod outcome;
pub mod packages;
pub mod registration;
pub mod repositories;

use std::collections::BTreeMap;

/// One data table row keyed by column header
pub type TableRow = BTreeMap<String, String>;
