//! Shared utilities: date handling, logging helpers and test fixtures.

pub mod date_utils;
pub mod logging;
pub mod test;

pub use date_utils::{DEFAULT_DATE_FORMAT, DateComparator, DateOrdering};
