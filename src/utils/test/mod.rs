//! Test utilities
//!
//! Record builders shared by unit tests and the integration suite.

pub mod fixtures;

pub use fixtures::{family, female, individual, male, store};
