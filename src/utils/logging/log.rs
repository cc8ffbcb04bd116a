//! Logging utilities
//!
//! Standardized log lines for audit operations.

use std::time::Duration;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `subject` - What is being operated on (a rule code, a file, ...)
pub fn log_operation_start(operation: &str, subject: &str) {
    log::debug!("{operation} {subject}");
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `subject` - What was operated on
/// * `items` - Number of items produced
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    subject: &str,
    items: usize,
    elapsed: Option<Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!("Finished {operation} {subject}: {items} items in {duration:?}");
    } else {
        log::info!("Finished {operation} {subject}: {items} items");
    }
}

/// Log a warning, optionally tied to a subject
pub fn log_warning(message: &str, subject: Option<&str>) {
    if let Some(subject) = subject {
        log::warn!("{message}: {subject}");
    } else {
        log::warn!("{message}");
    }
}
