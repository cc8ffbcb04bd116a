//! A Rust library for auditing genealogy records against a catalog of
//! consistency user stories, with verbatim-stable error reports.

pub mod audit;
pub mod collections;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod rules;
pub mod utils;

// Re-export the most common types for easier use
pub use audit::{AuditPass, PassSummary};
pub use collections::{PersonName, PersonRef, RecordStore};
pub use config::AuditConfig;
pub use error::{AuditError, Result};
pub use loader::{load_records, parse_records};
pub use models::{Family, FamilyId, Individual, IndividualId, Sex};
pub use report::{FileSink, RenderOptions, ReportSink, Reporter, WriterSink};
pub use rules::{Finding, FindingDetail, RuleCode};
pub use utils::{DateComparator, DateOrdering};
