//! Domain models for genealogy records
//!
//! These are the records the interchange parser produces and the audit
//! rules read. They carry no validation logic of their own.

pub mod family;
pub mod individual;
pub mod types;

// Re-export commonly used types
pub use family::Family;
pub use individual::Individual;
pub use types::{FamilyId, IndividualId, Sex};
