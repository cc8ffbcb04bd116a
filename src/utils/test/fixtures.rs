//! Record fixtures
//!
//! Small constructors that keep test record setup to one line each.

use crate::collections::RecordStore;
use crate::models::{Family, Individual, Sex};

/// An individual with only an id
#[must_use]
pub fn individual(id: &str) -> Individual {
    Individual::new(id)
}

/// A named male individual
#[must_use]
pub fn male(id: &str, name: &str) -> Individual {
    Individual::new(id).with_name(name).with_sex(Sex::Male)
}

/// A named female individual
#[must_use]
pub fn female(id: &str, name: &str) -> Individual {
    Individual::new(id).with_name(name).with_sex(Sex::Female)
}

/// A family with both spouses set
#[must_use]
pub fn family(id: &str, husband: &str, wife: &str) -> Family {
    Family::new(id).with_husband(husband).with_wife(wife)
}

/// Build a store from fixtures
///
/// # Panics
/// Panics on duplicate ids; fixtures are expected to be well formed.
#[must_use]
pub fn store(individuals: Vec<Individual>, families: Vec<Family>) -> RecordStore {
    RecordStore::from_records(individuals, families).expect("fixture ids must be unique")
}
