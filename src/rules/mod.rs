//! Rule catalog
//!
//! Every rule is a pure function over a [`RecordStore`] snapshot that
//! returns its findings in record-id order. Rules share no state, so they
//! can be run in any order; the caller decides the order reports appear in.

pub mod family;
pub mod finding;
pub mod individual;
pub mod spouses;

pub use family::{birth_before_marriage_of_parent, male_last_name, marriage_before_divorce};
pub use finding::{Finding, FindingDetail, SpousePair};
pub use individual::birth_before_death;
pub use spouses::unique_families_by_spouses;

use crate::collections::RecordStore;
use crate::error::AuditError;
use crate::utils::date_utils::DateComparator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which kind of record a rule's report is tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Individual,
    Family,
}

impl Scope {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Individual => "INDIVIDUAL",
            Self::Family => "FAMILY",
        }
    }
}

/// User story code identifying a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleCode {
    /// Birth before death
    #[serde(rename = "US03")]
    Us03,
    /// Marriage before divorce
    #[serde(rename = "US04")]
    Us04,
    /// Birth before marriage of parents
    #[serde(rename = "US08")]
    Us08,
    /// Male last names
    #[serde(rename = "US16")]
    Us16,
    /// Unique families by spouses
    #[serde(rename = "US24")]
    Us24,
}

impl RuleCode {
    /// The full catalog in code order
    pub const ALL: [Self; 5] = [Self::Us03, Self::Us04, Self::Us08, Self::Us16, Self::Us24];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Us03 => "US03",
            Self::Us04 => "US04",
            Self::Us08 => "US08",
            Self::Us16 => "US16",
            Self::Us24 => "US24",
        }
    }

    /// Human label used in report headers
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Us03 => "Birth Before Death",
            Self::Us04 => "Marriage Before Divorce",
            Self::Us08 => "Birth Before Marriage Date",
            Self::Us16 => "Male last name",
            Self::Us24 => "Unique Families By Spouse",
        }
    }

    #[must_use]
    pub const fn scope(self) -> Option<Scope> {
        match self {
            Self::Us03 => Some(Scope::Individual),
            Self::Us04 => Some(Scope::Family),
            Self::Us08 | Self::Us16 | Self::Us24 => None,
        }
    }

    /// Run this rule against a snapshot
    #[must_use]
    pub fn evaluate(self, store: &RecordStore, dates: &DateComparator) -> Vec<Finding> {
        match self {
            Self::Us03 => birth_before_death(store, dates),
            Self::Us04 => marriage_before_divorce(store, dates),
            Self::Us08 => birth_before_marriage_of_parent(store, dates),
            Self::Us16 => male_last_name(store),
            Self::Us24 => unique_families_by_spouses(store, dates),
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RuleCode {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|rule| rule.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AuditError::Config(format!("Unknown rule code: {wanted}")))
    }
}
