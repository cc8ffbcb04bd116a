//! Individual record
//!
//! An individual as produced by the interchange parser. Dates are kept in
//! their textual form so reports can echo them exactly as recorded.

use super::types::{IndividualId, Sex};
use serde::{Deserialize, Serialize};

/// A person in the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Unique key
    pub id: IndividualId,
    /// Full name as recorded
    #[serde(default)]
    pub name: Option<String>,
    /// Recorded sex
    #[serde(default)]
    pub sex: Sex,
    /// Birth date, `MM/DD/YYYY`
    #[serde(default)]
    pub birth: Option<String>,
    /// Death date, `MM/DD/YYYY`
    #[serde(default)]
    pub death: Option<String>,
}

impl Individual {
    /// Create an individual with only its id set
    #[must_use]
    pub fn new(id: impl Into<IndividualId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            sex: Sex::Unset,
            birth: None,
            death: None,
        }
    }

    /// Set the full name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the sex
    #[must_use]
    pub const fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    /// Set the birth date
    #[must_use]
    pub fn with_birth(mut self, date: impl Into<String>) -> Self {
        self.birth = Some(date.into());
        self
    }

    /// Set the death date
    #[must_use]
    pub fn with_death(mut self, date: impl Into<String>) -> Self {
        self.death = Some(date.into());
        self
    }

    /// Last whitespace-delimited token of the name, if there is one
    #[must_use]
    pub fn surname(&self) -> Option<&str> {
        self.name.as_deref().and_then(|name| name.split_whitespace().last())
    }

    #[must_use]
    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }
}
