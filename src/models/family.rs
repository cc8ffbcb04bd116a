//! Family record
//!
//! A family links up to two spouses and an ordered list of children by id.
//! References are not resolved here; see [`crate::collections::RecordStore`].

use super::types::{FamilyId, IndividualId};
use serde::{Deserialize, Serialize};

/// A family unit in the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Unique key
    pub id: FamilyId,
    /// Husband, if known
    #[serde(default, rename = "husband")]
    pub husband_id: Option<IndividualId>,
    /// Wife, if known
    #[serde(default, rename = "wife")]
    pub wife_id: Option<IndividualId>,
    /// Marriage date, `MM/DD/YYYY`
    #[serde(default, rename = "marriage")]
    pub marriage_date: Option<String>,
    /// Divorce date, `MM/DD/YYYY`
    #[serde(default, rename = "divorce")]
    pub divorce_date: Option<String>,
    /// Children in recorded order
    #[serde(default)]
    pub children: Vec<IndividualId>,
}

impl Family {
    /// Create a family with only its id set
    #[must_use]
    pub fn new(id: impl Into<FamilyId>) -> Self {
        Self {
            id: id.into(),
            husband_id: None,
            wife_id: None,
            marriage_date: None,
            divorce_date: None,
            children: Vec::new(),
        }
    }

    /// Set the husband
    #[must_use]
    pub fn with_husband(mut self, id: impl Into<IndividualId>) -> Self {
        self.husband_id = Some(id.into());
        self
    }

    /// Set the wife
    #[must_use]
    pub fn with_wife(mut self, id: impl Into<IndividualId>) -> Self {
        self.wife_id = Some(id.into());
        self
    }

    /// Set the marriage date
    #[must_use]
    pub fn with_marriage(mut self, date: impl Into<String>) -> Self {
        self.marriage_date = Some(date.into());
        self
    }

    /// Set the divorce date
    #[must_use]
    pub fn with_divorce(mut self, date: impl Into<String>) -> Self {
        self.divorce_date = Some(date.into());
        self
    }

    /// Append a child
    pub fn add_child(&mut self, id: impl Into<IndividualId>) {
        self.children.push(id.into());
    }

    /// Replace the child list
    #[must_use]
    pub fn with_children<I, T>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<IndividualId>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Every individual id this family refers to, spouses first
    pub fn member_ids(&self) -> impl Iterator<Item = &IndividualId> {
        self.husband_id
            .iter()
            .chain(self.wife_id.iter())
            .chain(self.children.iter())
    }
}
