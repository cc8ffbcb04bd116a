//! Findings: detected rule violations before they are rendered.

use super::RuleCode;
use crate::collections::PersonRef;
use crate::models::{FamilyId, IndividualId};
use crate::report::templates::{RenderOptions, render_body};
use smallvec::SmallVec;

/// One family of a duplicate-spouses pair, with its spouses resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpousePair {
    pub family: FamilyId,
    pub husband: PersonRef,
    pub wife: PersonRef,
}

/// Rule-specific payload of a finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingDetail {
    BirthAfterDeath {
        individual: PersonRef,
        birth: String,
        death: String,
    },
    MarriageAfterDivorce {
        family: FamilyId,
        husband: PersonRef,
        wife: PersonRef,
        marriage: String,
        divorce: String,
    },
    BirthBeforeParentsMarriage {
        family: FamilyId,
        child: PersonRef,
        birth: String,
        marriage: String,
    },
    MaleLastNameMismatch {
        family: FamilyId,
        child: PersonRef,
        /// Husband's surname, `None` when it cannot be derived
        expected: Option<String>,
        found: String,
    },
    DuplicateSpouses {
        first: SpousePair,
        second: SpousePair,
        marriage: String,
    },
}

/// A single detected rule violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    detail: FindingDetail,
}

impl Finding {
    #[must_use]
    pub const fn new(detail: FindingDetail) -> Self {
        Self { detail }
    }

    #[must_use]
    pub const fn detail(&self) -> &FindingDetail {
        &self.detail
    }

    /// The rule that produced this finding
    #[must_use]
    pub const fn rule(&self) -> RuleCode {
        match self.detail {
            FindingDetail::BirthAfterDeath { .. } => RuleCode::Us03,
            FindingDetail::MarriageAfterDivorce { .. } => RuleCode::Us04,
            FindingDetail::BirthBeforeParentsMarriage { .. } => RuleCode::Us08,
            FindingDetail::MaleLastNameMismatch { .. } => RuleCode::Us16,
            FindingDetail::DuplicateSpouses { .. } => RuleCode::Us24,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.rule().label()
    }

    /// Ids of every record this finding refers to, families first
    #[must_use]
    pub fn entity_ids(&self) -> SmallVec<[String; 4]> {
        fn person(ids: &mut SmallVec<[String; 4]>, person: &PersonRef) {
            if let Some(id) = &person.id {
                ids.push(id.to_string());
            }
        }

        let mut ids = SmallVec::new();
        match &self.detail {
            FindingDetail::BirthAfterDeath { individual, .. } => person(&mut ids, individual),
            FindingDetail::MarriageAfterDivorce {
                family,
                husband,
                wife,
                ..
            } => {
                ids.push(family.to_string());
                person(&mut ids, husband);
                person(&mut ids, wife);
            }
            FindingDetail::BirthBeforeParentsMarriage { family, child, .. }
            | FindingDetail::MaleLastNameMismatch { family, child, .. } => {
                ids.push(family.to_string());
                person(&mut ids, child);
            }
            FindingDetail::DuplicateSpouses { first, second, .. } => {
                ids.push(first.family.to_string());
                ids.push(second.family.to_string());
            }
        }
        ids
    }

    /// The individual this finding is about, if it is about one
    #[must_use]
    pub fn individual_id(&self) -> Option<&IndividualId> {
        match &self.detail {
            FindingDetail::BirthAfterDeath { individual, .. } => individual.id.as_ref(),
            FindingDetail::BirthBeforeParentsMarriage { child, .. }
            | FindingDetail::MaleLastNameMismatch { child, .. } => child.id.as_ref(),
            FindingDetail::MarriageAfterDivorce { .. } | FindingDetail::DuplicateSpouses { .. } => {
                None
            }
        }
    }

    /// The dates involved, in the order the report shows them
    #[must_use]
    pub fn dates(&self) -> SmallVec<[&str; 2]> {
        match &self.detail {
            FindingDetail::BirthAfterDeath { birth, death, .. } => {
                SmallVec::from_buf([birth.as_str(), death.as_str()])
            }
            FindingDetail::MarriageAfterDivorce {
                marriage, divorce, ..
            } => SmallVec::from_buf([marriage.as_str(), divorce.as_str()]),
            FindingDetail::BirthBeforeParentsMarriage {
                birth, marriage, ..
            } => SmallVec::from_buf([birth.as_str(), marriage.as_str()]),
            FindingDetail::MaleLastNameMismatch { .. } => SmallVec::new(),
            FindingDetail::DuplicateSpouses { marriage, .. } => {
                let mut dates = SmallVec::new();
                dates.push(marriage.as_str());
                dates
            }
        }
    }

    /// Report body lines without header or separator, using default rendering
    #[must_use]
    pub fn explanation(&self) -> String {
        render_body(self, &RenderOptions::default())
    }
}
