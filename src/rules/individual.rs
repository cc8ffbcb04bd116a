//! Per-individual rules.

use super::finding::{Finding, FindingDetail};
use crate::collections::{PersonRef, RecordStore};
use crate::utils::date_utils::DateComparator;

/// US03: an individual must not be born after their death
#[must_use]
pub fn birth_before_death(store: &RecordStore, dates: &DateComparator) -> Vec<Finding> {
    store
        .individuals()
        .filter_map(|individual| {
            let (Some(birth), Some(death)) = (&individual.birth, &individual.death) else {
                return None;
            };
            if !dates.is_after(Some(birth.as_str()), Some(death.as_str())) {
                return None;
            }
            log::debug!("US03: {} born {birth} after death {death}", individual.id);
            Some(Finding::new(FindingDetail::BirthAfterDeath {
                individual: PersonRef::of(individual),
                birth: birth.clone(),
                death: death.clone(),
            }))
        })
        .collect()
}
