//! Per-family rules: marriage ordering, children's births and surnames.

use super::finding::{Finding, FindingDetail};
use crate::collections::{PersonRef, RecordStore};
use crate::models::{Family, Individual};
use crate::utils::date_utils::DateComparator;
use crate::utils::logging::log_warning;

/// US04: a marriage must not come after the divorce
#[must_use]
pub fn marriage_before_divorce(store: &RecordStore, dates: &DateComparator) -> Vec<Finding> {
    store
        .families()
        .filter_map(|family| {
            let (Some(marriage), Some(divorce)) = (&family.marriage_date, &family.divorce_date)
            else {
                return None;
            };
            if !dates.is_after(Some(marriage.as_str()), Some(divorce.as_str())) {
                return None;
            }
            log::debug!("US04: {} married {marriage} after divorce {divorce}", family.id);
            Some(Finding::new(FindingDetail::MarriageAfterDivorce {
                family: family.id.clone(),
                husband: store.resolve(family.husband_id.as_ref()),
                wife: store.resolve(family.wife_id.as_ref()),
                marriage: marriage.clone(),
                divorce: divorce.clone(),
            }))
        })
        .collect()
}

/// US08: children must not be born before their parents' marriage
///
/// A literal chronological check: a birth strictly before the recorded
/// marriage date is flagged, one finding per child.
#[must_use]
pub fn birth_before_marriage_of_parent(
    store: &RecordStore,
    dates: &DateComparator,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    for family in store.families() {
        let Some(marriage) = &family.marriage_date else {
            continue;
        };
        for child in children(store, family) {
            let Some(birth) = &child.birth else {
                continue;
            };
            if dates.is_before(Some(birth.as_str()), Some(marriage.as_str())) {
                log::debug!("US08: {} born {birth} before {} marriage", child.id, family.id);
                findings.push(Finding::new(FindingDetail::BirthBeforeParentsMarriage {
                    family: family.id.clone(),
                    child: PersonRef::of(child),
                    birth: birth.clone(),
                    marriage: marriage.clone(),
                }));
            }
        }
    }
    findings
}

/// US16: male children carry the husband's surname
///
/// Emits one finding per mismatching son. Daughters and children without a
/// derivable surname are skipped. When the husband's surname cannot be
/// derived, every son with a surname mismatches.
#[must_use]
pub fn male_last_name(store: &RecordStore) -> Vec<Finding> {
    let mut findings = Vec::new();
    for family in store.families() {
        let expected = family
            .husband_id
            .as_ref()
            .and_then(|id| store.individual(id))
            .and_then(Individual::surname);

        for child in children(store, family).filter(|child| child.is_male()) {
            let Some(found) = child.surname() else {
                continue;
            };
            if Some(found) != expected {
                log::debug!(
                    "US16: {} surname {found} differs from {} in {}",
                    child.id,
                    expected.unwrap_or("<none>"),
                    family.id
                );
                findings.push(Finding::new(FindingDetail::MaleLastNameMismatch {
                    family: family.id.clone(),
                    child: PersonRef::of(child),
                    expected: expected.map(str::to_string),
                    found: found.to_string(),
                }));
            }
        }
    }
    findings
}

/// Children of a family that resolve in the store, in recorded order
fn children<'a>(
    store: &'a RecordStore,
    family: &'a Family,
) -> impl Iterator<Item = &'a Individual> {
    family.children.iter().filter_map(move |id| {
        let child = store.individual(id);
        if child.is_none() {
            log_warning(
                &format!("Family {} lists unknown child", family.id),
                Some(id.as_str()),
            );
        }
        child
    })
}
