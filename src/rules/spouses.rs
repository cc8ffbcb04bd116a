//! US24: no two families may share both spouses and the marriage date.

use super::finding::{Finding, FindingDetail, SpousePair};
use crate::collections::RecordStore;
use crate::models::Family;
use crate::utils::date_utils::{DateComparator, DateOrdering};
use itertools::Itertools;

/// Report every pair of families with the same husband, wife and marriage date
///
/// Each duplicate pair is reported twice, once from each family's side: for
/// families `F < G` the finding naming `(G, F)` comes first, then `(F, G)`.
/// Families missing any of the three attributes are never compared.
#[must_use]
pub fn unique_families_by_spouses(store: &RecordStore, dates: &DateComparator) -> Vec<Finding> {
    let candidates: Vec<&Family> = store
        .families()
        .filter(|family| {
            family.husband_id.is_some()
                && family.wife_id.is_some()
                && family.marriage_date.is_some()
        })
        .collect();

    let mut findings = Vec::new();
    for (earlier, later) in candidates.into_iter().tuple_combinations() {
        if !same_union(earlier, later, dates) {
            continue;
        }
        log::debug!("US24: {} and {} share spouses and marriage date", earlier.id, later.id);
        findings.push(duplicate(store, later, earlier));
        findings.push(duplicate(store, earlier, later));
    }
    findings
}

fn same_union(a: &Family, b: &Family, dates: &DateComparator) -> bool {
    a.husband_id == b.husband_id
        && a.wife_id == b.wife_id
        && dates.compare(a.marriage_date.as_deref(), b.marriage_date.as_deref())
            == DateOrdering::Equal
}

fn duplicate(store: &RecordStore, first: &Family, second: &Family) -> Finding {
    Finding::new(FindingDetail::DuplicateSpouses {
        first: spouse_pair(store, first),
        second: spouse_pair(store, second),
        marriage: first.marriage_date.clone().unwrap_or_default(),
    })
}

fn spouse_pair(store: &RecordStore, family: &Family) -> SpousePair {
    SpousePair {
        family: family.id.clone(),
        husband: store.resolve(family.husband_id.as_ref()),
        wife: store.resolve(family.wife_id.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test::{family, individual, store};

    fn family_ids(findings: &[Finding]) -> Vec<Vec<String>> {
        findings.iter().map(|f| f.entity_ids().to_vec()).collect()
    }

    #[test]
    fn test_duplicate_pair_reported_symmetrically() {
        let store = store(
            vec![individual("I1"), individual("I2")],
            vec![
                family("F1", "I1", "I2").with_marriage("01/01/1990"),
                family("F2", "I1", "I2").with_marriage("01/01/1990"),
            ],
        );
        let findings = unique_families_by_spouses(&store, &DateComparator::default());
        assert_eq!(
            family_ids(&findings),
            vec![vec!["F2", "F1"], vec!["F1", "F2"]]
        );
    }

    #[test]
    fn test_any_difference_means_no_finding() {
        let store = store(
            vec![individual("I1"), individual("I2"), individual("I3")],
            vec![
                family("F1", "I1", "I2").with_marriage("01/01/1990"),
                family("F2", "I1", "I3").with_marriage("01/01/1990"),
                family("F3", "I1", "I2").with_marriage("01/02/1990"),
                family("F4", "I3", "I2").with_marriage("01/01/1990"),
            ],
        );
        assert!(unique_families_by_spouses(&store, &DateComparator::default()).is_empty());
    }

    #[test]
    fn test_missing_attributes_skip_comparison() {
        let store = store(
            vec![individual("I1"), individual("I2")],
            vec![
                family("F1", "I1", "I2"),
                family("F2", "I1", "I2"),
                family("F3", "I1", "I2").with_marriage("not a date"),
                family("F4", "I1", "I2").with_marriage("not a date"),
            ],
        );
        assert!(unique_families_by_spouses(&store, &DateComparator::default()).is_empty());
    }

    #[test]
    fn test_three_way_duplicate_yields_every_pair() {
        let store = store(
            vec![individual("I1"), individual("I2")],
            vec![
                family("F1", "I1", "I2").with_marriage("01/01/1990"),
                family("F2", "I1", "I2").with_marriage("01/01/1990"),
                family("F3", "I1", "I2").with_marriage("01/01/1990"),
            ],
        );
        let findings = unique_families_by_spouses(&store, &DateComparator::default());
        assert_eq!(
            family_ids(&findings),
            vec![
                vec!["F2", "F1"],
                vec!["F1", "F2"],
                vec!["F3", "F1"],
                vec!["F1", "F3"],
                vec!["F3", "F2"],
                vec!["F2", "F3"],
            ]
        );
    }
}
