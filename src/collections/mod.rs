//! Record store
//!
//! The in-memory snapshot an audit pass reads: individuals and families
//! indexed by id. Both maps iterate in id order so that every rule sees its
//! records in the same sequence on every run.

use crate::error::{AuditError, Result};
use crate::models::{Family, FamilyId, Individual, IndividualId};
use std::collections::BTreeMap;

/// How a family member reference resolved against the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonName {
    /// Present and named
    Known(String),
    /// Present without a name, or the reference itself is unset
    Unnamed,
    /// Referenced id is not in the store
    Dangling,
}

/// A resolved reference to an individual, as it appears in a finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRef {
    /// The referenced id, `None` when the reference is unset
    pub id: Option<IndividualId>,
    pub name: PersonName,
}

impl PersonRef {
    /// Reference to an individual that is known to be in the store
    #[must_use]
    pub fn of(individual: &Individual) -> Self {
        Self {
            id: Some(individual.id.clone()),
            name: individual
                .name
                .clone()
                .map_or(PersonName::Unnamed, PersonName::Known),
        }
    }
}

/// Immutable snapshot of individuals and families
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    individuals: BTreeMap<IndividualId, Individual>,
    families: BTreeMap<FamilyId, Family>,
}

impl RecordStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from record lists, rejecting duplicate ids
    pub fn from_records(individuals: Vec<Individual>, families: Vec<Family>) -> Result<Self> {
        let mut store = Self::new();
        for individual in individuals {
            store.insert_individual(individual)?;
        }
        for family in families {
            store.insert_family(family)?;
        }
        Ok(store)
    }

    /// Add an individual; fails if the id is already present
    pub fn insert_individual(&mut self, individual: Individual) -> Result<()> {
        if self.individuals.contains_key(&individual.id) {
            return Err(AuditError::DuplicateId(individual.id.to_string()));
        }
        self.individuals.insert(individual.id.clone(), individual);
        Ok(())
    }

    /// Add a family; fails if the id is already present
    pub fn insert_family(&mut self, family: Family) -> Result<()> {
        if self.families.contains_key(&family.id) {
            return Err(AuditError::DuplicateId(family.id.to_string()));
        }
        self.families.insert(family.id.clone(), family);
        Ok(())
    }

    /// Look up an individual
    #[must_use]
    pub fn individual(&self, id: &IndividualId) -> Option<&Individual> {
        self.individuals.get(id)
    }

    /// Look up a family
    #[must_use]
    pub fn family(&self, id: &FamilyId) -> Option<&Family> {
        self.families.get(id)
    }

    /// All individuals in id order
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.values()
    }

    /// All families in id order
    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.families.values()
    }

    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Resolve an optional family member reference
    ///
    /// A dangling id is logged and reported as [`PersonName::Dangling`];
    /// it never fails the pass.
    #[must_use]
    pub fn resolve(&self, id: Option<&IndividualId>) -> PersonRef {
        match id {
            None => PersonRef {
                id: None,
                name: PersonName::Unnamed,
            },
            Some(id) => self.individual(id).map_or_else(
                || {
                    log::warn!("Reference to unknown individual {id}");
                    PersonRef {
                        id: Some(id.clone()),
                        name: PersonName::Dangling,
                    }
                },
                PersonRef::of,
            ),
        }
    }

    /// Ids referenced by families that do not resolve to an individual
    #[must_use]
    pub fn dangling_references(&self) -> Vec<(&FamilyId, &IndividualId)> {
        self.families()
            .flat_map(|family| family.member_ids().map(move |id| (&family.id, id)))
            .filter(|(_, id)| !self.individuals.contains_key(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_individual_rejected() {
        let mut store = RecordStore::new();
        store.insert_individual(Individual::new("I1")).unwrap();
        let err = store.insert_individual(Individual::new("I1")).unwrap_err();
        assert!(matches!(err, AuditError::DuplicateId(id) if id == "I1"));
    }

    #[test]
    fn test_families_iterate_in_id_order() {
        let store = RecordStore::from_records(
            Vec::new(),
            vec![Family::new("F2"), Family::new("F1"), Family::new("F3")],
        )
        .unwrap();
        let ids: Vec<&str> = store.families().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["F1", "F2", "F3"]);
    }

    #[test]
    fn test_resolve_variants() {
        let store = RecordStore::from_records(
            vec![Individual::new("I1").with_name("John Doe"), Individual::new("I2")],
            Vec::new(),
        )
        .unwrap();

        let named = store.resolve(Some(&IndividualId::from("I1")));
        assert_eq!(named.name, PersonName::Known("John Doe".to_string()));

        let unnamed = store.resolve(Some(&IndividualId::from("I2")));
        assert_eq!(unnamed.name, PersonName::Unnamed);

        let dangling = store.resolve(Some(&IndividualId::from("I9")));
        assert_eq!(dangling.name, PersonName::Dangling);
        assert_eq!(dangling.id, Some(IndividualId::from("I9")));

        let unset = store.resolve(None);
        assert_eq!(unset.id, None);
        assert_eq!(unset.name, PersonName::Unnamed);
    }

    #[test]
    fn test_dangling_references() {
        let store = RecordStore::from_records(
            vec![Individual::new("I1")],
            vec![Family::new("F1").with_husband("I1").with_wife("I7")],
        )
        .unwrap();
        let dangling = store.dangling_references();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].1.as_str(), "I7");
    }
}
