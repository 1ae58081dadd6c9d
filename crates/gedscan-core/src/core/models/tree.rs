use super::family::Family;
use super::ids::{FamilyKey, IndividualKey};
use super::individual::Individual;
use slotmap::SlotMap;
use std::collections::HashMap;

/// Owns every individual and family parsed from a single GEDCOM source.
///
/// Records live in slot-map arenas and refer to each other only through their
/// cross-reference identifiers, which are resolved through lookup maps. Creation
/// order is tracked separately so that reports iterate records in the same order
/// they first appeared in the source.
#[derive(Debug, Clone, Default)]
pub struct FamilyTree {
    /// Primary storage for individuals.
    individuals: SlotMap<IndividualKey, Individual>,
    /// Primary storage for families.
    families: SlotMap<FamilyKey, Family>,
    /// Lookup map from cross-reference identifier to individual key.
    individual_id_map: HashMap<String, IndividualKey>,
    /// Lookup map from cross-reference identifier to family key.
    family_id_map: HashMap<String, FamilyKey>,
    /// Individual keys in creation order.
    individual_order: Vec<IndividualKey>,
    /// Family keys in creation order.
    family_order: Vec<FamilyKey>,
}

impl FamilyTree {
    /// Creates a new, empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new individual record with the given identifier.
    ///
    /// If an individual with the same identifier already exists, its contents are
    /// replaced by a fresh record while its creation position is kept.
    ///
    /// # Arguments
    ///
    /// * `id` - The cross-reference identifier of the record.
    ///
    /// # Return
    ///
    /// The key of the (new or reset) individual.
    pub fn start_individual(&mut self, id: &str) -> IndividualKey {
        if let Some(&key) = self.individual_id_map.get(id) {
            self.individuals[key] = Individual::new(id);
            return key;
        }
        let key = self.individuals.insert(Individual::new(id));
        self.individual_id_map.insert(id.to_string(), key);
        self.individual_order.push(key);
        key
    }

    /// Starts a new family record with the given identifier.
    ///
    /// Behaves like [`FamilyTree::start_individual`] for repeated identifiers.
    pub fn start_family(&mut self, id: &str) -> FamilyKey {
        if let Some(&key) = self.family_id_map.get(id) {
            self.families[key] = Family::new(id);
            return key;
        }
        let key = self.families.insert(Family::new(id));
        self.family_id_map.insert(id.to_string(), key);
        self.family_order.push(key);
        key
    }

    pub fn individual(&self, key: IndividualKey) -> Option<&Individual> {
        self.individuals.get(key)
    }

    pub fn individual_mut(&mut self, key: IndividualKey) -> Option<&mut Individual> {
        self.individuals.get_mut(key)
    }

    pub fn family(&self, key: FamilyKey) -> Option<&Family> {
        self.families.get(key)
    }

    pub fn family_mut(&mut self, key: FamilyKey) -> Option<&mut Family> {
        self.families.get_mut(key)
    }

    /// Finds an individual key by its cross-reference identifier.
    pub fn find_individual(&self, id: &str) -> Option<IndividualKey> {
        self.individual_id_map.get(id).copied()
    }

    /// Finds a family key by its cross-reference identifier.
    pub fn find_family(&self, id: &str) -> Option<FamilyKey> {
        self.family_id_map.get(id).copied()
    }

    /// Looks up an individual by its cross-reference identifier.
    pub fn individual_by_id(&self, id: &str) -> Option<&Individual> {
        self.find_individual(id).and_then(|key| self.individuals.get(key))
    }

    /// Looks up a family by its cross-reference identifier.
    pub fn family_by_id(&self, id: &str) -> Option<&Family> {
        self.find_family(id).and_then(|key| self.families.get(key))
    }

    /// Returns the family in which the individual appears as a child, if it exists.
    pub fn family_of_origin(&self, individual: &Individual) -> Option<&Family> {
        individual
            .family_of_origin
            .as_deref()
            .and_then(|id| self.family_by_id(id))
    }

    /// Returns the raw name of the individual with the given identifier, or `""`
    /// when the identifier is absent or unknown.
    pub fn name_of(&self, id: Option<&str>) -> &str {
        id.and_then(|id| self.individual_by_id(id))
            .map_or("", |individual| individual.name.as_str())
    }

    /// Returns an iterator over all individuals in creation order.
    pub fn individuals_iter(&self) -> impl Iterator<Item = (IndividualKey, &Individual)> {
        self.individual_order
            .iter()
            .filter_map(|&key| self.individuals.get(key).map(|ind| (key, ind)))
    }

    /// Returns the individual keys in creation order.
    pub fn individual_keys(&self) -> &[IndividualKey] {
        &self.individual_order
    }

    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    pub fn family_count(&self) -> usize {
        self.families.len()
    }
}
