//! The local mirror of server-held records.

use crate::model::{PlantId, PlantRecord};
use std::collections::HashSet;

/// Records keyed by id, kept in insertion order for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantCollection {
    plants: Vec<PlantRecord>,
}

impl PlantCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every record with `records`, keeping the first of any repeated id.
    ///
    /// Returns the resulting size.
    pub fn replace_all(&mut self, records: Vec<PlantRecord>) -> usize {
        let mut seen = HashSet::with_capacity(records.len());
        self.plants = records
            .into_iter()
            .filter(|record| seen.insert(record.id.clone()))
            .collect();
        self.plants.len()
    }

    /// Appends `record` unless its id is already present.
    pub fn insert(&mut self, record: PlantRecord) -> bool {
        if self.contains(&record.id) {
            return false;
        }
        self.plants.push(record);
        true
    }

    pub fn remove(&mut self, id: &PlantId) -> Option<PlantRecord> {
        let index = self.plants.iter().position(|plant| &plant.id == id)?;
        Some(self.plants.remove(index))
    }

    pub fn contains(&self, id: &PlantId) -> bool {
        self.plants.iter().any(|plant| &plant.id == id)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn records(&self) -> &[PlantRecord] {
        &self.plants
    }

    /// Records whose name contains `term`, ignoring case and surrounding whitespace.
    /// An empty term matches everything.
    pub fn matching(&self, term: &str) -> Vec<PlantRecord> {
        let term = term.trim().to_lowercase();
        self.plants
            .iter()
            .filter(|plant| term.is_empty() || plant.name.to_lowercase().contains(&term))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(id: u64, name: &str) -> PlantRecord {
        PlantRecord::new(id, name, format!("{}.png", name), 1.0)
    }

    fn ids(collection: &PlantCollection) -> Vec<PlantId> {
        collection.records().iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_insert_ignores_duplicate_ids() {
        let mut collection = PlantCollection::new();
        assert!(collection.insert(plant(1, "Fern")));
        assert!(!collection.insert(plant(1, "Impostor")));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.records()[0].name, "Fern");
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let mut collection = PlantCollection::new();
        collection.replace_all(vec![plant(1, "a"), plant(2, "b"), plant(3, "c")]);

        let removed = collection.remove(&PlantId::from(2u64));
        assert_eq!(removed.map(|p| p.name), Some("b".to_string()));
        assert_eq!(ids(&collection), vec![PlantId::Number(1), PlantId::Number(3)]);
        assert!(collection.remove(&PlantId::from(2u64)).is_none());
    }

    #[test]
    fn test_replace_all_drops_repeated_ids() {
        let mut collection = PlantCollection::new();
        collection.insert(plant(9, "old"));

        let size = collection.replace_all(vec![plant(1, "a"), plant(1, "dup"), plant(2, "b")]);
        assert_eq!(size, 2);
        assert_eq!(ids(&collection), vec![PlantId::Number(1), PlantId::Number(2)]);
        assert_eq!(collection.records()[0].name, "a");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let mut collection = PlantCollection::new();
        collection.replace_all(vec![
            plant(1, "Boston Fern"),
            plant(2, "Aloe"),
            plant(3, "Maidenhair fern"),
        ]);

        let names: Vec<_> = collection.matching(" FERN ").into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Boston Fern", "Maidenhair fern"]);
        assert_eq!(collection.matching("").len(), 3);
        assert!(collection.matching("cactus").is_empty());
    }
}
