//! Append-only, fixed-capacity record store.

use std::fmt;

use crate::core::record::StudentRecord;

pub const DEFAULT_CAPACITY: usize = 50;

/// The registry already holds `capacity` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryFull {
    pub capacity: usize,
}

impl fmt::Display for RegistryFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "registry is full ({} records)", self.capacity)
    }
}

impl std::error::Error for RegistryFull {}

/// Records in insertion order. Never holds more than `capacity` entries and
/// never edits or removes one.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    capacity: usize,
    records: Vec<StudentRecord>,
}

impl Registry {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: Vec::new(),
        }
    }

    pub fn add(&mut self, record: StudentRecord) -> Result<(), RegistryFull> {
        if self.is_full() {
            return Err(RegistryFull {
                capacity: self.capacity,
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Arithmetic mean of every stored score; `None` when empty.
    pub fn average(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let total: f64 = self.records.iter().map(|r| r.score.value()).sum();
        Some(total / self.records.len() as f64)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Score;

    fn record(id: i32, score: f64) -> StudentRecord {
        StudentRecord {
            id,
            name: format!("student {id}"),
            score: Score::new(score).expect("valid score"),
        }
    }

    #[test]
    fn empty_registry_has_no_average() {
        assert_eq!(Registry::default().average(), None);
    }

    #[test]
    fn average_is_arithmetic_mean() {
        let mut registry = Registry::default();
        for (id, score) in [(1, 90.0), (2, 75.5), (3, 60.0), (4, 0.0)] {
            registry.add(record(id, score)).expect("add");
        }
        assert_eq!(registry.average(), Some(225.5 / 4.0));
    }

    #[test]
    fn add_past_capacity_is_rejected() {
        let mut registry = Registry::new(2);
        registry.add(record(1, 50.0)).expect("add");
        registry.add(record(2, 60.0)).expect("add");
        assert!(registry.is_full());
        assert_eq!(
            registry.add(record(3, 70.0)),
            Err(RegistryFull { capacity: 2 })
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn huge_capacity_is_not_preallocated() {
        let mut registry = Registry::new(usize::MAX);
        registry.add(record(1, 50.0)).expect("add");
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_full());
    }

    #[test]
    fn keeps_insertion_order_and_duplicate_ids() {
        let mut registry = Registry::default();
        registry.add(record(7, 80.0)).expect("add");
        registry.add(record(7, 40.0)).expect("add");
        registry.add(record(1, 99.0)).expect("add");
        let ids: Vec<i32> = registry.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![7, 7, 1]);
    }
}
