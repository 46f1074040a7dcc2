//! Bounded, insertion-ordered owning collection, one per entity kind.
//!
//! Entities are only ever appended; nothing is removed during a run. A
//! full registry rejects further additions without changing anything, and
//! every positional lookup is bounds-checked.
//!
//! ```
//! use ecocity_logic::citizen::Citizen;
//! use ecocity_logic::entity::EntityKind;
//! use ecocity_logic::registry::Registry;
//!
//! let mut citizens = Registry::new(EntityKind::Citizen, 2);
//! assert_eq!(citizens.add(Citizen::new("Ada")), Ok(0));
//! assert_eq!(citizens.add(Citizen::new("Bo")), Ok(1));
//! assert!(citizens.add(Citizen::new("Cy")).is_err());
//! assert!(citizens.get(2).is_err());
//! ```

use crate::entity::EntityKind;
use crate::error::{CityError, Result};

#[derive(Debug, Clone)]
pub struct Registry<T> {
    kind: EntityKind,
    capacity: usize,
    items: Vec<T>,
}

impl<T> Registry<T> {
    pub fn new(kind: EntityKind, capacity: usize) -> Self {
        Self {
            kind,
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Append an entity, returning its index.
    pub fn add(&mut self, item: T) -> Result<usize> {
        if self.is_full() {
            return Err(CityError::CapacityExceeded {
                collection: self.kind.label(),
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(self.items.len() - 1)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let count = self.items.len();
        self.items.get(index).ok_or(CityError::IndexOutOfRange {
            collection: self.kind.label(),
            index,
            count,
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let count = self.items.len();
        let collection = self.kind.label();
        self.items.get_mut(index).ok_or(CityError::IndexOutOfRange {
            collection,
            index,
            count,
        })
    }

    /// Entities in insertion order. Each call starts from the beginning.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::Building;
    use crate::constants::capacity::MAX_BUILDINGS;
    use crate::entity::CityEntity;

    fn full_registry() -> Registry<Building> {
        let mut reg = Registry::new(EntityKind::Building, MAX_BUILDINGS);
        for i in 0..MAX_BUILDINGS {
            let idx = reg.add(Building::residential(format!("B{i}"), 10 * i as u32));
            assert_eq!(idx, Ok(i));
        }
        reg
    }

    #[test]
    fn sixth_insert_is_rejected() {
        let mut reg = full_registry();
        let err = reg.add(Building::commercial("Overflow", 1)).unwrap_err();
        assert_eq!(
            err,
            CityError::CapacityExceeded {
                collection: "Building",
                capacity: 5
            }
        );
        assert_eq!(reg.len(), 5);
        for i in 0..5 {
            assert_eq!(reg.get(i).unwrap().name(), format!("B{i}"));
        }
    }

    #[test]
    fn out_of_range_is_an_error() {
        let reg = full_registry();
        assert_eq!(
            reg.get(5).unwrap_err(),
            CityError::IndexOutOfRange {
                collection: "Building",
                index: 5,
                count: 5
            }
        );

        let empty: Registry<Building> = Registry::new(EntityKind::Building, 5);
        assert!(empty.get(0).is_err());
    }

    #[test]
    fn iteration_is_ordered_and_restartable() {
        let reg = full_registry();
        let first: Vec<_> = reg.iter().map(|b| b.name().to_string()).collect();
        let second: Vec<_> = (&reg).into_iter().map(|b| b.name().to_string()).collect();
        assert_eq!(first, vec!["B0", "B1", "B2", "B3", "B4"]);
        assert_eq!(first, second);
    }

    #[test]
    fn get_mut_reaches_the_stored_entity() {
        use crate::citizen::Citizen;

        let mut reg = Registry::new(EntityKind::Citizen, 2);
        reg.add(Citizen::new("Ada")).unwrap();
        reg.get_mut(0).unwrap().participate("Gym");
        assert_eq!(reg.get(0).unwrap().happiness(), 55);
        assert!(reg.get_mut(1).is_err());
    }
}
