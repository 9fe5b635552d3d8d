use super::{Item, Weight, resolve_name};
use crate::error::ActionError;

/// Ordered, weight-limited collection of items.
///
/// Used for the player's backpack and the hideout stash. The bag itself only
/// knows its own contents; callers pass any extra load (worn equipment) that
/// counts against the same capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemBag {
    items: Vec<Item>,
    capacity: Weight,
}

impl ItemBag {
    pub fn new(capacity: Weight) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> Weight {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn weight(&self) -> Weight {
        self.items.iter().map(Item::weight).sum()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Item::name)
    }

    /// Whether `item` fits on top of the current contents plus `extra_load`.
    pub fn fits(&self, item: &Item, extra_load: Weight) -> bool {
        self.weight() + extra_load + item.weight() <= self.capacity
    }

    /// Ensures `item` fits or reports which item overflowed.
    pub fn ensure_fits(&self, item: &Item, extra_load: Weight) -> Result<(), ActionError> {
        if self.fits(item, extra_load) {
            Ok(())
        } else {
            Err(ActionError::CapacityExceeded {
                item: item.name().to_owned(),
                capacity: self.capacity,
            })
        }
    }

    /// Resolves a typed name to an index into [`ItemBag::items`].
    pub fn find(&self, query: &str) -> Result<usize, ActionError> {
        resolve_name(self.names(), query)
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Appends without a capacity check; callers validate with [`ItemBag::ensure_fits`].
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn take(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Item> + '_ {
        self.items.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn capacity_counts_extra_load() {
        let mut bag = ItemBag::new(Weight::from_kg(5));
        bag.push(fixtures::item("AKM")); // 4.5 kg

        let medkit = fixtures::item("AI-2 Medkit"); // 0.5 kg
        assert!(bag.fits(&medkit, Weight::ZERO));
        assert!(!bag.fits(&medkit, Weight::from_grams(100)));

        let err = bag.ensure_fits(&medkit, Weight::from_kg(1)).unwrap_err();
        assert_eq!(
            err,
            ActionError::CapacityExceeded {
                item: "AI-2 Medkit".into(),
                capacity: Weight::from_kg(5),
            }
        );
    }

    #[test]
    fn find_and_take_by_prefix() {
        let mut bag = ItemBag::new(Weight::from_kg(50));
        bag.push(fixtures::item("Bandage"));
        bag.push(fixtures::item("AKM"));

        let index = bag.find("ak").unwrap();
        let taken = bag.take(index).unwrap();
        assert_eq!(taken.name(), "AKM");
        assert_eq!(bag.len(), 1);
        assert!(bag.take(5).is_none());
    }
}
