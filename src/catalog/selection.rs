//! Multi-select state of the catalog screen

use super::models::ItemId;
use std::collections::BTreeSet;

/// Set of selected catalog items. The selected count is always the set size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: BTreeSet<ItemId>,
}

/// What a toggle did to the set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` if absent, deselect it if present
    pub fn toggle(&mut self, id: ItemId) -> Toggle {
        if self.selected.remove(&id) {
            Toggle::Deselected
        } else {
            self.selected.insert(id);
            Toggle::Selected
        }
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Selection::new();

        assert_eq!(selection.toggle(ItemId::from(5u64)), Toggle::Selected);
        assert!(selection.contains(&ItemId::from("5")));
        assert_eq!(selection.len(), 1);

        assert_eq!(selection.toggle(ItemId::from(5u64)), Toggle::Deselected);
        assert!(!selection.contains(&ItemId::from("5")));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.toggle("1".into());
        selection.toggle("2".into());
        selection.clear();
        assert_eq!(selection.len(), 0);
    }

    proptest! {
        #[test]
        fn prop_len_matches_odd_toggle_count(ids in prop::collection::vec(0u64..8, 0..64)) {
            let mut selection = Selection::new();
            for id in &ids {
                selection.toggle(ItemId::from(*id));
            }

            let odd = |candidate: &u64| ids.iter().filter(|id| *id == candidate).count() % 2 == 1;
            for candidate in 0u64..8 {
                prop_assert_eq!(selection.contains(&ItemId::from(candidate)), odd(&candidate));
            }
            prop_assert_eq!(selection.len(), (0u64..8).filter(|c| odd(c)).count());
        }
    }
}
