//! Multi-selection state with cardinality bounds.
//!
//! A [`SelectionSet`] remembers which items, by sequence index, are toggled
//! on. Disabled items can never enter the set. The upper bound `max` is
//! enforced when toggling; a toggle that would go past it is dropped. The
//! lower bound `min` is only checked by [`SelectionSet::is_valid`].
//!
//! A bound of 0 for `max` means unbounded.

use crate::item::Selectable;
use std::collections::BTreeSet;
use tracing::debug;

/// Selected sequence indices plus the `(min, max)` bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: BTreeSet<usize>,
    min: usize,
    max: usize,
}

impl SelectionSet {
    /// Creates an empty, unbounded set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with bounds. `max == 0` means unbounded.
    pub fn with_limits(min: usize, max: usize) -> Self {
        Self {
            selected: BTreeSet::new(),
            min,
            max,
        }
    }

    /// Lower bound checked by [`SelectionSet::is_valid`].
    pub fn min(&self) -> usize {
        self.min
    }

    /// Upper bound enforced on toggle; 0 when unbounded.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Changes the bounds. Items already selected stay selected even when
    /// they now exceed `max`; the set simply reports invalid.
    pub fn set_limits(&mut self, min: usize, max: usize) {
        self.min = min;
        self.max = max;
    }

    /// Number of selected items.
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Whether `index` is selected.
    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Selected indices in ascending sequence order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    fn is_full(&self) -> bool {
        self.max > 0 && self.selected.len() >= self.max
    }

    /// Flips `index`. Returns whether the set changed.
    ///
    /// Disabled or out-of-range items are ignored, and selecting an item
    /// when the set already holds `max` items is refused.
    pub fn toggle<S: Selectable>(&mut self, items: &[S], index: usize) -> bool {
        let Some(item) = items.get(index) else {
            return false;
        };
        if item.is_disabled() {
            debug!(index, "toggle ignored: item is disabled");
            return false;
        }
        if self.selected.remove(&index) {
            return true;
        }
        if self.is_full() {
            debug!(index, max = self.max, "toggle rejected: selection limit reached");
            return false;
        }
        self.selected.insert(index);
        true
    }

    /// Selects everything that fits, or deselects everything when every
    /// enabled item is already selected.
    ///
    /// Selection proceeds in sequence order and stops once `max` is reached,
    /// so a partial result is expected with a bound.
    pub fn toggle_all<S: Selectable>(&mut self, items: &[S]) {
        let all_selected = items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_disabled())
            .all(|(i, _)| self.selected.contains(&i));

        if all_selected {
            self.selected.retain(|&i| items.get(i).is_some_and(|it| it.is_disabled()));
            return;
        }

        for (i, item) in items.iter().enumerate() {
            if self.is_full() {
                debug!(max = self.max, "toggle all stopped at selection limit");
                break;
            }
            if !item.is_disabled() {
                self.selected.insert(i);
            }
        }
    }

    /// Replaces the selection with `indices`, applying the same rules as
    /// [`SelectionSet::toggle`]: disabled and out-of-range entries are
    /// skipped and nothing is added past `max`.
    pub fn set_selected<S: Selectable>(&mut self, items: &[S], indices: impl IntoIterator<Item = usize>) {
        self.selected.clear();
        let mut wanted: Vec<usize> = indices.into_iter().collect();
        wanted.sort_unstable();
        wanted.dedup();
        for i in wanted {
            if self.is_full() {
                break;
            }
            if items.get(i).is_some_and(|it| !it.is_disabled()) {
                self.selected.insert(i);
            }
        }
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Whether the count lies within `[min, max]`.
    pub fn is_valid(&self) -> bool {
        let n = self.selected.len();
        n >= self.min && (self.max == 0 || n <= self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{items_from, Item};
    use proptest::prelude::*;

    fn selected(set: &SelectionSet) -> Vec<usize> {
        set.indices().collect()
    }

    #[test]
    fn test_toggle_flips() {
        let items = items_from(&["a", "b"]);
        let mut set = SelectionSet::new();
        assert!(set.toggle(&items, 1));
        assert_eq!(selected(&set), vec![1]);
        assert!(set.toggle(&items, 1));
        assert!(selected(&set).is_empty());
    }

    #[test]
    fn test_toggle_respects_max() {
        let items = items_from(&["A", "B", "C"]);
        let mut set = SelectionSet::with_limits(0, 2);
        assert!(set.toggle(&items, 0));
        assert!(set.toggle(&items, 1));
        assert!(!set.toggle(&items, 2));
        assert_eq!(selected(&set), vec![0, 1]);
        // Deselecting is always allowed, which frees a slot.
        assert!(set.toggle(&items, 0));
        assert!(set.toggle(&items, 2));
        assert_eq!(selected(&set), vec![1, 2]);
    }

    #[test]
    fn test_toggle_disabled_is_noop() {
        let items = vec![Item::new(0, "a"), Item::new(1, "b").disabled(true)];
        let mut set = SelectionSet::new();
        assert!(!set.toggle(&items, 1));
        assert_eq!(set.count(), 0);
        assert!(!set.toggle(&items, 7));
    }

    #[test]
    fn test_toggle_all_selects_enabled_only() {
        let items = vec![
            Item::new(0, "a"),
            Item::new(1, "b").disabled(true),
            Item::new(2, "c"),
        ];
        let mut set = SelectionSet::new();
        set.toggle_all(&items);
        assert_eq!(selected(&set), vec![0, 2]);
        set.toggle_all(&items);
        assert!(selected(&set).is_empty());
    }

    #[test]
    fn test_toggle_all_partial_under_max() {
        let items = items_from(&["a", "b", "c", "d"]);
        let mut set = SelectionSet::with_limits(0, 2);
        set.toggle(&items, 2);
        set.toggle_all(&items);
        assert_eq!(selected(&set), vec![0, 2]);
        assert!(set.is_valid());
    }

    #[test]
    fn test_toggle_all_fills_partial_selection() {
        let items = items_from(&["a", "b", "c"]);
        let mut set = SelectionSet::new();
        set.toggle(&items, 1);
        set.toggle_all(&items);
        assert_eq!(selected(&set), vec![0, 1, 2]);
    }

    #[test]
    fn test_is_valid_bounds() {
        let items = items_from(&["a", "b", "c"]);
        let mut set = SelectionSet::with_limits(1, 2);
        assert!(!set.is_valid());
        set.toggle(&items, 0);
        assert!(set.is_valid());
        set.toggle(&items, 1);
        assert!(set.is_valid());

        set.set_limits(1, 1);
        assert!(!set.is_valid());
    }

    #[test]
    fn test_set_selected_applies_rules() {
        let items = vec![
            Item::new(0, "a"),
            Item::new(1, "b").disabled(true),
            Item::new(2, "c"),
            Item::new(3, "d"),
        ];
        let mut set = SelectionSet::with_limits(0, 2);
        set.set_selected(&items, [3, 1, 0, 2, 9]);
        assert_eq!(selected(&set), vec![0, 2]);
    }

    proptest! {
        #[test]
        fn prop_disabled_never_selected(
            disabled in proptest::collection::vec(any::<bool>(), 1..20),
            ops in proptest::collection::vec((any::<bool>(), 0usize..20), 0..60),
            max in 0usize..5,
        ) {
            let items: Vec<Item<usize>> = disabled
                .iter()
                .enumerate()
                .map(|(i, d)| Item::new(i, i.to_string()).disabled(*d))
                .collect();
            let mut set = SelectionSet::with_limits(0, max);
            for (all, idx) in ops {
                if all {
                    set.toggle_all(&items);
                } else {
                    set.toggle(&items, idx);
                }
                for i in set.indices() {
                    prop_assert!(!items[i].is_disabled());
                }
                if max > 0 {
                    prop_assert!(set.count() <= max);
                }
            }
        }

        #[test]
        fn prop_toggle_all_twice_restores_from_extremes(
            disabled in proptest::collection::vec(any::<bool>(), 0..20),
            start_full in any::<bool>(),
        ) {
            let items: Vec<Item<usize>> = disabled
                .iter()
                .enumerate()
                .map(|(i, d)| Item::new(i, i.to_string()).disabled(*d))
                .collect();
            let mut set = SelectionSet::new();
            if start_full {
                set.toggle_all(&items);
            }
            let before = selected(&set);
            set.toggle_all(&items);
            set.toggle_all(&items);
            prop_assert_eq!(selected(&set), before);
        }
    }
}
