//! Query filtering over a sequence of searchable items.
//!
//! [`FilterEngine`] owns the query string and the derived view: the indices
//! of the items that match, in their original order. It never owns the
//! items; callers pass the sequence in whenever the query or the sequence
//! changes, and the view is recomputed from scratch each time.
//!
//! Matching is case-insensitive substring containment by default.
//! [`MatchMode::Fuzzy`] switches to subsequence matching via the Skim
//! algorithm from `fuzzy-matcher`; results keep sequence order either way.

use crate::item::Searchable;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use tracing::trace;

/// How a query is compared against an item's search text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Case-insensitive substring containment.
    #[default]
    Substring,
    /// Case-insensitive subsequence matching.
    Fuzzy,
}

/// Query plus the ordered indices of matching items.
///
/// ```rust
/// use wizard_widgets::filter::FilterEngine;
/// use wizard_widgets::item::items_from;
///
/// let items = items_from(&["Apple", "Banana", "Cherry"]);
/// let mut engine = FilterEngine::new(&items);
/// engine.set_query("AN", &items);
/// assert_eq!(engine.view(), &[1]);
/// engine.clear(&items);
/// assert_eq!(engine.view(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    query: String,
    mode: MatchMode,
    view: Vec<usize>,
}

impl FilterEngine {
    /// Creates an engine with an empty query over `items`.
    pub fn new<S: Searchable>(items: &[S]) -> Self {
        Self {
            query: String::new(),
            mode: MatchMode::default(),
            view: (0..items.len()).collect(),
        }
    }

    /// Switches the match mode and recomputes the view.
    pub fn set_mode<S: Searchable>(&mut self, mode: MatchMode, items: &[S]) {
        self.mode = mode;
        self.refilter(items);
    }

    /// The current match mode.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// The current query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a non-empty query is narrowing the view.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    /// Indices into the sequence of the matching items, in sequence order.
    pub fn view(&self) -> &[usize] {
        &self.view
    }

    /// Number of matching items.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// Whether nothing matches.
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Maps a position in the view back to the item's sequence index.
    pub fn original_index(&self, view_index: usize) -> Option<usize> {
        self.view.get(view_index).copied()
    }

    /// Replaces the query and recomputes the view.
    pub fn set_query<S: Searchable>(&mut self, query: impl Into<String>, items: &[S]) {
        self.query = query.into();
        self.refilter(items);
    }

    /// Appends one character to the query.
    pub fn append_char<S: Searchable>(&mut self, c: char, items: &[S]) {
        self.query.push(c);
        self.refilter(items);
    }

    /// Removes the last character of the query. Returns false when the
    /// query was already empty.
    pub fn backspace<S: Searchable>(&mut self, items: &[S]) -> bool {
        if self.query.pop().is_none() {
            return false;
        }
        self.refilter(items);
        true
    }

    /// Empties the query, restoring the full sequence.
    pub fn clear<S: Searchable>(&mut self, items: &[S]) {
        self.query.clear();
        self.refilter(items);
    }

    /// Recomputes the view for `items` under the current query.
    pub fn refilter<S: Searchable>(&mut self, items: &[S]) {
        if self.query.is_empty() {
            self.view = (0..items.len()).collect();
            return;
        }

        self.view = match self.mode {
            MatchMode::Substring => {
                let needle = self.query.to_lowercase();
                items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| item.search_text().to_lowercase().contains(&needle))
                    .map(|(i, _)| i)
                    .collect()
            }
            MatchMode::Fuzzy => {
                let matcher = SkimMatcherV2::default().ignore_case();
                items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| {
                        matcher
                            .fuzzy_match(&item.search_text(), &self.query)
                            .is_some()
                    })
                    .map(|(i, _)| i)
                    .collect()
            }
        };

        trace!(
            query = %self.query,
            matches = self.view.len(),
            total = items.len(),
            "filter recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{items_from, Item};
    use proptest::prelude::*;

    #[test]
    fn test_empty_query_is_identity() {
        let items = items_from(&["a", "b", "c"]);
        let engine = FilterEngine::new(&items);
        assert_eq!(engine.view(), &[0, 1, 2]);
        assert!(!engine.is_active());
    }

    #[test]
    fn test_substring_case_insensitive() {
        let items = items_from(&["Apple", "Banana", "Cherry", "PINEAPPLE"]);
        let mut engine = FilterEngine::new(&items);
        engine.set_query("apple", &items);
        assert_eq!(engine.view(), &[0, 3]);
        engine.set_query("APP", &items);
        assert_eq!(engine.view(), &[0, 3]);
    }

    #[test]
    fn test_matches_description_and_filter_text() {
        let items = vec![
            Item::new(0, "pg").with_description("PostgreSQL"),
            Item::new(1, "my").with_filter_text("mysql mariadb"),
            Item::new(2, "redis"),
        ];
        let mut engine = FilterEngine::new(&items);
        engine.set_query("sql", &items);
        assert_eq!(engine.view(), &[0, 1]);
        engine.set_query("maria", &items);
        assert_eq!(engine.view(), &[1]);
    }

    #[test]
    fn test_append_and_backspace_recompute() {
        let items = items_from(&["Apple", "Banana", "Cherry"]);
        let mut engine = FilterEngine::new(&items);
        engine.append_char('a', &items);
        assert_eq!(engine.view(), &[0, 1]);
        engine.append_char('n', &items);
        assert_eq!(engine.view(), &[1]);
        assert!(engine.backspace(&items));
        assert_eq!(engine.query(), "a");
        assert_eq!(engine.view(), &[0, 1]);
        assert!(engine.backspace(&items));
        assert!(!engine.backspace(&items));
        assert_eq!(engine.view(), &[0, 1, 2]);
    }

    #[test]
    fn test_backspace_removes_one_code_point() {
        let items = items_from(&["café", "cafe"]);
        let mut engine = FilterEngine::new(&items);
        engine.set_query("café", &items);
        assert_eq!(engine.view(), &[0]);
        engine.backspace(&items);
        assert_eq!(engine.query(), "caf");
        assert_eq!(engine.view(), &[0, 1]);
    }

    #[test]
    fn test_no_matches() {
        let items = items_from(&["Apple"]);
        let mut engine = FilterEngine::new(&items);
        engine.set_query("zzz", &items);
        assert!(engine.is_empty());
        assert_eq!(engine.original_index(0), None);
    }

    #[test]
    fn test_fuzzy_mode_matches_subsequence_in_order() {
        let items = items_from(&["Banana", "Apple", "Blueberry"]);
        let mut engine = FilterEngine::new(&items);
        engine.set_mode(MatchMode::Fuzzy, &items);
        engine.set_query("bry", &items);
        assert_eq!(engine.view(), &[2]);
        engine.set_query("ba", &items);
        assert_eq!(engine.view(), &[0]);
        engine.set_query("b", &items);
        assert_eq!(engine.view(), &[0, 2]);
    }

    proptest! {
        #[test]
        fn prop_view_is_ordered_matching_subsequence(
            labels in proptest::collection::vec("[a-zA-Z]{0,8}", 0..30),
            query in "[a-zA-Z]{0,3}",
        ) {
            let items = items_from(&labels);
            let mut engine = FilterEngine::new(&items);
            engine.set_query(query.clone(), &items);

            let expected: Vec<usize> = labels
                .iter()
                .enumerate()
                .filter(|(_, l)| l.to_lowercase().contains(&query.to_lowercase()))
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(engine.view(), expected.as_slice());

            engine.clear(&items);
            let all: Vec<usize> = (0..labels.len()).collect();
            prop_assert_eq!(engine.view(), all.as_slice());
        }
    }
}
