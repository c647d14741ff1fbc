//! The autocomplete filter: a pure function from items and a query to the
//! matching rows.
//!
//! The filter is grouping-aware: group-label rows are never matched
//! against the query themselves, but are retained whenever at least one
//! member row between them and the next label matches. Input order is
//! always preserved; results are not reordered by match score.

use super::types::{FilteredItem, Item};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Filters `items` against `query`, preserving input order and grouping.
///
/// An empty query passes every row through with no match indices. A
/// non-empty query fuzzy-matches each selectable row's
/// [`filter_value`](Item::filter_value); matching rows carry the
/// character indices that matched, for highlight styling.
///
/// This is a pure function: it has no side effects and its output depends
/// only on its arguments, so callers may re-invoke it on every render.
///
/// # Examples
///
/// ```
/// use bubbletea_dropdown::dropdown::{autocomplete_filter, DefaultItem};
///
/// let items = vec![
///     DefaultItem::new("1", "Apple"),
///     DefaultItem::new("2", "Banana"),
/// ];
/// let results = autocomplete_filter(&items, "app");
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].index, 0);
/// ```
pub fn autocomplete_filter<I: Item>(items: &[I], query: &str) -> Vec<FilteredItem<I>> {
    if query.is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(index, item)| FilteredItem {
                index,
                item: item.clone(),
                matches: Vec::new(),
            })
            .collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut results = Vec::new();
    let mut i = 0;

    while i < items.len() {
        if items[i].is_group_label() {
            let label_index = i;
            i += 1;

            // Collect matching members up to the next label; the label row
            // is only kept when the group still has visible members.
            let mut members = Vec::new();
            while i < items.len() && !items[i].is_group_label() {
                if let Some(matched) = match_row(&matcher, items, i, query) {
                    members.push(matched);
                }
                i += 1;
            }

            if !members.is_empty() {
                results.push(FilteredItem {
                    index: label_index,
                    item: items[label_index].clone(),
                    matches: Vec::new(),
                });
                results.append(&mut members);
            }
        } else {
            if let Some(matched) = match_row(&matcher, items, i, query) {
                results.push(matched);
            }
            i += 1;
        }
    }

    results
}

fn match_row<I: Item>(
    matcher: &SkimMatcherV2,
    items: &[I],
    index: usize,
    query: &str,
) -> Option<FilteredItem<I>> {
    matcher
        .fuzzy_indices(&items[index].filter_value(), query)
        .map(|(_, indices)| FilteredItem {
            index,
            item: items[index].clone(),
            matches: indices,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dropdown::DefaultItem;

    fn flat_items() -> Vec<DefaultItem> {
        vec![
            DefaultItem::new("1", "Apple"),
            DefaultItem::new("2", "Banana"),
            DefaultItem::new("3", "Cherry"),
        ]
    }

    fn grouped_items() -> Vec<DefaultItem> {
        vec![
            DefaultItem::group_label("Fruits"),
            DefaultItem::new("1", "Apple"),
            DefaultItem::new("2", "Banana"),
            DefaultItem::group_label("Vegetables"),
            DefaultItem::new("3", "Carrot"),
        ]
    }

    #[test]
    fn empty_query_passes_everything_through() {
        let results = autocomplete_filter(&flat_items(), "");
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.matches.is_empty()));
    }

    #[test]
    fn matches_are_case_insensitive() {
        let results = autocomplete_filter(&flat_items(), "apple");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item.id(), "1");
    }

    #[test]
    fn no_matches_yields_empty_results() {
        let results = autocomplete_filter(&flat_items(), "zzz");
        assert!(results.is_empty());
    }

    #[test]
    fn input_order_is_preserved() {
        // Both "Banana" and "Apple" contain an 'a'; results must come back
        // in collection order, not score order.
        let results = autocomplete_filter(&flat_items(), "a");
        let indices: Vec<usize> = results.iter().map(|r| r.index).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
    }

    #[test]
    fn match_indices_cover_the_query() {
        let results = autocomplete_filter(&flat_items(), "app");
        assert_eq!(results[0].matches.len(), 3);
    }

    #[test]
    fn group_label_kept_while_a_member_matches() {
        let results = autocomplete_filter(&grouped_items(), "banana");
        assert_eq!(results.len(), 2);
        assert!(results[0].item.is_group_label());
        assert_eq!(results[1].item.id(), "2");
    }

    #[test]
    fn group_label_dropped_when_no_member_matches() {
        let results = autocomplete_filter(&grouped_items(), "carrot");
        let labels: Vec<String> = results
            .iter()
            .filter(|r| r.item.is_group_label())
            .map(|r| r.item.to_string())
            .collect();
        assert_eq!(labels, vec!["Vegetables".to_string()]);
    }

    #[test]
    fn labels_are_not_matched_against_the_query() {
        // "Fruits" itself matches the query text, but none of its members
        // do, so the whole group disappears.
        let results = autocomplete_filter(&grouped_items(), "fruits");
        assert!(results.is_empty());
    }

    #[test]
    fn original_indices_survive_filtering() {
        let results = autocomplete_filter(&grouped_items(), "carrot");
        assert_eq!(results[0].index, 3); // the "Vegetables" label row
        assert_eq!(results[1].index, 4);
    }
}
