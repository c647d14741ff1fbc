//! Derived display flags, recomputed from scratch on every render.
//!
//! The dropdown's rendering decisions are all boolean derivations over
//! (items, query, open, busy). They are grouped into one [`Derived`]
//! struct so the view code and the tests share a single computation.

use super::model::Model;
use super::types::{FilteredItem, Item};

/// The display decisions for one render pass.
///
/// Exactly one of the message branches (`show_empty_message`,
/// `show_no_results_message`) renders at a time; `items_loading`
/// supersedes both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derived {
    /// Collection is ready and non-empty.
    pub has_items: bool,
    /// Collection has not been provided yet; show the loading spinner.
    pub items_loading: bool,
    /// Show the empty-collection message.
    pub show_empty_message: bool,
    /// Show the no-search-results message.
    pub show_no_results_message: bool,
    /// Render the search input row.
    pub show_input: bool,
    /// Row count for keyboard-navigation bounds; set only in virtualized
    /// mode. Counts every row, group labels included.
    pub item_count: Option<usize>,
    /// Index of the selected item in the full collection.
    pub selected_index: Option<usize>,
    /// Number of rows the filter produced this render.
    pub result_count: usize,
}

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Computes the display flags for the current state.
    ///
    /// Pure derivation: calling this any number of times between updates
    /// yields the same result, and nothing is cached across renders.
    pub fn derived(&self) -> Derived {
        let results = self.filtered_results();
        self.derived_for(&results)
    }

    /// Computes the display flags against an already-computed result list.
    ///
    /// The view computes results once per render and derives flags from
    /// them; this avoids running the filter twice without introducing a
    /// cache.
    pub(super) fn derived_for(&self, results: &[FilteredItem<I>]) -> Derived {
        let has_items = self.has_items();
        let items_loading = self.items_loading();
        let query = self.effective_query();
        let busy = self.busy();

        // The loading sentinel renders a spinner and suppresses both
        // message branches; it is not the same thing as an empty
        // collection.
        let show_empty_message = !items_loading && !busy && query.is_empty() && !has_items;
        let show_no_results_message = !items_loading
            && !busy
            && !self.busy_items_still_visible()
            && !query.is_empty()
            && results.is_empty();
        let show_input = !self.hide_input() && (has_items || !self.empty_hides_input());
        let item_count = self.virtualized_height().map(|_| results.len());

        Derived {
            has_items,
            items_loading,
            show_empty_message,
            show_no_results_message,
            show_input,
            item_count,
            selected_index: self.selected_index(),
            result_count: results.len(),
        }
    }

    /// Returns the externally driven busy state.
    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Returns whether the filtered list stays visible while busy.
    pub fn busy_items_still_visible(&self) -> bool {
        self.busy_items_still_visible
    }

    /// Returns whether the search input is configured hidden.
    pub fn hide_input(&self) -> bool {
        self.hide_input
    }

    /// Returns whether an empty collection hides the input.
    pub fn empty_hides_input(&self) -> bool {
        self.empty_hides_input
    }

    /// Returns the virtualized window height, when configured.
    pub fn virtualized_height(&self) -> Option<usize> {
        self.virtualized_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dropdown::{DefaultItem, ItemCollection, Model};

    fn items(labels: &[&str]) -> ItemCollection<DefaultItem> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| DefaultItem::new(&(i + 1).to_string(), label))
            .collect::<Vec<_>>()
            .into()
    }

    fn open(mut dropdown: Model<DefaultItem>) -> Model<DefaultItem> {
        dropdown.state.open_menu();
        dropdown
    }

    #[test]
    fn loading_shows_spinner_and_no_messages() {
        let mut dropdown: Model<DefaultItem> = open(Model::new(ItemCollection::Loading));
        let derived = dropdown.derived();
        assert!(derived.items_loading);
        assert!(!derived.show_empty_message);
        assert_eq!(derived.result_count, 0);

        // Still no message branch once the user has typed something.
        dropdown.state.input.set_value("que");
        assert!(!dropdown.derived().show_no_results_message);
    }

    #[test]
    fn empty_items_empty_query_shows_exactly_empty_message() {
        let dropdown = open(Model::new(items(&[])));
        let derived = dropdown.derived();
        assert!(derived.show_empty_message);
        assert!(!derived.show_no_results_message);
    }

    #[test]
    fn no_matches_shows_exactly_no_results_message() {
        let mut dropdown = open(Model::new(items(&["Apple", "Banana"])));
        dropdown.state.input.set_value("zzz");
        let derived = dropdown.derived();
        assert!(!derived.show_empty_message);
        assert!(derived.show_no_results_message);
        assert_eq!(derived.result_count, 0);
    }

    #[test]
    fn busy_suppresses_both_messages() {
        let mut dropdown = open(Model::new(items(&[])).with_busy(true));
        assert!(!dropdown.derived().show_empty_message);

        dropdown.state.input.set_value("zzz");
        assert!(!dropdown.derived().show_no_results_message);
    }

    #[test]
    fn busy_items_still_visible_suppresses_no_results() {
        let mut dropdown = open(Model::new(items(&["Apple"])).with_busy_items_still_visible(true));
        dropdown.state.input.set_value("zzz");
        assert!(!dropdown.derived().show_no_results_message);
    }

    #[test]
    fn input_visibility_follows_empty_hides_input() {
        let empty = open(Model::new(items(&[])).with_empty_hides_input(true));
        assert!(!empty.derived().show_input);

        let populated = open(Model::new(items(&["Apple"])).with_empty_hides_input(true));
        assert!(populated.derived().show_input);

        let default_empty = open(Model::new(items(&[])));
        assert!(default_empty.derived().show_input);
    }

    #[test]
    fn hide_input_wins_regardless_of_items() {
        let dropdown = open(Model::new(items(&["Apple"])).with_hide_input(true));
        assert!(!dropdown.derived().show_input);
    }

    #[test]
    fn item_count_only_set_in_virtualized_mode() {
        let plain = open(Model::new(items(&["Apple", "Banana"])));
        assert_eq!(plain.derived().item_count, None);

        let virtualized =
            open(Model::new(items(&["Apple", "Banana"])).with_virtualized_height(5));
        assert_eq!(virtualized.derived().item_count, Some(2));
    }

    #[test]
    fn item_count_includes_group_label_rows() {
        let collection: ItemCollection<DefaultItem> = vec![
            DefaultItem::group_label("Fruits"),
            DefaultItem::new("1", "Apple"),
        ]
        .into();
        let dropdown = open(Model::new(collection).with_virtualized_height(5));
        assert_eq!(dropdown.derived().item_count, Some(2));
    }

    #[test]
    fn derivation_is_stable_between_updates() {
        let mut dropdown = open(Model::new(items(&["Apple", "Banana"])));
        dropdown.state.input.set_value("a");
        assert_eq!(dropdown.derived(), dropdown.derived());
    }

    #[test]
    fn selection_properties_from_the_contract() {
        let mut dropdown = Model::new(items(&["one", "two", "three"]));
        dropdown.select_id("2");
        assert_eq!(dropdown.derived().selected_index, Some(1));

        dropdown.select_id("9");
        assert_eq!(dropdown.derived().selected_index, None);
    }
}
