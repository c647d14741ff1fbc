//! The dropdown model: configuration, state, and per-render accessors.
//!
//! The model owns an [`autocomplete::Model`] (the interaction state) plus
//! the item collection and display options. Everything the view shows is
//! derived fresh from that state on each call; the model keeps no cache of
//! filtered results.

use super::filtering::autocomplete_filter;
use super::keys::DropdownKeyMap;
use super::style::DropdownStyles;
use super::types::{FilteredItem, Item, ItemCollection, ItemSize};
use crate::autocomplete::{self, Actions};
use crate::{input, spinner};
use bubbletea_rs::Cmd;

/// Callback fired when an item is selected.
pub type SelectCallback<I> = Box<dyn Fn(&I) -> Option<Cmd> + Send + Sync>;
/// Callback fired on menu lifecycle events (open, close, scroll).
pub type ActionCallback = Box<dyn Fn() -> Option<Cmd> + Send + Sync>;
/// Callback fired when the search input value changes.
pub type ChangeCallback = Box<dyn Fn(&str) -> Option<Cmd> + Send + Sync>;
/// Render closure for the caller-supplied actor region.
pub type ActorRender = Box<dyn Fn(&ActorContext) -> String + Send + Sync>;

/// Horizontal alignment of the menu panel relative to the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuAlign {
    /// Menu panel flush with the actor's left edge. The default.
    #[default]
    Left,
    /// Menu panel offset toward the actor's right edge.
    Right,
}

/// Caller-supplied footer content: either a fixed string or a closure
/// receiving the menu's [`Actions`] handle.
pub enum MenuFooter {
    /// Fixed footer content.
    Static(String),
    /// Footer rendered with access to the open/close actions.
    WithActions(Box<dyn Fn(&Actions) -> String + Send + Sync>),
}

/// Context handed to the actor render closure on every render.
///
/// This is the explicitly typed replacement for a render-prop: a fixed
/// struct of everything the actor region may react to.
#[derive(Debug, Clone, Copy)]
pub struct ActorContext {
    /// Open/close command handle for the menu.
    pub actions: Actions,
    /// Whether the menu is currently open.
    pub is_open: bool,
    /// Index of the selected item in the full collection, if any.
    pub selected_index: Option<usize>,
}

/// A filterable dropdown/autocomplete menu.
///
/// The dropdown renders an always-visible actor row and, while open, a
/// menu panel containing a search input and the filtered item list. All
/// interaction state lives in the embedded autocomplete primitive; the
/// dropdown derives its display decisions from that state on every render.
///
/// # Examples
///
/// ```
/// use bubbletea_dropdown::dropdown::{DefaultItem, Model};
///
/// let items = vec![
///     DefaultItem::new("fe", "frontend"),
///     DefaultItem::new("be", "backend"),
/// ];
/// let dropdown: Model<DefaultItem> = Model::new(items.into())
///     .with_search_placeholder("Filter projects")
///     .with_max_height(8);
/// assert!(!dropdown.is_open());
/// ```
pub struct Model<I: Item> {
    pub(super) items: ItemCollection<I>,
    pub(super) state: autocomplete::Model,

    // Display options
    pub(super) max_height: usize,
    pub(super) virtualized_height: Option<usize>,
    pub(super) virtualized_label_height: Option<usize>,
    pub(super) item_size: ItemSize,
    pub(super) align_menu: MenuAlign,
    pub(super) hide_input: bool,
    pub(super) empty_hides_input: bool,
    pub(super) empty_message: String,
    pub(super) no_results_message: Option<String>,
    pub(super) menu_header: Option<String>,
    pub(super) menu_footer: Option<MenuFooter>,
    pub(super) actor: Option<ActorRender>,

    // Busy state is externally driven, independent of the loading state
    // of the item collection.
    pub(super) busy: bool,
    pub(super) busy_items_still_visible: bool,

    // A set override completely bypasses the live input value.
    pub(super) filter_override: Option<String>,

    // Scroll position of the virtualized window, in row index.
    pub(super) scroll_offset: usize,

    pub(super) keymap: DropdownKeyMap,
    pub(super) styles: DropdownStyles,
    pub(super) loading_spinner: spinner::Model,
    pub(super) input_spinner: spinner::Model,

    // Outbound notifications
    pub(super) on_select: Option<SelectCallback<I>>,
    pub(super) on_open: Option<ActionCallback>,
    pub(super) on_close: Option<ActionCallback>,
    pub(super) on_change: Option<ChangeCallback>,
    pub(super) on_scroll: Option<ActionCallback>,
}

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Creates a dropdown over the given item collection.
    ///
    /// Defaults: menu closed, eight rows of menu height, small item size,
    /// left-aligned menu, input shown, "No items" empty message, and a
    /// "Filter search" input placeholder.
    pub fn new(items: ItemCollection<I>) -> Self {
        let styles = DropdownStyles::default();
        let mut state = autocomplete::Model::new();
        state.input = input::Model::new().with_placeholder("Filter search");

        Self {
            items,
            state,
            max_height: 8,
            virtualized_height: None,
            virtualized_label_height: None,
            item_size: ItemSize::default(),
            align_menu: MenuAlign::default(),
            hide_input: false,
            empty_hides_input: false,
            empty_message: "No items".to_string(),
            no_results_message: None,
            menu_header: None,
            menu_footer: None,
            actor: None,
            busy: false,
            busy_items_still_visible: false,
            filter_override: None,
            scroll_offset: 0,
            keymap: DropdownKeyMap::default(),
            loading_spinner: spinner::Model::new()
                .with_spinner(spinner::DOT.clone())
                .with_style(styles.spinner.clone()),
            input_spinner: spinner::Model::new()
                .with_spinner(spinner::MINI_DOT.clone())
                .with_style(styles.spinner.clone()),
            styles,
            on_select: None,
            on_open: None,
            on_close: None,
            on_change: None,
            on_scroll: None,
        }
    }

    // --- Builder-style configuration -------------------------------------

    /// Sets the maximum menu list height in rows.
    pub fn with_max_height(mut self, rows: usize) -> Self {
        self.max_height = rows.max(1);
        self
    }

    /// Enables virtualized rendering with a fixed window height in rows.
    ///
    /// Use this for large collections: only the rows inside the scroll
    /// window are rendered, using fixed per-row heights to compute the
    /// window.
    pub fn with_virtualized_height(mut self, rows: usize) -> Self {
        self.virtualized_height = Some(rows.max(1));
        self
    }

    /// Sets the fixed height of group-label rows in virtualized mode.
    pub fn with_virtualized_label_height(mut self, rows: usize) -> Self {
        self.virtualized_label_height = Some(rows.max(1));
        self
    }

    /// Sets the display density for member rows.
    pub fn with_item_size(mut self, size: ItemSize) -> Self {
        self.item_size = size;
        self
    }

    /// Sets the menu alignment relative to the actor.
    pub fn with_align_menu(mut self, align: MenuAlign) -> Self {
        self.align_menu = align;
        self
    }

    /// Hides the search input entirely.
    pub fn with_hide_input(mut self, hide: bool) -> Self {
        self.hide_input = hide;
        self
    }

    /// Hides the input while the collection is empty.
    ///
    /// Avoid combining this with async fetching: an empty first response
    /// would remove the input the user needs to search with.
    pub fn with_empty_hides_input(mut self, hide: bool) -> Self {
        self.empty_hides_input = hide;
        self
    }

    /// Sets the message shown when the collection has no items.
    pub fn with_empty_message(mut self, message: &str) -> Self {
        self.empty_message = message.to_string();
        self
    }

    /// Sets the message shown when a search matches nothing.
    ///
    /// Defaults to the empty message followed by "found".
    pub fn with_no_results_message(mut self, message: &str) -> Self {
        self.no_results_message = Some(message.to_string());
        self
    }

    /// Sets the search input's placeholder text.
    pub fn with_search_placeholder(mut self, placeholder: &str) -> Self {
        self.state.input.set_placeholder(placeholder);
        self
    }

    /// Sets caller content rendered above the item list.
    pub fn with_menu_header(mut self, header: &str) -> Self {
        self.menu_header = Some(header.to_string());
        self
    }

    /// Sets caller content rendered below the item list.
    pub fn with_menu_footer(mut self, footer: MenuFooter) -> Self {
        self.menu_footer = Some(footer);
        self
    }

    /// Sets the render closure for the actor region.
    ///
    /// Without one, a default actor row is rendered: the selected item's
    /// label (or the placeholder) plus a dropdown arrow.
    pub fn with_actor<F>(mut self, actor: F) -> Self
    where
        F: Fn(&ActorContext) -> String + Send + Sync + 'static,
    {
        self.actor = Some(Box::new(actor));
        self
    }

    /// Sets the externally driven busy state.
    pub fn with_busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    /// Keeps the filtered list visible while busy, with a small spinner
    /// beside the input instead of the "Searching..." placeholder.
    pub fn with_busy_items_still_visible(mut self, visible: bool) -> Self {
        self.busy_items_still_visible = visible;
        self
    }

    /// Sets a query override that completely bypasses the live input
    /// value, e.g. to strip characters out of the search.
    pub fn with_filter_override(mut self, query: &str) -> Self {
        self.filter_override = Some(query.to_string());
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: DropdownKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: DropdownStyles) -> Self {
        self.loading_spinner.style = styles.spinner.clone();
        self.input_spinner.style = styles.spinner.clone();
        self.styles = styles;
        self
    }

    /// Sets the selection callback.
    pub fn with_on_select<F>(mut self, f: F) -> Self
    where
        F: Fn(&I) -> Option<Cmd> + Send + Sync + 'static,
    {
        self.on_select = Some(Box::new(f));
        self
    }

    /// Sets the menu-opened callback.
    pub fn with_on_open<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Option<Cmd> + Send + Sync + 'static,
    {
        self.on_open = Some(Box::new(f));
        self
    }

    /// Sets the menu-closed callback.
    pub fn with_on_close<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Option<Cmd> + Send + Sync + 'static,
    {
        self.on_close = Some(Box::new(f));
        self
    }

    /// Sets the input-change callback.
    pub fn with_on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Option<Cmd> + Send + Sync + 'static,
    {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Sets the scroll callback, fired when the virtualized window moves.
    pub fn with_on_scroll<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Option<Cmd> + Send + Sync + 'static,
    {
        self.on_scroll = Some(Box::new(f));
        self
    }

    // --- Mutable state updates -------------------------------------------

    /// Replaces the item collection.
    ///
    /// The scroll window resets; selection is kept, since it is tracked by
    /// item id rather than position.
    pub fn set_items(&mut self, items: ItemCollection<I>) {
        self.items = items;
        self.scroll_offset = 0;
        self.state.reset_highlight();
    }

    /// Updates the externally driven busy state.
    ///
    /// Becoming busy while the menu is open returns a command that starts
    /// the input spinner's tick chain; the chain ends on its own once the
    /// spinner is no longer visible. Run the command or the spinner
    /// freezes on its first frame.
    pub fn set_busy(&mut self, busy: bool) -> Option<Cmd> {
        let was_busy = self.busy;
        self.busy = busy;
        if busy && !was_busy && self.is_open() {
            return Some(self.input_spinner.tick());
        }
        None
    }

    /// Updates or clears the query override.
    pub fn set_filter_override(&mut self, query: Option<&str>) {
        self.filter_override = query.map(|q| q.to_string());
    }

    /// Marks the item with the given id as selected.
    pub fn select_id(&mut self, id: &str) {
        self.state.select(id);
    }

    // --- Read accessors ----------------------------------------------------

    /// Returns whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Returns the open/close command handle.
    pub fn actions(&self) -> Actions {
        self.state.actions()
    }

    /// Returns the item collection.
    pub fn items(&self) -> &ItemCollection<I> {
        &self.items
    }

    /// Returns the keyboard-highlighted row index.
    pub fn highlighted_index(&self) -> usize {
        self.state.highlighted_index()
    }

    /// Returns the first row index of the rendered window.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Returns the query the filter runs against: the override when one is
    /// set, otherwise the live input value.
    pub fn effective_query(&self) -> &str {
        match &self.filter_override {
            Some(q) => q,
            None => self.state.input.value(),
        }
    }

    /// Returns true when the collection is ready and non-empty.
    pub fn has_items(&self) -> bool {
        !self.items.items().is_empty()
    }

    /// Returns true when the collection has not been provided yet.
    pub fn items_loading(&self) -> bool {
        self.items.is_loading()
    }

    /// Computes the filter results for the current render.
    ///
    /// Results are only produced while the menu is open and the collection
    /// has items; otherwise the list is empty regardless of query. This is
    /// recomputed on every call as a pure function of the current state.
    pub fn filtered_results(&self) -> Vec<FilteredItem<I>> {
        if !self.is_open() || !self.has_items() {
            return Vec::new();
        }
        autocomplete_filter(self.items.items(), self.effective_query())
    }

    /// Resolves the selected item id to an index in the full collection.
    ///
    /// A selection whose id no longer appears in the collection yields
    /// `None` rather than an error.
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.state.selected_id()?;
        self.items
            .items()
            .iter()
            .position(|item| item.id() == selected)
    }

    /// Returns the context struct passed to the actor render closure.
    pub fn actor_context(&self) -> ActorContext {
        ActorContext {
            actions: self.actions(),
            is_open: self.is_open(),
            selected_index: self.selected_index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dropdown::DefaultItem;

    fn three_items() -> ItemCollection<DefaultItem> {
        vec![
            DefaultItem::new("1", "Apple"),
            DefaultItem::new("2", "Banana"),
            DefaultItem::new("3", "Cherry"),
        ]
        .into()
    }

    #[test]
    fn selected_index_resolves_by_id() {
        let mut dropdown = Model::new(three_items());
        dropdown.select_id("2");
        assert_eq!(dropdown.selected_index(), Some(1));
    }

    #[test]
    fn selected_index_absent_id_is_none() {
        let mut dropdown = Model::new(three_items());
        dropdown.select_id("nope");
        assert_eq!(dropdown.selected_index(), None);
    }

    #[test]
    fn selected_index_without_selection_is_none() {
        let dropdown = Model::new(three_items());
        assert_eq!(dropdown.selected_index(), None);
    }

    #[test]
    fn closed_menu_yields_no_results() {
        let mut dropdown = Model::new(three_items());
        dropdown.state.input.set_value("apple");
        assert!(!dropdown.is_open());
        assert!(dropdown.filtered_results().is_empty());
    }

    #[test]
    fn open_menu_filters_items() {
        let mut dropdown = Model::new(three_items());
        dropdown.state.open_menu();
        dropdown.state.input.set_value("ban");
        let results = dropdown.filtered_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item.id(), "2");
    }

    #[test]
    fn filter_override_bypasses_input_value() {
        let mut dropdown = Model::new(three_items()).with_filter_override("cherry");
        dropdown.state.open_menu();
        dropdown.state.input.set_value("apple");
        let results = dropdown.filtered_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item.id(), "3");
    }

    #[test]
    fn loading_collection_has_no_items() {
        let dropdown: Model<DefaultItem> = Model::new(ItemCollection::Loading);
        assert!(dropdown.items_loading());
        assert!(!dropdown.has_items());
    }

    #[test]
    fn set_items_resets_scroll_but_keeps_selection() {
        let mut dropdown = Model::new(three_items());
        dropdown.select_id("2");
        dropdown.scroll_offset = 4;
        dropdown.set_items(three_items());
        assert_eq!(dropdown.scroll_offset(), 0);
        assert_eq!(dropdown.selected_index(), Some(1));
    }
}
