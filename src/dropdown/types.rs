//! Core types for the dropdown component.
//!
//! This module contains the fundamental types the rest of the dropdown is
//! built on:
//! - [`Item`]: trait for rows that can be displayed, filtered, and selected
//! - [`DefaultItem`]: ready-to-use item with id, label, and group flag
//! - [`ItemCollection`]: tagged loading-vs-ready item state
//! - [`FilteredItem`]: a filter result with its original index and match indices
//! - [`ItemSize`]: display density hint for member rows

use std::fmt::Display;

/// Trait for items that can be displayed and filtered in a dropdown.
///
/// Items are immutable once handed to the dropdown; the model stores a
/// clone and never mutates it. The id is what selection is tracked by, so
/// it should be stable and unique within one collection.
///
/// # Examples
///
/// ```
/// use bubbletea_dropdown::dropdown::Item;
/// use std::fmt::Display;
///
/// #[derive(Clone)]
/// struct Project {
///     slug: String,
///     name: String,
/// }
///
/// impl Display for Project {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.name)
///     }
/// }
///
/// impl Item for Project {
///     fn id(&self) -> String {
///         self.slug.clone()
///     }
/// }
/// ```
pub trait Item: Display + Clone {
    /// Returns the identifier selection is tracked by.
    fn id(&self) -> String;

    /// Returns the text the filter matches the query against.
    ///
    /// Defaults to the display label. Override to make additional fields
    /// searchable, e.g. `format!("{} {}", self.name, self.team)`.
    fn filter_value(&self) -> String {
        self.to_string()
    }

    /// Returns true when this row is a group label rather than a
    /// selectable item.
    ///
    /// Group labels are never matched against the query and cannot be
    /// selected; they are retained in filtered results while at least one
    /// of their member rows matches.
    fn is_group_label(&self) -> bool {
        false
    }

    /// Optional display-density override for this row.
    ///
    /// `None` means the dropdown-wide [`ItemSize`] applies.
    fn size_hint(&self) -> Option<ItemSize> {
        None
    }
}

/// Display density for member rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemSize {
    /// No horizontal padding around the row label.
    Zero,
    /// One cell of horizontal padding. The default.
    #[default]
    Small,
}

/// Item state distinguishing "not yet fetched" from "fetched and empty".
///
/// An absent collection signals a loading state, not an error: the
/// dropdown renders a spinner for `Loading` and the empty message for
/// `Ready` with no items.
///
/// # Examples
///
/// ```
/// use bubbletea_dropdown::dropdown::{DefaultItem, ItemCollection};
///
/// let loading: ItemCollection<DefaultItem> = ItemCollection::Loading;
/// assert!(loading.is_loading());
/// assert!(loading.items().is_empty());
///
/// let ready = ItemCollection::from(vec![DefaultItem::new("1", "Apple")]);
/// assert_eq!(ready.items().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub enum ItemCollection<I> {
    /// Items have not been provided yet; an async fetch is in flight.
    Loading,
    /// Items are available (possibly none).
    Ready(Vec<I>),
}

impl<I> ItemCollection<I> {
    /// Returns true for the loading state.
    pub fn is_loading(&self) -> bool {
        matches!(self, ItemCollection::Loading)
    }

    /// Returns the items, or an empty slice while loading.
    pub fn items(&self) -> &[I] {
        match self {
            ItemCollection::Loading => &[],
            ItemCollection::Ready(items) => items,
        }
    }
}

impl<I> Default for ItemCollection<I> {
    fn default() -> Self {
        ItemCollection::Ready(Vec::new())
    }
}

impl<I> From<Vec<I>> for ItemCollection<I> {
    fn from(items: Vec<I>) -> Self {
        ItemCollection::Ready(items)
    }
}

/// A filter result: the original item, where it came from, and which
/// characters of its filter value matched the query.
///
/// The original index refers to the full item collection, so selection
/// and highlight state survive re-filtering. Match indices are character
/// positions used for highlight styling.
#[derive(Debug, Clone)]
pub struct FilteredItem<I> {
    /// Index of this item in the full collection.
    pub index: usize,
    /// The item itself.
    pub item: I,
    /// Character indices of the filter value that matched the query.
    pub matches: Vec<usize>,
}

/// Ready-to-use item with an id, a display label, an optional group-label
/// flag, and an optional size hint.
///
/// # Examples
///
/// ```
/// use bubbletea_dropdown::dropdown::{DefaultItem, Item};
///
/// let backend = DefaultItem::group_label("Backend");
/// let api = DefaultItem::new("api", "api-server");
/// assert!(backend.is_group_label());
/// assert_eq!(api.id(), "api");
/// ```
#[derive(Debug, Clone)]
pub struct DefaultItem {
    id: String,
    label: String,
    group_label: bool,
    size: Option<ItemSize>,
}

impl DefaultItem {
    /// Creates a selectable item with an id and display label.
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            group_label: false,
            size: None,
        }
    }

    /// Creates a group-label row. The label doubles as the id.
    pub fn group_label(label: &str) -> Self {
        Self {
            id: label.to_string(),
            label: label.to_string(),
            group_label: true,
            size: None,
        }
    }

    /// Overrides the dropdown-wide item size for this row.
    pub fn with_size(mut self, size: ItemSize) -> Self {
        self.size = Some(size);
        self
    }
}

impl Display for DefaultItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl Item for DefaultItem {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn is_group_label(&self) -> bool {
        self.group_label
    }

    fn size_hint(&self) -> Option<ItemSize> {
        self.size
    }
}
