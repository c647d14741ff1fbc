//! Autocomplete state primitive backing the dropdown widget.
//!
//! This module owns the interaction state the dropdown reads on every
//! render: the open/closed flag, the keyboard-highlighted row index, the
//! selected item id, and the live search input. Nothing else in the crate
//! mutates this state directly; the dropdown drives it through the methods
//! here and through [`Actions`] commands.
//!
//! ## Actions routing
//!
//! [`Actions`] is a cheap copyable handle exposing `open()`/`close()` as
//! bubbletea-rs commands. The resulting [`OpenMsg`]/[`CloseMsg`] carry the
//! owning instance's id, so caller-supplied content (for example a menu
//! footer) can trigger the menu without holding a mutable reference to it.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_dropdown::autocomplete;
//!
//! let mut state = autocomplete::Model::new();
//! assert!(!state.is_open());
//! state.open_menu();
//! assert!(state.is_open());
//! assert_eq!(state.highlighted_index(), 0);
//! ```

use crate::input;
use bubbletea_rs::{Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Command message requesting that the addressed menu open.
#[derive(Debug, Clone)]
pub struct OpenMsg {
    /// Id of the autocomplete instance this message addresses.
    pub id: i64,
}

/// Command message requesting that the addressed menu close.
#[derive(Debug, Clone)]
pub struct CloseMsg {
    /// Id of the autocomplete instance this message addresses.
    pub id: i64,
}

/// Handle exposing open/close as commands, routed back to the owning
/// instance by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actions {
    id: i64,
}

impl Actions {
    /// Returns a command that opens the owning menu.
    pub fn open(&self) -> Cmd {
        let id = self.id;
        Box::pin(async move { Some(Box::new(OpenMsg { id }) as Msg) })
    }

    /// Returns a command that closes the owning menu.
    pub fn close(&self) -> Cmd {
        let id = self.id;
        Box::pin(async move { Some(Box::new(CloseMsg { id }) as Msg) })
    }
}

/// Interaction state for one dropdown: open flag, highlight, selection,
/// and the search input.
#[derive(Debug, Clone)]
pub struct Model {
    id: i64,
    open: bool,
    highlighted: usize,
    selected_id: Option<String>,
    /// The live filter input. The dropdown reads its value as the default
    /// query and forwards editing keys to it while the menu is open.
    pub input: input::Model,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates closed state with nothing selected.
    pub fn new() -> Self {
        Self {
            id: next_id(),
            open: false,
            highlighted: 0,
            selected_id: None,
            input: input::Model::new(),
        }
    }

    /// Returns this instance's routing id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns an [`Actions`] handle for this instance.
    pub fn actions(&self) -> Actions {
        Actions { id: self.id }
    }

    /// Returns whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the keyboard-highlighted row index.
    pub fn highlighted_index(&self) -> usize {
        self.highlighted
    }

    /// Returns the selected item id, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Marks the item with the given id as selected.
    pub fn select(&mut self, id: &str) {
        self.selected_id = Some(id.to_string());
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Opens the menu, focusing the input and resetting the highlight.
    ///
    /// Returns false when the menu was already open.
    pub fn open_menu(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.highlighted = 0;
        self.input.focus();
        true
    }

    /// Closes the menu, blurring and resetting the input.
    ///
    /// Returns false when the menu was already closed. The input value is
    /// discarded on close so the next open starts from an empty query.
    pub fn close_menu(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.input.blur();
        self.input.reset();
        true
    }

    /// Moves the highlight up one row.
    pub fn highlight_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Moves the highlight down one row, clamped to `row_count`.
    pub fn highlight_down(&mut self, row_count: usize) {
        if self.highlighted + 1 < row_count {
            self.highlighted += 1;
        }
    }

    /// Resets the highlight to the first row.
    ///
    /// Called when the query changes, since the previous highlight refers
    /// to a result list that no longer exists.
    pub fn reset_highlight(&mut self) {
        self.highlighted = 0;
    }

    /// Clamps the highlight into `0..row_count`.
    ///
    /// The result list can shrink between renders (busy toggles, new item
    /// collections); this keeps the highlight addressable.
    pub fn clamp_highlight(&mut self, row_count: usize) {
        if row_count == 0 {
            self.highlighted = 0;
        } else if self.highlighted >= row_count {
            self.highlighted = row_count - 1;
        }
    }

    /// Applies an [`OpenMsg`]/[`CloseMsg`] addressed to this instance.
    ///
    /// Returns the transition that occurred, or `None` when the message is
    /// not an actions message, addresses another instance, or was a no-op.
    pub fn handle_actions_msg(&mut self, msg: &Msg) -> Option<Transition> {
        if let Some(open) = msg.downcast_ref::<OpenMsg>() {
            if open.id == self.id && self.open_menu() {
                return Some(Transition::Opened);
            }
            return None;
        }
        if let Some(close) = msg.downcast_ref::<CloseMsg>() {
            if close.id == self.id && self.close_menu() {
                return Some(Transition::Closed);
            }
        }
        None
    }
}

/// Open/close transition reported by [`Model::handle_actions_msg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The menu went from closed to open.
    Opened,
    /// The menu went from open to closed.
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_resets_highlight_and_focuses_input() {
        let mut state = Model::new();
        state.open_menu();
        state.highlight_down(5);
        state.highlight_down(5);
        state.close_menu();
        state.open_menu();
        assert_eq!(state.highlighted_index(), 0);
        assert!(state.input.focused());
    }

    #[test]
    fn close_resets_input_value() {
        let mut state = Model::new();
        state.open_menu();
        state.input.set_value("que");
        state.close_menu();
        assert_eq!(state.input.value(), "");
        assert!(!state.input.focused());
    }

    #[test]
    fn highlight_is_clamped_to_row_count() {
        let mut state = Model::new();
        state.open_menu();
        for _ in 0..10 {
            state.highlight_down(3);
        }
        assert_eq!(state.highlighted_index(), 2);

        state.clamp_highlight(1);
        assert_eq!(state.highlighted_index(), 0);

        state.clamp_highlight(0);
        assert_eq!(state.highlighted_index(), 0);
    }

    #[test]
    fn highlight_up_saturates_at_zero() {
        let mut state = Model::new();
        state.highlight_up();
        assert_eq!(state.highlighted_index(), 0);
    }

    #[test]
    fn actions_messages_route_by_id() {
        let mut state = Model::new();
        let other = Model::new();

        let foreign: Msg = Box::new(OpenMsg { id: other.id() });
        assert_eq!(state.handle_actions_msg(&foreign), None);
        assert!(!state.is_open());

        let own: Msg = Box::new(OpenMsg { id: state.id() });
        assert_eq!(state.handle_actions_msg(&own), Some(Transition::Opened));
        assert!(state.is_open());

        // Opening an already-open menu is a no-op, not a transition.
        let again: Msg = Box::new(OpenMsg { id: state.id() });
        assert_eq!(state.handle_actions_msg(&again), None);

        let close: Msg = Box::new(CloseMsg { id: state.id() });
        assert_eq!(state.handle_actions_msg(&close), Some(Transition::Closed));
    }

    #[test]
    fn selection_tracks_ids() {
        let mut state = Model::new();
        assert_eq!(state.selected_id(), None);
        state.select("2");
        assert_eq!(state.selected_id(), Some("2"));
        state.clear_selection();
        assert_eq!(state.selected_id(), None);
    }
}
