//! A filterable dropdown/autocomplete menu for terminal applications.
//!
//! The widget renders an always-visible actor row plus, while open, a menu
//! panel containing a search input and a filtered item list. It follows
//! The Elm Architecture: the host application forwards messages to
//! [`Model::update`] and renders [`Model::view`] into its own output.
//!
//! ## Features
//!
//! - Fuzzy filtering with match-character highlighting
//! - Keyboard navigation with a clamped highlight and selection by item id
//! - Group labels that survive filtering while any of their members match
//! - A `Loading` collection state rendered as a spinner
//! - Externally driven busy state, with or without the list staying visible
//! - Optional virtualized rendering for large collections
//! - Caller-supplied actor, header, and footer content
//!
//! ## Basic Usage
//!
//! ```rust
//! use bubbletea_dropdown::dropdown::{DefaultItem, Item, Model};
//!
//! let items = vec![
//!     DefaultItem::new("fe", "frontend"),
//!     DefaultItem::new("be", "backend"),
//!     DefaultItem::new("ml", "ml-pipeline"),
//! ];
//! let mut dropdown: Model<DefaultItem> = Model::new(items.into())
//!     .with_search_placeholder("Filter projects")
//!     .with_on_select(|item| {
//!         let _id = item.id();
//!         None
//!     });
//!
//! // Forward messages from your update() and render from your view():
//! // dropdown.update(&msg);
//! // output.push_str(&dropdown.view());
//! ```

mod derived;
mod filtering;
mod list;
mod model;
mod rendering;
mod types;

pub mod keys;
pub mod style;

pub use derived::Derived;
pub use filtering::autocomplete_filter;
pub use keys::DropdownKeyMap;
pub use model::{
    ActionCallback, ActorContext, ActorRender, ChangeCallback, MenuAlign, MenuFooter, Model,
    SelectCallback,
};
pub use style::{DropdownStyles, ACTOR_ARROW};
pub use types::{DefaultItem, FilteredItem, Item, ItemCollection, ItemSize};

use crate::autocomplete::Transition;
use crate::spinner;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

/// Combines two optional commands into one, batching when both are set.
fn merge_cmds(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
    match (first, second) {
        (Some(a), Some(b)) => Some(bubbletea_rs::batch(vec![a, b])),
        (first, None) => first,
        (None, second) => second,
    }
}

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Processes one message: actions commands, spinner ticks, and keys.
    ///
    /// Key handling depends on the menu state. Closed, only the open
    /// binding does anything. Open, the close/navigate/select bindings are
    /// checked first and every other key is forwarded to the search input.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(transition) = self.state.handle_actions_msg(msg) {
            return match transition {
                Transition::Opened => self.after_open(),
                Transition::Closed => self.after_close(),
            };
        }

        if msg.downcast_ref::<spinner::TickMsg>().is_some() {
            return self.update_spinners(msg);
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return if self.is_open() {
                self.update_open(key)
            } else {
                self.update_closed(key)
            };
        }

        None
    }

    fn update_closed(&mut self, key: &KeyMsg) -> Option<Cmd> {
        if self.keymap.open.matches(key) && self.state.open_menu() {
            return self.after_open();
        }
        None
    }

    fn update_open(&mut self, key: &KeyMsg) -> Option<Cmd> {
        if self.keymap.close.matches(key) {
            if self.state.close_menu() {
                return self.after_close();
            }
            return None;
        }
        if self.keymap.select.matches(key) {
            return self.select_highlighted();
        }
        if self.keymap.cursor_up.matches(key) {
            self.state.highlight_up();
            return self.sync_scroll();
        }
        if self.keymap.cursor_down.matches(key) {
            let rows = self.filtered_results().len();
            self.state.highlight_down(rows);
            return self.sync_scroll();
        }
        self.update_input(key)
    }

    fn after_open(&mut self) -> Option<Cmd> {
        self.scroll_offset = 0;
        let spin = if self.items_loading() {
            Some(self.loading_spinner.tick())
        } else if self.busy || self.busy_items_still_visible {
            Some(self.input_spinner.tick())
        } else {
            None
        };
        merge_cmds(spin, self.on_open.as_ref().and_then(|f| f()))
    }

    fn after_close(&mut self) -> Option<Cmd> {
        self.scroll_offset = 0;
        self.on_close.as_ref().and_then(|f| f())
    }

    /// Forwards a tick to whichever spinner is currently visible.
    ///
    /// A tick for a spinner that is no longer visible is dropped, which
    /// ends its tick chain; opening the menu again restarts it.
    fn update_spinners(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.is_open() {
            return None;
        }
        if self.items_loading() {
            if let Some(cmd) = self.loading_spinner.update(msg) {
                return Some(cmd);
            }
        }
        if self.busy || self.busy_items_still_visible {
            if let Some(cmd) = self.input_spinner.update(msg) {
                return Some(cmd);
            }
        }
        None
    }

    /// Selects the highlighted row, then closes the menu.
    ///
    /// Group-label rows are navigable but not selectable; selecting one is
    /// a no-op that leaves the menu open.
    fn select_highlighted(&mut self) -> Option<Cmd> {
        let results = self.filtered_results();
        if results.is_empty() {
            return None;
        }
        let idx = self.state.highlighted_index().min(results.len() - 1);
        let row = &results[idx];
        if row.item.is_group_label() {
            return None;
        }

        let item = row.item.clone();
        self.state.select(&item.id());
        self.state.close_menu();
        self.scroll_offset = 0;

        let select_cmd = self.on_select.as_ref().and_then(|f| f(&item));
        let close_cmd = self.on_close.as_ref().and_then(|f| f());
        merge_cmds(select_cmd, close_cmd)
    }

    fn update_input(&mut self, key: &KeyMsg) -> Option<Cmd> {
        if self.hide_input {
            return None;
        }

        let before = self.state.input.value().to_string();
        match key.key {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.input.insert_char(c);
            }
            KeyCode::Backspace => self.state.input.delete_char_backward(),
            KeyCode::Delete => self.state.input.delete_char_forward(),
            KeyCode::Left => self.state.input.cursor_left(),
            KeyCode::Right => self.state.input.cursor_right(),
            KeyCode::Home => self.state.input.cursor_start(),
            KeyCode::End => self.state.input.cursor_end(),
            _ => return None,
        }

        if self.state.input.value() != before {
            // The previous highlight and scroll window refer to a result
            // list that no longer exists.
            self.state.reset_highlight();
            self.scroll_offset = 0;
            return self
                .on_change
                .as_ref()
                .and_then(|f| f(self.state.input.value()));
        }
        None
    }

    /// Clamps the highlight to the current result list and moves the
    /// scroll window to keep it visible.
    fn sync_scroll(&mut self) -> Option<Cmd> {
        let results = self.filtered_results();
        self.state.clamp_highlight(results.len());
        let heights = self.row_heights(&results);
        let offset = list::scroll_into_view(
            &heights,
            self.scroll_offset,
            self.list_viewport(),
            self.state.highlighted_index(),
        );
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            return self.on_scroll.as_ref().and_then(|f| f());
        }
        None
    }
}
