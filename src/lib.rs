#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-dropdown/")]

//! # bubbletea-dropdown
//!
//! A filterable dropdown/autocomplete menu for terminal applications built
//! with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The crate centers on [`dropdown::Model`]: an always-visible actor row
//! that opens into a menu panel with a search input and a filtered item
//! list. Everything follows the Elm Architecture pattern with `update()`
//! and `view()` methods, so the widget drops into any bubbletea-rs
//! application's message loop.
//!
//! ## Features
//!
//! - **Fuzzy filtering** with per-character match highlighting
//! - **Keyboard navigation** with a clamped highlight and id-based selection
//! - **Group labels** kept visible while any of their members match
//! - **Loading and busy states** rendered with animated spinners
//! - **Virtualized rendering** for large collections
//! - **Type-safe key bindings** and lipgloss-based theming
//! - **Caller-supplied actor, header, and footer** content, including a
//!   footer closure receiving open/close command handles
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_dropdown::prelude::*;
//!
//! let items = vec![
//!     DefaultItem::new("fe", "frontend"),
//!     DefaultItem::new("be", "backend"),
//! ];
//! let dropdown: Dropdown<DefaultItem> = Dropdown::new(items.into())
//!     .with_search_placeholder("Filter projects")
//!     .with_empty_message("No projects");
//! assert!(!dropdown.is_open());
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_dropdown::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     projects: Dropdown<DefaultItem>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let items = vec![DefaultItem::new("fe", "frontend")];
//!         (Self { projects: Dropdown::new(items.into()) }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.projects.update(&msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.projects.view()
//!     }
//! }
//! ```

pub mod autocomplete;
pub mod dropdown;
pub mod input;
pub mod key;
pub mod spinner;

/// Convenient re-exports of the types most applications need.
///
/// ```rust
/// use bubbletea_dropdown::prelude::*;
/// ```
pub mod prelude {
    pub use crate::autocomplete::Actions;
    pub use crate::dropdown::{
        autocomplete_filter, ActorContext, DefaultItem, Derived, DropdownKeyMap, DropdownStyles,
        FilteredItem, Item, ItemCollection, ItemSize, MenuAlign, MenuFooter,
    };
    pub use crate::key::{Binding, KeyMap};

    /// The dropdown widget under a name that does not collide with the
    /// host application's own `Model`.
    pub use crate::dropdown::Model as Dropdown;
}
