//! Key bindings for dropdown navigation and interaction.
//!
//! ## Default bindings
//!
//! - **Open**: `enter`/`↓` while the menu is closed
//! - **Close**: `esc`
//! - **Navigation**: `↑`/`↓` move the keyboard highlight
//! - **Select**: `enter` on the highlighted row
//!
//! While the menu is open, printable characters and the editing keys are
//! forwarded to the search input rather than matched against bindings.

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for opening, closing, navigating, and selecting.
#[derive(Debug, Clone)]
pub struct DropdownKeyMap {
    /// Open the menu while it is closed.
    pub open: key::Binding,
    /// Close the menu.
    pub close: key::Binding,
    /// Move the highlight up one row.
    pub cursor_up: key::Binding,
    /// Move the highlight down one row.
    pub cursor_down: key::Binding,
    /// Select the highlighted row.
    pub select: key::Binding,
}

impl Default for DropdownKeyMap {
    fn default() -> Self {
        Self {
            open: key::Binding::new(vec![KeyCode::Enter, KeyCode::Down])
                .with_help("enter", "open"),
            close: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "close"),
            cursor_up: key::Binding::new(vec![KeyCode::Up]).with_help("↑", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down]).with_help("↓", "down"),
            select: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
        }
    }
}

impl key::KeyMap for DropdownKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.cursor_up, &self.cursor_down, &self.select, &self.close]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.cursor_up, &self.cursor_down],
            vec![&self.open, &self.select, &self.close],
        ]
    }
}
