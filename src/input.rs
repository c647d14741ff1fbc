//! Single-line search input used by the dropdown's filter row.
//!
//! This is a deliberately small input model: a value, a grapheme-aware
//! cursor, a placeholder, and a fixed render width. It does not own any
//! key bindings; the dropdown forwards the editing keys it cares about.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_dropdown::input;
//!
//! let mut search = input::Model::new().with_placeholder("Filter search");
//! search.focus();
//! search.insert_char('a');
//! assert_eq!(search.value(), "a");
//! ```

use lipgloss_extras::prelude::*;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A single-line text input with a grapheme-aware cursor.
///
/// The cursor position is counted in grapheme clusters, not bytes, so
/// editing behaves correctly for multi-byte and combining characters.
#[derive(Debug, Clone)]
pub struct Model {
    value: String,
    /// Cursor position in grapheme clusters.
    position: usize,
    placeholder: String,
    width: usize,
    focus: bool,
    /// Style applied to typed text.
    pub text_style: Style,
    /// Style applied to the placeholder when the value is empty.
    pub placeholder_style: Style,
    /// Style applied to the grapheme under the cursor while focused.
    pub cursor_style: Style,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            value: String::new(),
            position: 0,
            placeholder: String::new(),
            width: 0,
            focus: false,
            text_style: Style::new(),
            placeholder_style: Style::new().foreground(AdaptiveColor {
                Light: "#9B9B9B",
                Dark: "#5C5C5C",
            }),
            cursor_style: Style::new().reverse(true),
        }
    }
}

impl Model {
    /// Creates a new input with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placeholder shown while the value is empty.
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    /// Sets a fixed render width. Zero means no padding or truncation.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the current value and clamps the cursor to its end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.position = self.grapheme_len();
    }

    /// Updates the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Returns the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Clears the value and resets the cursor.
    pub fn reset(&mut self) {
        self.value.clear();
        self.position = 0;
    }

    /// Returns the cursor position in grapheme clusters.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Gives the input keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Returns whether the input currently has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_offset(self.position);
        self.value.insert(at, ch);
        self.position += 1;
    }

    /// Deletes the grapheme before the cursor.
    pub fn delete_char_backward(&mut self) {
        if self.position == 0 {
            return;
        }
        let start = self.byte_offset(self.position - 1);
        let end = self.byte_offset(self.position);
        self.value.replace_range(start..end, "");
        self.position -= 1;
    }

    /// Deletes the grapheme under the cursor.
    pub fn delete_char_forward(&mut self) {
        if self.position >= self.grapheme_len() {
            return;
        }
        let start = self.byte_offset(self.position);
        let end = self.byte_offset(self.position + 1);
        self.value.replace_range(start..end, "");
    }

    /// Moves the cursor one grapheme left.
    pub fn cursor_left(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Moves the cursor one grapheme right.
    pub fn cursor_right(&mut self) {
        if self.position < self.grapheme_len() {
            self.position += 1;
        }
    }

    /// Moves the cursor to the start of the value.
    pub fn cursor_start(&mut self) {
        self.position = 0;
    }

    /// Moves the cursor past the last grapheme.
    pub fn cursor_end(&mut self) {
        self.position = self.grapheme_len();
    }

    /// Renders the input line, padded or truncated to the configured width.
    pub fn view(&self) -> String {
        let mut out = if self.value.is_empty() && !self.focus {
            self.placeholder_style.render(&self.placeholder)
        } else {
            self.view_value()
        };

        if self.width > 0 {
            let visible = self.display_width();
            if visible < self.width {
                out.push_str(&" ".repeat(self.width - visible));
            }
        }
        out
    }

    fn view_value(&self) -> String {
        if !self.focus {
            return self.text_style.render(&self.value);
        }

        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let before: String = graphemes[..self.position.min(graphemes.len())].concat();
        let mut out = self.text_style.render(&before);

        if self.position < graphemes.len() {
            out.push_str(&self.cursor_style.render(graphemes[self.position]));
            let after: String = graphemes[self.position + 1..].concat();
            if !after.is_empty() {
                out.push_str(&self.text_style.render(&after));
            }
        } else {
            // Cursor past the end renders as a highlighted blank cell.
            out.push_str(&self.cursor_style.render(" "));
        }
        out
    }

    fn grapheme_len(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn display_width(&self) -> usize {
        // Width of the text content only; styling sequences do not add
        // printable cells.
        if self.value.is_empty() && !self.focus {
            self.placeholder.width()
        } else {
            let cursor_cell = if self.focus && self.position >= self.grapheme_len() {
                1
            } else {
                0
            };
            self.value.width() + cursor_cell
        }
    }
}
