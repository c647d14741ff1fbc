//! Styling for the dropdown's visual elements.
//!
//! Built on lipgloss with adaptive colors throughout, so the widget reads
//! well on both light and dark terminal themes. All elements can be
//! restyled by replacing fields on [`DropdownStyles`].
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_dropdown::dropdown::DropdownStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = DropdownStyles::default();
//! styles.highlighted_item = Style::new()
//!     .foreground(Color::from("#EE6FF8"))
//!     .bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Glyph rendered at the right edge of the default actor row.
pub const ACTOR_ARROW: &str = "▾";

/// Styling configuration for every visual element of the dropdown.
#[derive(Debug, Clone)]
pub struct DropdownStyles {
    /// The always-visible actor/trigger row.
    pub actor: Style,
    /// The menu panel container.
    pub menu: Style,
    /// Group-label rows.
    pub group_label: Style,
    /// Member rows in their normal state.
    pub item: Style,
    /// The keyboard-highlighted member row.
    pub highlighted_item: Style,
    /// Characters of a row that matched the filter query.
    pub filter_match: Style,
    /// The empty-collection message.
    pub empty_message: Style,
    /// The no-search-results message.
    pub no_results_message: Style,
    /// The "Searching..." placeholder shown while busy.
    pub busy_message: Style,
    /// Spinner glyphs.
    pub spinner: Style,
    /// Caller-supplied header content.
    pub menu_header: Style,
    /// Caller-supplied footer content.
    pub menu_footer: Style,
}

impl Default for DropdownStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let message_color = AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        };
        let label_color = AdaptiveColor {
            Light: "#6B6B6B",
            Dark: "#8A8A8A",
        };

        Self {
            actor: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            menu: Style::new().padding(0, 1, 0, 1),
            group_label: Style::new().foreground(label_color).bold(true),
            item: Style::new().foreground(AdaptiveColor {
                Light: "#2d2d2d",
                Dark: "#dddddd",
            }),
            highlighted_item: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            filter_match: Style::new().underline(true),
            empty_message: Style::new().foreground(message_color.clone()),
            no_results_message: Style::new().foreground(message_color),
            busy_message: Style::new().foreground(subdued_color.clone()),
            spinner: Style::new().foreground(AdaptiveColor {
                Light: "#8E8E8E",
                Dark: "#747373",
            }),
            menu_header: Style::new().foreground(subdued_color.clone()).bold(true),
            menu_footer: Style::new().foreground(subdued_color),
        }
    }
}
