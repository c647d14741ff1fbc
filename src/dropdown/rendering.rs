//! View composition: the actor row and, while open, the menu panel.
//!
//! Rendering is a pure function of the model. Every call recomputes the
//! filter results and the display flags; the order of the branches below
//! mirrors the flag derivation in `derived.rs`:
//!
//! 1. loading spinner while the collection has not been provided
//! 2. empty-collection message
//! 3. "Searching..." placeholder while busy (unless items stay visible)
//! 4. no-search-results message
//! 5. the filtered row list

use super::model::{MenuAlign, MenuFooter, Model};
use super::style::ACTOR_ARROW;
use super::types::Item;
use lipgloss_extras::lipgloss::width_visible;

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Renders the complete widget: the actor row, then the menu panel
    /// when the menu is open.
    pub fn view(&self) -> String {
        let actor = self.view_actor();
        if !self.is_open() {
            return actor;
        }
        let menu = self.view_menu();
        format!("{}\n{}", actor, self.align_menu_under(&actor, &menu))
    }

    /// Renders the always-visible actor row.
    ///
    /// With a caller-supplied closure, its output is used verbatim.
    /// Otherwise the default row shows the selected item's label (or the
    /// input placeholder when nothing is selected) and a dropdown arrow.
    pub(super) fn view_actor(&self) -> String {
        if let Some(actor) = &self.actor {
            return actor(&self.actor_context());
        }

        let label = match self.selected_index() {
            Some(idx) => self.items.items()[idx].to_string(),
            None => self.state.input.placeholder().to_string(),
        };
        self.styles
            .actor
            .render(&format!("{label} {ACTOR_ARROW}"))
    }

    /// Renders the open menu panel.
    pub(super) fn view_menu(&self) -> String {
        let results = self.filtered_results();
        let derived = self.derived_for(&results);

        let mut sections: Vec<String> = Vec::new();

        if derived.show_input {
            let mut row = self.state.input.view();
            if self.busy || self.busy_items_still_visible {
                row.push(' ');
                row.push_str(&self.input_spinner.view());
            }
            sections.push(row);
        }

        if let Some(header) = &self.menu_header {
            sections.push(self.styles.menu_header.render(header));
        }

        if derived.items_loading {
            sections.push(self.loading_spinner.view());
        } else if derived.show_empty_message {
            sections.push(self.styles.empty_message.render(&self.empty_message));
        } else if self.busy && !self.busy_items_still_visible {
            sections.push(self.styles.busy_message.render("Searching..."));
        } else if derived.show_no_results_message {
            let message = match &self.no_results_message {
                Some(m) => m.clone(),
                None => format!("{} found", self.empty_message),
            };
            sections.push(self.styles.no_results_message.render(&message));
        } else if !results.is_empty() {
            sections.push(self.view_rows(&results));
        }

        match &self.menu_footer {
            Some(MenuFooter::Static(footer)) => {
                sections.push(self.styles.menu_footer.render(footer));
            }
            Some(MenuFooter::WithActions(footer)) => {
                sections.push(self.styles.menu_footer.render(&footer(&self.actions())));
            }
            None => {}
        }

        self.styles.menu.render(&sections.join("\n"))
    }

    /// Shifts the menu panel horizontally per the configured alignment.
    ///
    /// Right alignment lines the panel's right edge up with the actor
    /// row's right edge; when the panel is wider than the actor it stays
    /// flush left.
    fn align_menu_under(&self, actor: &str, menu: &str) -> String {
        if self.align_menu == MenuAlign::Left {
            return menu.to_string();
        }

        let actor_width = width_visible(actor);
        let menu_width = menu.lines().map(width_visible).max().unwrap_or(0);
        let indent = actor_width.saturating_sub(menu_width);
        if indent == 0 {
            return menu.to_string();
        }

        let pad = " ".repeat(indent);
        menu.lines()
            .map(|line| format!("{pad}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dropdown::{DefaultItem, ItemCollection, MenuFooter, Model};

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
    fn closed_menu_renders_actor_only() {
        let dropdown = Model::new(items(&["Apple"]));
        let view = dropdown.view();
        assert!(view.contains(ACTOR_ARROW));
        assert!(!view.contains('\n'));
        assert!(!view.contains("Apple"));
    }

    #[test]
    fn default_actor_shows_selected_label() {
        let mut dropdown = Model::new(items(&["Apple", "Banana"]));
        dropdown.select_id("2");
        assert!(dropdown.view().contains("Banana"));
    }

    #[test]
    fn custom_actor_receives_context() {
        let mut dropdown = Model::new(items(&["Apple"])).with_actor(|ctx| {
            format!("open={} sel={:?}", ctx.is_open, ctx.selected_index)
        });
        assert_eq!(dropdown.view(), "open=false sel=None");
        dropdown.select_id("1");
        assert_eq!(dropdown.view(), "open=false sel=Some(0)");
    }

    #[test]
    fn open_menu_lists_items() {
        let dropdown = open(Model::new(items(&["Apple", "Banana"])));
        let view = dropdown.view();
        assert!(view.contains("Apple"));
        assert!(view.contains("Banana"));
    }

    #[test]
    fn busy_replaces_list_with_placeholder() {
        let dropdown = open(Model::new(items(&["Apple"])).with_busy(true));
        let view = dropdown.view();
        assert!(view.contains("Searching..."));
        assert!(!view.contains("Apple"));
    }

    #[test]
    fn busy_items_still_visible_keeps_list() {
        let dropdown = open(
            Model::new(items(&["Apple"]))
                .with_busy(true)
                .with_busy_items_still_visible(true),
        );
        let view = dropdown.view();
        assert!(!view.contains("Searching..."));
        assert!(view.contains("Apple"));
        // The mini spinner renders beside the input at the same time.
        assert!(view.contains("⠋"));
    }

    #[test]
    fn empty_message_is_configurable() {
        let dropdown = open(Model::new(items(&[])).with_empty_message("Nothing here"));
        assert!(dropdown.view().contains("Nothing here"));
    }

    #[test]
    fn no_results_message_defaults_from_empty_message() {
        let mut dropdown = open(Model::new(items(&["Apple"])).with_empty_message("No projects"));
        dropdown.state.input.set_value("zzz");
        assert!(dropdown.view().contains("No projects found"));
    }

    #[test]
    fn loading_renders_spinner_not_messages() {
        let dropdown: Model<DefaultItem> = open(Model::new(ItemCollection::Loading));
        let view = dropdown.view();
        assert!(!view.contains("No items"));
    }

    #[test]
    fn header_and_footer_frame_the_list() {
        let dropdown = open(
            Model::new(items(&["Apple"]))
                .with_menu_header("Projects")
                .with_menu_footer(MenuFooter::Static("ctrl+n new".to_string())),
        );
        let view = dropdown.view();
        assert!(view.contains("Projects"));
        assert!(view.contains("ctrl+n new"));
    }

    #[test]
    fn footer_closure_receives_actions() {
        let dropdown = open(
            Model::new(items(&["Apple"]))
                .with_menu_footer(MenuFooter::WithActions(Box::new(|_actions| {
                    "press esc to close".to_string()
                }))),
        );
        assert!(dropdown.view().contains("press esc to close"));
    }

    #[test]
    fn right_alignment_indents_to_the_actor_edge() {
        let dropdown = Model::new(items(&["Apple"])).with_align_menu(MenuAlign::Right);
        // Actor is 10 cells, widest menu line 4: every line shifts by 6.
        let aligned = dropdown.align_menu_under("0123456789", "menu\nrow");
        assert_eq!(aligned, "      menu\n      row");
    }

    #[test]
    fn right_alignment_with_wide_menu_stays_flush_left() {
        let dropdown = Model::new(items(&["Apple"])).with_align_menu(MenuAlign::Right);
        assert_eq!(dropdown.align_menu_under("ab", "a-wide-menu-row"), "a-wide-menu-row");
    }

    #[test]
    fn left_alignment_leaves_the_menu_unshifted() {
        let dropdown = Model::new(items(&["Apple"]));
        assert_eq!(dropdown.align_menu_under("0123456789", "menu"), "menu");
    }

    #[test]
    fn hidden_input_omits_placeholder_row() {
        let dropdown = open(
            Model::new(items(&["Apple"]))
                .with_search_placeholder("Type to filter")
                .with_hide_input(true),
        );
        assert!(!dropdown.view_menu().contains("Type to filter"));
    }
}
