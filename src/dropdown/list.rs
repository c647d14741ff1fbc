//! List rendering for the menu panel, with optional virtualization.
//!
//! In plain mode the list renders a window of up to `max_height` rows. In
//! virtualized mode (a fixed window height is configured) only the rows
//! inside the scroll window are rendered, using fixed per-row heights:
//! one row per member item and a configurable height for group labels.
//! The window follows the keyboard highlight.

use super::model::Model;
use super::types::{FilteredItem, Item, ItemSize};
use lipgloss_extras::prelude::*;

/// Height in rows of one result row.
///
/// Member rows are always one row; group labels take `label_height` rows
/// in virtualized mode.
pub(super) fn row_height<I: Item>(row: &FilteredItem<I>, label_height: usize) -> usize {
    if row.item.is_group_label() {
        label_height.max(1)
    } else {
        1
    }
}

/// Computes the range of rows visible in a window of `viewport` lines
/// starting at row `offset`.
///
/// At least one row is included when any rows remain past the offset,
/// even if it is taller than the viewport.
pub(super) fn visible_range(heights: &[usize], offset: usize, viewport: usize) -> std::ops::Range<usize> {
    let start = offset.min(heights.len());
    let mut end = start;
    let mut used = 0;

    for &h in &heights[start..] {
        if end > start && used + h > viewport {
            break;
        }
        used += h;
        end += 1;
        if used >= viewport {
            break;
        }
    }

    start..end
}

/// Returns the smallest window offset that brings row `target` fully into
/// a window of `viewport` lines, moving the current `offset` as little as
/// possible.
pub(super) fn scroll_into_view(
    heights: &[usize],
    offset: usize,
    viewport: usize,
    target: usize,
) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let target = target.min(heights.len() - 1);

    // Scrolling up: the window starts at the target.
    if target < offset {
        return target;
    }

    // Already visible?
    if visible_range(heights, offset, viewport).contains(&target) {
        return offset;
    }

    // Scrolling down: walk backward from the target until the window is
    // full, so the target becomes the last fully visible row.
    let mut used = 0;
    let mut start = target;
    loop {
        let h = heights[start];
        if used + h > viewport && start < target {
            start += 1;
            break;
        }
        used += h;
        if start == 0 || used >= viewport {
            break;
        }
        start -= 1;
    }
    start.max(offset.min(target))
}

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Heights of all result rows under the current configuration.
    pub(super) fn row_heights(&self, rows: &[FilteredItem<I>]) -> Vec<usize> {
        let label_height = self.label_row_height();
        rows.iter().map(|r| row_height(r, label_height)).collect()
    }

    /// The height of the rendered list window in lines.
    pub(super) fn list_viewport(&self) -> usize {
        self.virtualized_height.unwrap_or(self.max_height)
    }

    fn label_row_height(&self) -> usize {
        if self.virtualized_height.is_some() {
            self.virtualized_label_height.unwrap_or(1)
        } else {
            1
        }
    }

    /// Renders the rows inside the current scroll window.
    pub(super) fn view_rows(&self, rows: &[FilteredItem<I>]) -> String {
        let heights = self.row_heights(rows);
        let range = visible_range(&heights, self.scroll_offset, self.list_viewport());
        let label_height = self.label_row_height();
        let highlighted = self.state.highlighted_index();

        let mut lines = Vec::new();
        for (row_idx, row) in rows[range.clone()].iter().enumerate() {
            let row_idx = range.start + row_idx;
            if row.item.is_group_label() {
                lines.push(self.styles.group_label.render(&row.item.to_string()));
                for _ in 1..label_height {
                    lines.push(String::new());
                }
            } else {
                lines.push(self.view_member_row(row, row_idx == highlighted));
            }
        }
        lines.join("\n")
    }

    fn view_member_row(&self, row: &FilteredItem<I>, highlighted: bool) -> String {
        let pad = match row.item.size_hint().unwrap_or(self.item_size) {
            ItemSize::Zero => "",
            ItemSize::Small => " ",
        };
        let label = row.item.to_string();

        let body = if highlighted {
            self.styles.highlighted_item.render(&label)
        } else {
            apply_match_highlight(
                &label,
                &row.matches,
                &self.styles.filter_match,
                &self.styles.item,
            )
        };

        let marker = if highlighted { ">" } else { " " };
        format!("{marker}{pad}{body}")
    }
}

/// Applies the match style to the characters at `matches`, the base style
/// to everything else.
pub(super) fn apply_match_highlight(
    text: &str,
    matches: &[usize],
    match_style: &Style,
    base_style: &Style,
) -> String {
    if matches.is_empty() {
        return base_style.render(text);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sorted = matches.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut out = String::new();
    let mut pos = 0;
    for &idx in &sorted {
        if idx >= chars.len() {
            continue;
        }
        if pos < idx {
            let segment: String = chars[pos..idx].iter().collect();
            out.push_str(&base_style.render(&segment));
        }
        out.push_str(&match_style.render(&chars[idx].to_string()));
        pos = idx + 1;
    }
    if pos < chars.len() {
        let rest: String = chars[pos..].iter().collect();
        out.push_str(&base_style.render(&rest));
    }
    out
}
