//! Shared navigation logic for the admin tabs
//!
//! Selection moves within the filtered list and the scroll offset follows to
//! keep it visible. All functions operate on a tab's [`NavigationData`].

use crate::tui::admin::state::NavigationData;

/// Move the cursor down one row, adjusting scroll if it leaves the viewport.
pub fn scroll_down(nav: &mut NavigationData, list_count: usize, list_height: usize) {
    if list_count == 0 {
        return;
    }

    nav.selected_index = (nav.selected_index + 1).min(list_count - 1);
    if nav.selected_index >= nav.scroll_offset + list_height {
        nav.scroll_offset = nav.selected_index.saturating_sub(list_height - 1);
    }
}

/// Move the cursor up one row, adjusting scroll if it leaves the viewport.
pub fn scroll_up(nav: &mut NavigationData) {
    nav.selected_index = nav.selected_index.saturating_sub(1);
    if nav.selected_index < nav.scroll_offset {
        nav.scroll_offset = nav.selected_index;
    }
}

/// Jump to the first row.
pub fn scroll_to_top(nav: &mut NavigationData) {
    nav.selected_index = 0;
    nav.scroll_offset = 0;
}

/// Jump to the last row, scrolling so it is visible.
pub fn scroll_to_bottom(nav: &mut NavigationData, list_count: usize, list_height: usize) {
    if list_count == 0 {
        return;
    }

    nav.selected_index = list_count - 1;
    if nav.selected_index >= list_height {
        nav.scroll_offset = nav.selected_index.saturating_sub(list_height - 1);
    }
}

/// Clamp the cursor after the underlying list shrank (reload or filter
/// change).
pub fn clamp_selection(nav: &mut NavigationData, list_count: usize) {
    if list_count == 0 {
        nav.selected_index = 0;
        nav.scroll_offset = 0;
    } else if nav.selected_index >= list_count {
        nav.selected_index = list_count - 1;
        nav.scroll_offset = nav.scroll_offset.min(nav.selected_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(selected: usize, scroll: usize) -> NavigationData {
        NavigationData {
            selected_index: selected,
            scroll_offset: scroll,
            ..Default::default()
        }
    }

    #[test]
    fn test_scroll_down_within_view() {
        let mut n = nav(0, 0);
        scroll_down(&mut n, 3, 20);
        assert_eq!(n.selected_index, 1);
        assert_eq!(n.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_down_at_bottom_stays() {
        let mut n = nav(2, 0);
        scroll_down(&mut n, 3, 20);
        assert_eq!(n.selected_index, 2);
    }

    #[test]
    fn test_scroll_down_moves_offset_past_view() {
        let mut n = nav(9, 0);
        scroll_down(&mut n, 50, 10);
        assert_eq!(n.selected_index, 10);
        assert_eq!(n.scroll_offset, 1);
    }

    #[test]
    fn test_scroll_down_on_empty_list_is_noop() {
        let mut n = nav(0, 0);
        scroll_down(&mut n, 0, 10);
        assert_eq!(n.selected_index, 0);
    }

    #[test]
    fn test_scroll_up_at_top_stays() {
        let mut n = nav(0, 0);
        scroll_up(&mut n);
        assert_eq!(n.selected_index, 0);
        assert_eq!(n.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_up_pulls_offset_down() {
        let mut n = nav(5, 5);
        scroll_up(&mut n);
        assert_eq!(n.selected_index, 4);
        assert_eq!(n.scroll_offset, 4);
    }

    #[test]
    fn test_scroll_to_bottom_adjusts_offset() {
        let mut n = nav(0, 0);
        scroll_to_bottom(&mut n, 50, 10);
        assert_eq!(n.selected_index, 49);
        assert_eq!(n.scroll_offset, 40);
    }

    #[test]
    fn test_clamp_selection_after_shrink() {
        let mut n = nav(9, 5);
        clamp_selection(&mut n, 4);
        assert_eq!(n.selected_index, 3);
        assert!(n.scroll_offset <= n.selected_index);

        clamp_selection(&mut n, 0);
        assert_eq!(n.selected_index, 0);
        assert_eq!(n.scroll_offset, 0);
    }
}
