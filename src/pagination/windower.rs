use serde::{Deserialize, Serialize};

use crate::pagination::token::PageToken;

/// Pages shown on each side of the current page on wide layouts
pub const FULL_RANGE: usize = 1;
/// Pages shown on each side of the current page on compact layouts
pub const COMPACT_RANGE: usize = 0;

/// Window half-widths for the two layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRanges {
    pub full: usize,
    pub compact: usize,
}

impl Default for WindowRanges {
    fn default() -> Self {
        Self {
            full: FULL_RANGE,
            compact: COMPACT_RANGE,
        }
    }
}

impl WindowRanges {
    pub fn range(&self, compact: bool) -> usize {
        if compact {
            self.compact
        } else {
            self.full
        }
    }
}

/// Page tokens plus the state of the prev/next controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub tokens: Vec<PageToken>,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageWindow {
    pub fn compute(current_page: usize, total_pages: usize, range: usize) -> Self {
        Self {
            tokens: compute_page_tokens_with_range(current_page, total_pages, range),
            has_prev: current_page > 1,
            has_next: current_page < total_pages,
        }
    }
}

/// Page window for the given layout using the default ranges
pub fn page_window(current_page: usize, total_pages: usize, compact: bool) -> PageWindow {
    PageWindow::compute(current_page, total_pages, WindowRanges::default().range(compact))
}

/// Page tokens to render for the given layout using the default ranges
///
/// A single hidden page is shown as its number rather than an ellipsis, so
/// `4/10` on a wide layout gives `1 2 3 4 5 … 10`, not `1 … 3 4 5 … 10`.
/// An ellipsis always stands for at least two pages.
pub fn compute_page_tokens(current_page: usize, total_pages: usize, compact: bool) -> Vec<PageToken> {
    compute_page_tokens_with_range(current_page, total_pages, WindowRanges::default().range(compact))
}

/// Page tokens around `current_page` with `range` pages on each side
///
/// The first and last pages are always present. A run of hidden pages
/// collapses into an ellipsis only when it is at least two pages long,
/// otherwise the single page is shown. Nothing is returned for a single
/// page. `current_page` is expected in `1..=total_pages`; other values give
/// a well-formed but unspecified sequence.
pub fn compute_page_tokens_with_range(
    current_page: usize,
    total_pages: usize,
    range: usize,
) -> Vec<PageToken> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut tokens = vec![PageToken::Page(1)];

    let show_ellipsis_start = current_page > range.saturating_add(2);
    let show_ellipsis_end = current_page.saturating_add(range).saturating_add(1) < total_pages;

    let start = current_page.saturating_sub(range).max(2);
    let end = current_page.saturating_add(range).min(total_pages - 1);

    if show_ellipsis_start {
        push_gap(&mut tokens, start.min(total_pages));
    }

    for page in start..=end {
        push_page(&mut tokens, page);
    }

    if show_ellipsis_end {
        push_gap(&mut tokens, total_pages);
    }

    push_page(&mut tokens, total_pages);

    tokens
}

fn push_page(tokens: &mut Vec<PageToken>, page: usize) {
    if !tokens.contains(&PageToken::Page(page)) {
        tokens.push(PageToken::Page(page));
    }
}

/// Mark the pages hidden between the last shown page and `next`
fn push_gap(tokens: &mut Vec<PageToken>, next: usize) {
    let last = tokens.iter().filter_map(PageToken::page).last().unwrap_or(0);

    match next.saturating_sub(last) {
        0 | 1 => {}
        2 => tokens.push(PageToken::Page(last + 1)),
        _ => tokens.push(PageToken::Ellipsis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::token::PageToken::{Ellipsis as E, Page as P};

    #[test]
    fn test_single_page_is_suppressed() {
        assert!(compute_page_tokens(1, 1, false).is_empty());
        assert!(compute_page_tokens(1, 1, true).is_empty());
        assert!(compute_page_tokens(3, 1, false).is_empty());
        assert!(compute_page_tokens(1, 0, false).is_empty());
    }

    #[test]
    fn test_window_covers_everything() {
        assert_eq!(compute_page_tokens(3, 5, false), vec![P(1), P(2), P(3), P(4), P(5)]);
        assert_eq!(compute_page_tokens(1, 2, false), vec![P(1), P(2)]);
        assert_eq!(compute_page_tokens(2, 2, true), vec![P(1), P(2)]);
    }

    #[test]
    fn test_compact_narrows_window() {
        assert_eq!(compute_page_tokens(5, 10, true), vec![P(1), E, P(5), E, P(10)]);
        assert_eq!(
            compute_page_tokens(5, 10, false),
            vec![P(1), E, P(4), P(5), P(6), E, P(10)]
        );
    }

    #[test]
    fn test_first_and_last_page() {
        assert_eq!(compute_page_tokens(1, 10, false), vec![P(1), P(2), E, P(10)]);
        assert_eq!(compute_page_tokens(10, 10, false), vec![P(1), E, P(9), P(10)]);
        assert_eq!(compute_page_tokens(1, 10, true), vec![P(1), E, P(10)]);
        assert_eq!(compute_page_tokens(10, 10, true), vec![P(1), E, P(10)]);
    }

    #[test]
    fn test_single_hidden_page_is_shown() {
        // Page 2 alone would be hidden behind an ellipsis
        assert_eq!(compute_page_tokens(4, 10, false), vec![P(1), P(2), P(3), P(4), P(5), E, P(10)]);
        assert_eq!(compute_page_tokens(3, 10, true), vec![P(1), P(2), P(3), E, P(10)]);
        // Page 9 alone at the end
        assert_eq!(compute_page_tokens(7, 10, false), vec![P(1), E, P(6), P(7), P(8), P(9), P(10)]);
        assert_eq!(compute_page_tokens(8, 10, true), vec![P(1), E, P(8), P(9), P(10)]);
    }

    #[test]
    fn test_wider_range() {
        assert_eq!(
            compute_page_tokens_with_range(10, 20, 2),
            vec![P(1), E, P(8), P(9), P(10), P(11), P(12), E, P(20)]
        );
    }

    #[test]
    fn test_out_of_range_current_page_does_not_panic() {
        assert_eq!(compute_page_tokens(0, 5, false), vec![P(1), E, P(5)]);
        assert_eq!(compute_page_tokens(0, 3, true), vec![P(1), P(2), P(3)]);
        assert_eq!(compute_page_tokens(50, 5, false), vec![P(1), E, P(5)]);
        assert_eq!(compute_page_tokens(usize::MAX, 4, true), vec![P(1), E, P(4)]);
        assert_eq!(compute_page_tokens_with_range(3, 6, usize::MAX), vec![P(1), P(2), P(3), P(4), P(5), P(6)]);
    }

    #[test]
    fn test_prev_next_enablement() {
        let window = page_window(1, 3, false);
        assert!(!window.has_prev);
        assert!(window.has_next);

        let window = page_window(3, 3, true);
        assert!(window.has_prev);
        assert!(!window.has_next);
    }

    #[test]
    fn test_invariants_hold_for_all_small_inputs() {
        for total in 1..=40 {
            for current in 1..=total {
                for range in [0, 1, 2] {
                    let tokens = compute_page_tokens_with_range(current, total, range);

                    if total == 1 {
                        assert!(tokens.is_empty());
                        continue;
                    }

                    assert_eq!(tokens.first(), Some(&P(1)), "{current}/{total} r{range}");
                    assert_eq!(tokens.last(), Some(&P(total)), "{current}/{total} r{range}");
                    assert!(tokens.contains(&P(current)), "{current}/{total} r{range}");

                    let pages: Vec<usize> = tokens.iter().filter_map(PageToken::page).collect();
                    assert!(pages.windows(2).all(|w| w[0] < w[1]), "{current}/{total} r{range}");

                    for (i, token) in tokens.iter().enumerate() {
                        if token.is_ellipsis() {
                            let before = tokens[i - 1].page().unwrap();
                            let after = tokens[i + 1].page().unwrap();
                            assert!(after - before > 2, "lonely ellipsis {current}/{total} r{range}");
                        } else if i > 0 {
                            if let (Some(a), Some(b)) = (tokens[i - 1].page(), token.page()) {
                                assert_eq!(b, a + 1, "unmarked gap {current}/{total} r{range}");
                            }
                        }
                    }
                }
            }
        }
    }
}
