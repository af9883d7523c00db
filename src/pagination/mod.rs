//! Pagination windowing: which page numbers and ellipses to show, and how
//! a selection is delivered.

mod navigator;
mod token;
mod windower;

pub use navigator::{page_href, PageAction, PageChangeMode, PageItem, PageItemKind, Pagination};
pub use token::PageToken;
pub use windower::{
    compute_page_tokens, compute_page_tokens_with_range, page_window, PageWindow, WindowRanges,
    COMPACT_RANGE, FULL_RANGE,
};
