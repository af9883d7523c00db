use std::fmt;

use log::debug;
use serde::Serialize;

use crate::pagination::token::PageToken;
use crate::pagination::windower::{compute_page_tokens_with_range, WindowRanges};

/// How a page selection is carried out
pub enum PageChangeMode<'a> {
    /// Invoke a page-change action in place
    Callback(Box<dyn FnMut(usize) + 'a>),
    /// Navigate to `{base_path}?page=N`
    Link { base_path: String },
}

impl<'a> PageChangeMode<'a> {
    pub fn callback(action: impl FnMut(usize) + 'a) -> Self {
        PageChangeMode::Callback(Box::new(action))
    }

    pub fn link(base_path: impl Into<String>) -> Self {
        PageChangeMode::Link {
            base_path: base_path.into(),
        }
    }
}

impl fmt::Debug for PageChangeMode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageChangeMode::Callback(_) => f.write_str("Callback"),
            PageChangeMode::Link { base_path } => {
                f.debug_struct("Link").field("base_path", base_path).finish()
            }
        }
    }
}

/// What happened after a page selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    /// The page-change callback was invoked with this page
    Changed(usize),
    /// The caller should follow this link
    Navigate(String),
}

/// Kind of a rendered pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageItemKind {
    Prev,
    Page,
    Ellipsis,
    Next,
}

/// One rendered control of the pagination bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageItem {
    pub kind: PageItemKind,
    /// Page this control leads to, if any
    pub page: Option<usize>,
    pub active: bool,
    pub disabled: bool,
    /// Link target in link mode
    pub href: Option<String>,
}

/// Link to a page of a listing
pub fn page_href(base_path: &str, page: usize) -> String {
    format!("{}?page={}", base_path, page)
}

/// Pagination control for one listing
///
/// Built only when there is more than one page. Callback and link modes
/// share the same token sequence; they differ in how a selection is
/// delivered.
pub struct Pagination<'a> {
    current_page: usize,
    total_pages: usize,
    ranges: WindowRanges,
    mode: PageChangeMode<'a>,
}

impl<'a> Pagination<'a> {
    pub fn new(current_page: usize, total_pages: usize, mode: PageChangeMode<'a>) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }

        Some(Self {
            current_page,
            total_pages,
            ranges: WindowRanges::default(),
            mode,
        })
    }

    pub fn with_ranges(mut self, ranges: WindowRanges) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn tokens(&self, compact: bool) -> Vec<PageToken> {
        compute_page_tokens_with_range(self.current_page, self.total_pages, self.ranges.range(compact))
    }

    /// Controls to render for the given layout, prev and next included
    pub fn items(&self, compact: bool) -> Vec<PageItem> {
        let mut items = Vec::new();

        let prev = self.current_page.saturating_sub(1);
        items.push(self.nav_item(PageItemKind::Prev, prev, !self.has_prev()));

        for token in self.tokens(compact) {
            match token {
                PageToken::Page(page) => items.push(PageItem {
                    kind: PageItemKind::Page,
                    page: Some(page),
                    active: page == self.current_page,
                    disabled: false,
                    href: self.href(page),
                }),
                PageToken::Ellipsis => items.push(PageItem {
                    kind: PageItemKind::Ellipsis,
                    page: None,
                    active: false,
                    disabled: true,
                    href: None,
                }),
            }
        }

        let next = self.current_page.saturating_add(1);
        items.push(self.nav_item(PageItemKind::Next, next, !self.has_next()));

        items
    }

    /// Select a page; the current page is a no-op
    pub fn select(&mut self, page: usize) -> Option<PageAction> {
        if page == self.current_page {
            return None;
        }

        debug!("Page {} selected (current {})", page, self.current_page);
        match &mut self.mode {
            PageChangeMode::Callback(action) => {
                action(page);
                Some(PageAction::Changed(page))
            }
            PageChangeMode::Link { base_path } => Some(PageAction::Navigate(page_href(base_path, page))),
        }
    }

    /// Go to the previous page; a no-op on the first page
    pub fn prev(&mut self) -> Option<PageAction> {
        if !self.has_prev() {
            return None;
        }
        self.select(self.current_page - 1)
    }

    /// Go to the next page; a no-op on the last page
    pub fn next(&mut self) -> Option<PageAction> {
        if !self.has_next() {
            return None;
        }
        self.select(self.current_page + 1)
    }

    fn href(&self, page: usize) -> Option<String> {
        match &self.mode {
            PageChangeMode::Link { base_path } => Some(page_href(base_path, page)),
            PageChangeMode::Callback(_) => None,
        }
    }

    fn nav_item(&self, kind: PageItemKind, page: usize, disabled: bool) -> PageItem {
        PageItem {
            kind,
            page: Some(page),
            active: false,
            disabled,
            href: if disabled { None } else { self.href(page) },
        }
    }
}
