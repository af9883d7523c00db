use crate::pagination::{COMPACT_RANGE, FULL_RANGE};
use crate::resize::{DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_PANEL_SIZE};
use crate::toc::{
    DEFAULT_BOTTOM_THRESHOLD, DEFAULT_HEADER_OFFSET, DEFAULT_INDENT_STEP,
    DEFAULT_READING_LINE_SLACK, DEFAULT_SCROLL_OFFSET,
};

/// Height of the fixed site header, in pixels
pub fn default_header_offset() -> f64 {
    DEFAULT_HEADER_OFFSET
}

/// Extra distance below the header that still counts as "being read"
pub fn default_reading_line_slack() -> f64 {
    DEFAULT_READING_LINE_SLACK
}

/// Distance from the document bottom that forces the last heading active
pub fn default_bottom_threshold() -> f64 {
    DEFAULT_BOTTOM_THRESHOLD
}

/// Gap left above a heading after clicking it in the TOC
pub fn default_scroll_offset() -> f64 {
    DEFAULT_SCROLL_OFFSET
}

/// Indentation per heading level, in pixels
pub fn default_indent_step() -> f64 {
    DEFAULT_INDENT_STEP
}

pub fn default_full_range() -> usize {
    FULL_RANGE
}

pub fn default_compact_range() -> usize {
    COMPACT_RANGE
}

/// Pagination links are relative to the current page by default
pub fn default_base_path() -> String {
    String::new()
}

pub fn default_panel_size() -> f64 {
    DEFAULT_PANEL_SIZE
}

pub fn default_panel_min_size() -> f64 {
    DEFAULT_MIN_SIZE
}

pub fn default_panel_max_size() -> f64 {
    DEFAULT_MAX_SIZE
}
