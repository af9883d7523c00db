//! Table of contents: heading extraction, scroll-synchronized highlighting
//! and click navigation.

mod document;
mod highlighter;
mod navigation;
mod parser;
mod render;
mod subscription;
mod types;

pub use document::{prepare_document, DocumentFormat, PreparedDocument};
pub use highlighter::{
    active_heading, compute_active_id, HighlightOptions, MeasurementProvider, StaticLayout,
    TocHighlighter, DEFAULT_BOTTOM_THRESHOLD, DEFAULT_HEADER_OFFSET, DEFAULT_READING_LINE_SLACK,
    DEFAULT_SCROLL_OFFSET,
};
pub use navigation::{RecordingScroller, ScrollBehavior, ScrollRequest, Scroller};
pub use parser::{assign_heading_ids, extract_headings};
pub use render::{min_level, render_toc_html, render_toc_text, toc_entries, TocEntry, DEFAULT_INDENT_STEP};
pub use subscription::{
    ListenerId, MountedToc, ScrollEventBus, ScrollListener, ScrollSource, ScrollSubscription,
};
pub use types::{HeadingDescriptor, IdStrategy, TocState, ViewportMetrics};
