use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::toc::navigation::{ScrollBehavior, ScrollRequest, Scroller};
use crate::toc::types::{HeadingDescriptor, TocState, ViewportMetrics};
use crate::utils::error::{PagemarkError, Result};

/// Height of the fixed site header
pub const DEFAULT_HEADER_OFFSET: f64 = 100.0;
/// Distance below the header that still counts as the reading line
pub const DEFAULT_READING_LINE_SLACK: f64 = 50.0;
/// Distance from the document end that selects the last heading
pub const DEFAULT_BOTTOM_THRESHOLD: f64 = 50.0;
/// Gap kept above a heading scrolled to from the TOC
pub const DEFAULT_SCROLL_OFFSET: f64 = 80.0;

/// Thresholds for active heading detection and click navigation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightOptions {
    pub header_offset: f64,
    pub reading_line_slack: f64,
    pub bottom_threshold: f64,
    pub scroll_offset: f64,
    /// Animation used when navigating from the table of contents
    #[serde(default)]
    pub scroll_behavior: ScrollBehavior,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            header_offset: DEFAULT_HEADER_OFFSET,
            reading_line_slack: DEFAULT_READING_LINE_SLACK,
            bottom_threshold: DEFAULT_BOTTOM_THRESHOLD,
            scroll_offset: DEFAULT_SCROLL_OFFSET,
            scroll_behavior: ScrollBehavior::default(),
        }
    }
}

impl HighlightOptions {
    pub fn with_header_offset(mut self, header_offset: f64) -> Self {
        self.header_offset = header_offset;
        self
    }

    /// Viewport-relative y at or above which a heading counts as read
    pub fn reading_line(&self) -> f64 {
        self.header_offset + self.reading_line_slack
    }
}

/// Source of layout measurements for the highlighter
///
/// Offsets are document-relative: the distance from the top of the document
/// to the top of the heading element. `None` means the element is not
/// currently rendered.
pub trait MeasurementProvider {
    fn offset_of(&self, id: &str) -> Option<f64>;
    fn viewport(&self) -> ViewportMetrics;
}

impl<T: MeasurementProvider + ?Sized> MeasurementProvider for &T {
    fn offset_of(&self, id: &str) -> Option<f64> {
        (**self).offset_of(id)
    }

    fn viewport(&self) -> ViewportMetrics {
        (**self).viewport()
    }
}

impl<T: MeasurementProvider + ?Sized> MeasurementProvider for Rc<T> {
    fn offset_of(&self, id: &str) -> Option<f64> {
        (**self).offset_of(id)
    }

    fn viewport(&self) -> ViewportMetrics {
        (**self).viewport()
    }
}

impl<T: MeasurementProvider> MeasurementProvider for RefCell<T> {
    fn offset_of(&self, id: &str) -> Option<f64> {
        self.borrow().offset_of(id)
    }

    fn viewport(&self) -> ViewportMetrics {
        self.borrow().viewport()
    }
}

/// A fixed snapshot of heading offsets and viewport metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticLayout {
    #[serde(default)]
    pub positions: HashMap<String, f64>,
    #[serde(default)]
    pub viewport: ViewportMetrics,
}

impl StaticLayout {
    pub fn new(viewport: ViewportMetrics) -> Self {
        Self {
            positions: HashMap::new(),
            viewport,
        }
    }

    pub fn with_position(mut self, id: impl Into<String>, offset: f64) -> Self {
        self.positions.insert(id.into(), offset);
        self
    }

    pub fn scroll_to(&mut self, scroll_y: f64) {
        self.viewport.scroll_y = scroll_y;
    }
}

impl MeasurementProvider for StaticLayout {
    fn offset_of(&self, id: &str) -> Option<f64> {
        self.positions.get(id).copied()
    }

    fn viewport(&self) -> ViewportMetrics {
        self.viewport
    }
}

/// Find the heading the reader is currently in
///
/// Walks the resolvable headings in document order and keeps the last one
/// whose top has crossed the reading line. Near the bottom of the document
/// the last heading wins regardless. Returns `None` when no heading position
/// can be resolved.
pub fn compute_active_id<'h, F>(
    headings: &'h [HeadingDescriptor],
    offset_of: F,
    viewport: ViewportMetrics,
    options: &HighlightOptions,
) -> Option<&'h str>
where
    F: Fn(&str) -> Option<f64>,
{
    let resolved: Vec<(&HeadingDescriptor, f64)> = headings
        .iter()
        .filter_map(|heading| match offset_of(&heading.id) {
            Some(offset) => Some((heading, offset - viewport.scroll_y)),
            None => {
                trace!("Heading '{}' is not rendered, skipping", heading.id);
                None
            }
        })
        .collect();

    let (first, _) = resolved.first()?;
    let mut candidate = first.id.as_str();
    let reading_line = options.reading_line();

    for (heading, top) in &resolved {
        if *top <= reading_line {
            candidate = heading.id.as_str();
        } else {
            break;
        }
    }

    if viewport.is_near_bottom(options.bottom_threshold) {
        if let Some((last, _)) = resolved.last() {
            candidate = last.id.as_str();
        }
    }

    Some(candidate)
}

/// [`compute_active_id`] with all measurements taken from a provider
pub fn active_heading<'h, P: MeasurementProvider + ?Sized>(
    headings: &'h [HeadingDescriptor],
    provider: &P,
    options: &HighlightOptions,
) -> Option<&'h str> {
    compute_active_id(headings, |id| provider.offset_of(id), provider.viewport(), options)
}

/// Scroll-synchronized table of contents state for one document
pub struct TocHighlighter<P> {
    headings: Vec<HeadingDescriptor>,
    provider: P,
    options: HighlightOptions,
    state: TocState,
}

impl<P: MeasurementProvider> TocHighlighter<P> {
    pub fn new(headings: Vec<HeadingDescriptor>, provider: P, options: HighlightOptions) -> Self {
        let mut seen = HashSet::new();
        for heading in &headings {
            if !seen.insert(heading.id.as_str()) {
                warn!("Duplicate heading id '{}' in table of contents", heading.id);
            }
        }

        Self {
            headings,
            provider,
            options,
            state: TocState::default(),
        }
    }

    pub fn headings(&self) -> &[HeadingDescriptor] {
        &self.headings
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    pub fn options(&self) -> &HighlightOptions {
        &self.options
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn state(&self) -> &TocState {
        &self.state
    }

    pub fn active_id(&self) -> Option<&str> {
        self.state.active_id.as_deref()
    }

    /// Recompute the active heading from current measurements
    ///
    /// When no heading can be measured the previous active id is kept.
    pub fn refresh(&mut self) -> Option<&str> {
        let next = active_heading(&self.headings, &self.provider, &self.options)
            .map(str::to_string);

        if let Some(next) = next {
            if self.state.active_id.as_deref() != Some(next.as_str()) {
                debug!("Active heading changed to '{}'", next);
                self.state.active_id = Some(next);
            }
        }

        self.active_id()
    }

    /// Navigate to a heading from the table of contents
    ///
    /// The active id is updated before the scroll is issued. A heading that
    /// is listed but not rendered is still activated, only the scroll is
    /// skipped. `on_done` always runs for listed headings.
    pub fn scroll_to_heading(
        &mut self,
        id: &str,
        scroller: &mut dyn Scroller,
        on_done: Option<&mut dyn FnMut()>,
    ) -> Result<()> {
        if !self.headings.iter().any(|heading| heading.id == id) {
            return Err(PagemarkError::UnknownHeading(id.to_string()));
        }

        self.state.active_id = Some(id.to_string());

        match self.provider.offset_of(id) {
            Some(offset) => {
                let request = ScrollRequest::new(
                    offset - self.options.scroll_offset,
                    self.options.scroll_behavior,
                );
                debug!("Scrolling to heading '{}' at {}px", id, request.top);
                scroller.scroll_to(request);
            }
            None => warn!("Heading '{}' is not rendered, not scrolling", id),
        }

        if let Some(on_done) = on_done {
            on_done();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::navigation::RecordingScroller;

    fn abc() -> Vec<HeadingDescriptor> {
        vec![
            HeadingDescriptor::new("a", "Alpha", 2),
            HeadingDescriptor::new("b", "Beta", 2),
            HeadingDescriptor::new("c", "Gamma", 3),
        ]
    }

    fn layout(scroll_y: f64) -> StaticLayout {
        StaticLayout::new(ViewportMetrics::new(800.0, scroll_y, 3000.0))
            .with_position("a", 0.0)
            .with_position("b", 200.0)
            .with_position("c", 500.0)
    }

    #[test]
    fn test_last_heading_above_reading_line() {
        let headings = abc();
        let options = HighlightOptions::default();
        let active = active_heading(&headings, &layout(250.0), &options);
        assert_eq!(active, Some("b"));
    }

    #[test]
    fn test_first_heading_before_any_scroll() {
        let headings = abc();
        let positions: HashMap<&str, f64> = [("a", 400.0), ("b", 900.0), ("c", 1500.0)].into();
        let active = compute_active_id(
            &headings,
            |id| positions.get(id).copied(),
            ViewportMetrics::new(800.0, 0.0, 3000.0),
            &HighlightOptions::default(),
        );
        assert_eq!(active, Some("a"));
    }

    #[test]
    fn test_reading_line_is_inclusive() {
        let headings = abc();
        // b sits exactly on the reading line at 150px
        let active = active_heading(&headings, &layout(50.0), &HighlightOptions::default());
        assert_eq!(active, Some("b"));
    }

    #[test]
    fn test_custom_header_offset() {
        let headings = abc();
        let options = HighlightOptions::default().with_header_offset(0.0);
        // Reading line at 50px
        let active = active_heading(&headings, &layout(150.0), &options);
        assert_eq!(active, Some("b"));

        let active = active_heading(&headings, &layout(149.0), &options);
        assert_eq!(active, Some("a"));
    }

    #[test]
    fn test_walk_stops_at_first_heading_below_line() {
        // Out-of-order offsets: c is above the line but b stops the walk
        let headings = abc();
        let provider = StaticLayout::new(ViewportMetrics::new(800.0, 0.0, 3000.0))
            .with_position("a", 0.0)
            .with_position("b", 900.0)
            .with_position("c", 10.0);
        let active = active_heading(&headings, &provider, &HighlightOptions::default());
        assert_eq!(active, Some("a"));
    }

    #[test]
    fn test_bottom_of_page_selects_last_heading() {
        let headings = abc();
        let provider = StaticLayout::new(ViewportMetrics::new(800.0, 2150.0, 3000.0))
            .with_position("a", 0.0)
            .with_position("b", 200.0)
            .with_position("c", 2900.0);
        let active = active_heading(&headings, &provider, &HighlightOptions::default());
        assert_eq!(active, Some("c"));
    }

    #[test]
    fn test_bottom_override_uses_last_rendered_heading() {
        let headings = abc();
        let provider = StaticLayout::new(ViewportMetrics::new(800.0, 2200.0, 3000.0))
            .with_position("a", 0.0)
            .with_position("b", 2800.0);
        let active = active_heading(&headings, &provider, &HighlightOptions::default());
        assert_eq!(active, Some("b"));
    }

    #[test]
    fn test_unresolvable_headings_are_skipped() {
        let headings = abc();
        let provider = StaticLayout::new(ViewportMetrics::new(800.0, 600.0, 3000.0))
            .with_position("c", 500.0);
        let active = active_heading(&headings, &provider, &HighlightOptions::default());
        assert_eq!(active, Some("c"));
    }

    #[test]
    fn test_nothing_resolvable() {
        let headings = abc();
        let provider = StaticLayout::new(ViewportMetrics::new(800.0, 0.0, 3000.0));
        assert_eq!(active_heading(&headings, &provider, &HighlightOptions::default()), None);
    }

    #[test]
    fn test_empty_headings() {
        let provider = layout(0.0);
        assert_eq!(active_heading(&[], &provider, &HighlightOptions::default()), None);
    }

    #[test]
    fn test_refresh_keeps_previous_when_nothing_resolves() {
        let provider = Rc::new(RefCell::new(layout(250.0)));
        let mut highlighter = TocHighlighter::new(abc(), Rc::clone(&provider), HighlightOptions::default());
        assert_eq!(highlighter.refresh(), Some("b"));

        provider.borrow_mut().positions.clear();
        assert_eq!(highlighter.refresh(), Some("b"));
    }

    #[test]
    fn test_click_sets_active_before_scrolling_completes() {
        let mut highlighter = TocHighlighter::new(abc(), layout(0.0), HighlightOptions::default());
        highlighter.refresh();
        assert_eq!(highlighter.active_id(), Some("a"));

        let mut scroller = RecordingScroller::default();
        let mut closed = false;
        let mut close_menu = || closed = true;
        highlighter
            .scroll_to_heading("c", &mut scroller, Some(&mut close_menu))
            .unwrap();

        assert_eq!(highlighter.active_id(), Some("c"));
        assert!(closed);
        assert_eq!(scroller.requests.len(), 1);
        assert_eq!(scroller.requests[0].top, 420.0);
        assert_eq!(scroller.requests[0].behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn test_click_with_reduced_motion() {
        let options = HighlightOptions {
            scroll_behavior: ScrollBehavior::Instant,
            ..HighlightOptions::default()
        };
        let mut highlighter = TocHighlighter::new(abc(), layout(0.0), options);
        let mut scroller = RecordingScroller::default();
        highlighter.scroll_to_heading("b", &mut scroller, None).unwrap();

        assert_eq!(scroller.requests[0], ScrollRequest::new(120.0, ScrollBehavior::Instant));
    }

    #[test]
    fn test_click_target_accounts_for_current_scroll() {
        // Document offsets already include the scroll position
        let mut highlighter = TocHighlighter::new(abc(), layout(1000.0), HighlightOptions::default());
        let mut scroller = RecordingScroller::default();
        highlighter.scroll_to_heading("b", &mut scroller, None).unwrap();
        assert_eq!(scroller.requests[0].top, 120.0);
    }

    #[test]
    fn test_click_on_unrendered_heading() {
        let provider = StaticLayout::new(ViewportMetrics::new(800.0, 0.0, 3000.0)).with_position("a", 0.0);
        let mut highlighter = TocHighlighter::new(abc(), provider, HighlightOptions::default());
        let mut scroller = RecordingScroller::default();
        highlighter.scroll_to_heading("b", &mut scroller, None).unwrap();

        assert_eq!(highlighter.active_id(), Some("b"));
        assert!(scroller.requests.is_empty());
    }

    #[test]
    fn test_click_on_unknown_heading() {
        let mut highlighter = TocHighlighter::new(abc(), layout(0.0), HighlightOptions::default());
        let mut scroller = RecordingScroller::default();
        let err = highlighter.scroll_to_heading("zzz", &mut scroller, None).unwrap_err();
        assert!(matches!(err, PagemarkError::UnknownHeading(_)));
        assert_eq!(highlighter.active_id(), None);
    }
}
