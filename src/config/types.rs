use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::pagination::WindowRanges;
use crate::resize::{PanelBounds, PanelSizes};
use crate::toc::{HighlightOptions, IdStrategy, ScrollBehavior};

/// Table of contents configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocConfig {
    /// Fixed header height the reading line sits below
    #[serde(default = "defaults::default_header_offset")]
    pub header_offset: f64,

    /// Slack added to the header offset to form the reading line
    #[serde(default = "defaults::default_reading_line_slack")]
    pub reading_line_slack: f64,

    /// Bottom-of-page distance that forces the last heading active
    #[serde(default = "defaults::default_bottom_threshold")]
    pub bottom_threshold: f64,

    /// Offset kept above a heading when navigating to it
    #[serde(default = "defaults::default_scroll_offset")]
    pub scroll_offset: f64,

    /// `smooth`, or `instant` for reduced motion
    #[serde(default)]
    pub scroll_behavior: ScrollBehavior,

    /// Indentation per relative heading level
    #[serde(default = "defaults::default_indent_step")]
    pub indent_step: f64,

    /// How ids are generated for headings
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            header_offset: defaults::default_header_offset(),
            reading_line_slack: defaults::default_reading_line_slack(),
            bottom_threshold: defaults::default_bottom_threshold(),
            scroll_offset: defaults::default_scroll_offset(),
            scroll_behavior: ScrollBehavior::default(),
            indent_step: defaults::default_indent_step(),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl TocConfig {
    /// Thresholds used by the highlighter
    pub fn highlight_options(&self) -> HighlightOptions {
        HighlightOptions {
            header_offset: self.header_offset,
            reading_line_slack: self.reading_line_slack,
            bottom_threshold: self.bottom_threshold,
            scroll_offset: self.scroll_offset,
            scroll_behavior: self.scroll_behavior,
        }
    }
}

/// Pagination configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Pages shown on each side of the current page on wide layouts
    #[serde(default = "defaults::default_full_range")]
    pub full_range: usize,

    /// Pages shown on each side of the current page on compact layouts
    #[serde(default = "defaults::default_compact_range")]
    pub compact_range: usize,

    /// Path prefix for link-based pagination (`{base_path}?page=N`)
    #[serde(default = "defaults::default_base_path")]
    pub base_path: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            full_range: defaults::default_full_range(),
            compact_range: defaults::default_compact_range(),
            base_path: defaults::default_base_path(),
        }
    }
}

impl PaginationConfig {
    pub fn ranges(&self) -> WindowRanges {
        WindowRanges {
            full: self.full_range,
            compact: self.compact_range,
        }
    }
}

/// Resizable panel configuration, in percent of the container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default = "defaults::default_panel_size")]
    pub default_size: f64,

    #[serde(default = "defaults::default_panel_min_size")]
    pub min_size: f64,

    #[serde(default = "defaults::default_panel_max_size")]
    pub max_size: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            default_size: defaults::default_panel_size(),
            min_size: defaults::default_panel_min_size(),
            max_size: defaults::default_panel_max_size(),
        }
    }
}

impl PanelConfig {
    /// Panel sizes before the handle is first dragged
    pub fn initial_sizes(&self) -> PanelSizes {
        PanelSizes::initial(self.default_size)
    }

    pub fn bounds(&self) -> PanelBounds {
        PanelBounds {
            min: self.min_size,
            max: self.max_size,
        }
    }
}

/// Top-level navigation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub toc: TocConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,

    #[serde(default)]
    pub panels: PanelConfig,
}
