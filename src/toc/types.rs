use serde::{Deserialize, Serialize};

/// A single heading of the current document, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingDescriptor {
    pub id: String,
    pub text: String,
    pub level: usize,
}

impl HeadingDescriptor {
    pub fn new(id: impl Into<String>, text: impl Into<String>, level: usize) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            level,
        }
    }
}

/// Highlighter state: the heading currently being read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TocState {
    pub active_id: Option<String>,
}

/// How heading ids are generated when a document is prepared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `heading-0`, `heading-1`, ... counted across all levels
    #[default]
    Indexed,
    /// Slugified heading text, suffixed `-1`, `-2` on collisions
    Slug,
}

/// Live viewport measurements, in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportMetrics {
    pub height: f64,
    pub scroll_y: f64,
    pub document_height: f64,
}

impl ViewportMetrics {
    pub fn new(height: f64, scroll_y: f64, document_height: f64) -> Self {
        Self {
            height,
            scroll_y,
            document_height,
        }
    }

    /// Whether the viewport bottom is within `threshold` of the document end
    pub fn is_near_bottom(&self, threshold: f64) -> bool {
        self.scroll_y + self.height >= self.document_height - threshold
    }
}
