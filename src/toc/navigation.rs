use serde::{Deserialize, Serialize};

/// How the viewport should move to a new position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    /// Jump without animation, for readers who prefer reduced motion
    Instant,
}

/// A request to move the viewport so `top` is at its upper edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn new(top: f64, behavior: ScrollBehavior) -> Self {
        Self { top, behavior }
    }

    pub fn smooth(top: f64) -> Self {
        Self::new(top, ScrollBehavior::Smooth)
    }
}

/// Moves the host viewport
pub trait Scroller {
    fn scroll_to(&mut self, request: ScrollRequest);
}

impl<F: FnMut(ScrollRequest)> Scroller for F {
    fn scroll_to(&mut self, request: ScrollRequest) {
        self(request)
    }
}

/// Scroller that only remembers what it was asked to do
#[derive(Debug, Default)]
pub struct RecordingScroller {
    pub requests: Vec<ScrollRequest>,
}

impl Scroller for RecordingScroller {
    fn scroll_to(&mut self, request: ScrollRequest) {
        self.requests.push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_scroller() {
        let mut seen = Vec::new();
        {
            let mut scroller = |request: ScrollRequest| seen.push(request.top);
            scroller.scroll_to(ScrollRequest::smooth(42.0));
        }
        assert_eq!(seen, vec![42.0]);
    }

    #[test]
    fn test_behavior_names() {
        let behavior: ScrollBehavior = serde_json::from_str("\"instant\"").unwrap();
        assert_eq!(behavior, ScrollBehavior::Instant);
        assert_eq!(ScrollBehavior::default(), ScrollBehavior::Smooth);
    }
}
