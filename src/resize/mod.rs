//! Split-view panel resizing driven by a drag handle.

use log::trace;
use serde::{Deserialize, Serialize};

/// Initial panel size, in percent of the container
pub const DEFAULT_PANEL_SIZE: f64 = 50.0;
pub const DEFAULT_MIN_SIZE: f64 = 10.0;
pub const DEFAULT_MAX_SIZE: f64 = 90.0;

/// Allowed size range of one panel, in percent of the container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for PanelBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SIZE,
            max: DEFAULT_MAX_SIZE,
        }
    }
}

/// Flex-basis percentages of the two panels around a handle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelSizes {
    pub left: f64,
    pub right: f64,
}

impl PanelSizes {
    /// Sizes before any drag: the left panel at `default_size`, the right
    /// panel taking the rest
    pub fn initial(default_size: f64) -> Self {
        Self {
            left: default_size,
            right: 100.0 - default_size,
        }
    }

    /// Pixel widths of both panels in a container `container_width` wide
    pub fn widths(&self, container_width: f64) -> (f64, f64) {
        (
            self.left / 100.0 * container_width,
            self.right / 100.0 * container_width,
        )
    }

    /// CSS `flex-basis` values for both panels
    pub fn flex_basis(&self) -> (String, String) {
        (format!("{}%", self.left), format!("{}%", self.right))
    }
}

/// One drag of a resize handle, from press to release
#[derive(Debug, Clone)]
pub struct DragSession {
    start_x: f64,
    container_width: f64,
    left_start: f64,
    right_start: f64,
    left_bounds: PanelBounds,
    right_bounds: PanelBounds,
    current: PanelSizes,
}

impl DragSession {
    /// Start a drag at pointer position `start_x`
    ///
    /// Widths are in pixels as measured when the handle was pressed. Returns
    /// `None` when the container has no width to distribute.
    pub fn begin(
        start_x: f64,
        container_width: f64,
        left_width: f64,
        right_width: f64,
        left_bounds: PanelBounds,
        right_bounds: PanelBounds,
    ) -> Option<Self> {
        if !container_width.is_finite() || container_width <= 0.0 {
            return None;
        }

        let left_start = left_width / container_width * 100.0;
        let right_start = right_width / container_width * 100.0;

        Some(Self {
            start_x,
            container_width,
            left_start,
            right_start,
            left_bounds,
            right_bounds,
            current: PanelSizes {
                left: left_start,
                right: right_start,
            },
        })
    }

    /// Resize for a pointer now at `client_x`
    ///
    /// Bounds are applied left min, left max, right min, right max; each
    /// clamp keeps the combined size of the two panels.
    pub fn update(&mut self, client_x: f64) -> PanelSizes {
        let delta_percent = (client_x - self.start_x) / self.container_width * 100.0;
        let total = self.left_start + self.right_start;

        let mut left = self.left_start + delta_percent;
        let mut right = self.right_start - delta_percent;

        if left < self.left_bounds.min {
            left = self.left_bounds.min;
            right = total - self.left_bounds.min;
        }
        if left > self.left_bounds.max {
            left = self.left_bounds.max;
            right = total - self.left_bounds.max;
        }
        if right < self.right_bounds.min {
            right = self.right_bounds.min;
            left = total - self.right_bounds.min;
        }
        if right > self.right_bounds.max {
            right = self.right_bounds.max;
            left = total - self.right_bounds.max;
        }

        self.current = PanelSizes { left, right };
        trace!("Panels resized to {:.2}% / {:.2}%", left, right);
        self.current
    }

    pub fn sizes(&self) -> PanelSizes {
        self.current
    }

    /// Release the handle, keeping the last sizes
    pub fn end(self) -> PanelSizes {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_split() -> DragSession {
        DragSession::begin(500.0, 1000.0, 500.0, 500.0, PanelBounds::default(), PanelBounds::default()).unwrap()
    }

    #[test]
    fn test_initial_sizes() {
        let sizes = PanelSizes::initial(30.0);
        assert_eq!(sizes, PanelSizes { left: 30.0, right: 70.0 });
        assert_eq!(sizes.widths(1000.0), (300.0, 700.0));
        assert_eq!(PanelSizes::initial(DEFAULT_PANEL_SIZE).flex_basis(), ("50%".to_string(), "50%".to_string()));
    }

    #[test]
    fn test_drag_moves_both_panels() {
        let mut session = half_split();
        assert_eq!(session.sizes(), PanelSizes { left: 50.0, right: 50.0 });
        assert_eq!(session.update(600.0), PanelSizes { left: 60.0, right: 40.0 });
        assert_eq!(session.update(300.0), PanelSizes { left: 30.0, right: 70.0 });
    }

    #[test]
    fn test_left_bounds() {
        let mut session = half_split();
        assert_eq!(session.update(1000.0), PanelSizes { left: 90.0, right: 10.0 });
        assert_eq!(session.update(-100.0), PanelSizes { left: 10.0, right: 90.0 });
    }

    #[test]
    fn test_right_bounds_win_last() {
        let right = PanelBounds { min: 25.0, max: 60.0 };
        let mut session = DragSession::begin(0.0, 1000.0, 500.0, 500.0, PanelBounds::default(), right).unwrap();

        assert_eq!(session.update(400.0), PanelSizes { left: 75.0, right: 25.0 });
        assert_eq!(session.update(-300.0), PanelSizes { left: 40.0, right: 60.0 });
        assert_eq!(session.end(), PanelSizes { left: 40.0, right: 60.0 });
    }

    #[test]
    fn test_zero_width_container() {
        assert!(DragSession::begin(0.0, 0.0, 0.0, 0.0, PanelBounds::default(), PanelBounds::default()).is_none());
    }

    #[test]
    fn test_flex_basis() {
        let sizes = PanelSizes { left: 62.5, right: 37.5 };
        assert_eq!(sizes.flex_basis(), ("62.5%".to_string(), "37.5%".to_string()));
    }
}
