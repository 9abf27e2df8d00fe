//! Rendered marker output for one frame.

use super::events::XY;
use super::state::FollowerState;
use crate::config::CursorConfig;

/// Style values written to the marker after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerFrame {
    /// Top-left offset of the marker: smoothed position minus half its size.
    pub translate: XY<f64>,
    /// 1.0 when revealed and inside the viewport, else 0.0.
    pub opacity: f64,
    /// Whether the hover class should be present.
    pub hovering: bool,
}

impl MarkerFrame {
    /// Build the frame for `state`, centering a marker sized per `config`.
    pub fn from_state(state: &FollowerState, config: &CursorConfig) -> Self {
        let half = config.half_marker_size();
        let current = state.current();
        Self {
            translate: XY::new(current.x - half, current.y - half),
            opacity: if state.shown() { 1.0 } else { 0.0 },
            hovering: state.hovering(),
        }
    }

    /// CSS `transform` value.
    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px)", self.translate.x, self.translate.y)
    }

    /// CSS `opacity` value.
    pub fn css_opacity(&self) -> &'static str {
        if self.opacity > 0.0 {
            "1"
        } else {
            "0"
        }
    }
}
