//! Follower state record.
//!
//! `revealed` is a one-way latch set by the first pointer move. `visible`
//! and `hovering` are independent flags driven by their event pairs.
//! `current` moves only when the frame tick calls [`FollowerState::advance`].

use super::events::XY;
use super::smoothing::smooth_toward;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FollowerState {
    target: XY<f64>,
    current: XY<f64>,
    revealed: bool,
    hovering: bool,
    visible: bool,
}

impl FollowerState {
    /// Fresh state: both positions at the origin, every flag false.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last observed pointer position.
    pub fn target(&self) -> XY<f64> {
        self.target
    }

    /// Smoothed position the marker is drawn at.
    pub fn current(&self) -> XY<f64> {
        self.current
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Whether the marker should currently be drawn opaque.
    pub fn shown(&self) -> bool {
        self.revealed && self.visible
    }

    pub(crate) fn set_target(&mut self, target: XY<f64>) {
        self.target = target;
    }

    /// Latch `revealed`. Returns true only on the transition.
    pub(crate) fn reveal(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }

    pub(crate) fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Move `current` one frame toward `target`.
    pub(crate) fn advance(&mut self, factor: f64) {
        self.current = smooth_toward(self.current, self.target, factor);
    }
}
