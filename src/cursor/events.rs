//! Pointer event types delivered by the host.
//!
//! - `XY`: 2D coordinate helper shared by the state and the rendered frame
//! - `PointerEvent`: one notification from the host's pointer stream

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// 2D coordinate helper type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XY<T> {
    pub x: T,
    pub y: T,
}

impl<T> XY<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> XY<T> {
    pub fn map<U, F: Fn(T) -> U>(&self, f: F) -> XY<U> {
        XY {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

impl XY<f64> {
    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: XY<f64>) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl<T: Add<Output = T>> Add for XY<T> {
    type Output = XY<T>;

    fn add(self, rhs: Self) -> Self::Output {
        XY::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for XY<T> {
    type Output = XY<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        XY::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for XY<T> {
    type Output = XY<T>;

    fn mul(self, rhs: T) -> Self::Output {
        XY::new(self.x * rhs, self.y * rhs)
    }
}

/// A single notification from the host's pointer-event stream.
///
/// Over/out events carry the element the pointer crossed; the element
/// type is whatever the host uses for its node handles.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent<E> {
    /// Pointer moved to absolute viewport coordinates.
    Move(XY<f64>),
    /// Pointer entered an element.
    Over(E),
    /// Pointer left an element.
    Out(E),
    /// Pointer came back into the viewport.
    ViewportEnter,
    /// Pointer left the viewport.
    ViewportLeave,
}
