//! Exponential trailing toward the pointer.
//!
//! Each frame covers `factor` of the remaining distance, per axis. With
//! `factor = 1` the marker snaps to the target; smaller values lag more.
//! The gap after `n` frames is `(1 - factor)^n` times the starting gap.

use super::events::XY;

/// Advance `current` toward `target` by one frame.
pub fn smooth_toward(current: XY<f64>, target: XY<f64>, factor: f64) -> XY<f64> {
    if factor >= 1.0 {
        // Exact snap, no floating point residue.
        return target;
    }
    current + (target - current) * factor
}

/// Number of frames until the remaining gap drops below `epsilon`.
///
/// Returns `None` if the gap never closes (factor outside `(0, 1]`).
pub fn frames_to_settle(gap: f64, factor: f64, epsilon: f64) -> Option<u32> {
    if !(factor > 0.0 && factor <= 1.0) {
        return None;
    }
    if gap <= epsilon {
        return Some(0);
    }
    if factor >= 1.0 {
        return Some(1);
    }
    let frames = (epsilon / gap).ln() / (1.0 - factor).ln();
    Some(frames.ceil() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_with_unit_factor() {
        let next = smooth_toward(XY::new(3.3, 7.1), XY::new(640.0, 480.0), 1.0);
        assert_eq!(next, XY::new(640.0, 480.0));
    }

    #[test]
    fn test_half_factor_covers_half() {
        let next = smooth_toward(XY::new(0.0, 100.0), XY::new(100.0, 0.0), 0.5);
        assert_eq!(next, XY::new(50.0, 50.0));
    }

    #[test]
    fn test_axes_are_independent() {
        let next = smooth_toward(XY::new(0.0, 20.0), XY::new(40.0, 20.0), 0.25);
        assert_eq!(next.x, 10.0);
        assert_eq!(next.y, 20.0);
    }

    #[test]
    fn test_frames_to_settle() {
        assert_eq!(frames_to_settle(0.1, 0.5, 0.5), Some(0));
        assert_eq!(frames_to_settle(500.0, 1.0, 0.5), Some(1));
        // 100 * 0.5^n < 1  =>  n = 7
        assert_eq!(frames_to_settle(100.0, 0.5, 1.0), Some(7));
        assert_eq!(frames_to_settle(100.0, 0.0, 1.0), None);
    }
}
