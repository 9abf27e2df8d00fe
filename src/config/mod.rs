//! Site runtime configuration.
//!
//! - `CursorConfig`: follower tuning (smoothing, marker size, selectors)
//!
//! The global copy sits behind `parking_lot::RwLock` and only seeds new
//! mounts; a mounted follower owns its own snapshot.

pub mod cursor;

pub use cursor::{CursorConfig, CURSOR_CONFIG, DEFAULT_MARKER_SIZE, DEFAULT_SMOOTHING_FACTOR};
