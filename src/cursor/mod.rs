//! Custom cursor follower.
//!
//! A marker element trails the real pointer, switches to a hover look over
//! clickable elements, and fades out while the pointer is outside the page:
//!
//! - `events`: coordinates and pointer notifications
//! - `state`: the follower state record and its latch/flags
//! - `smoothing`: per-frame interpolation toward the pointer
//! - `interactive`: clickable-element predicate over a host element tree
//! - `frame`: style values written to the marker each tick
//! - `follower`: the component, plus `mount` to wire it to a host

pub mod events;
pub mod follower;
pub mod frame;
pub mod interactive;
pub mod smoothing;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;


// Re-export commonly used types
pub use events::{PointerEvent, XY};
pub use follower::{mount, MountedCursor, PointerFollower};
pub use frame::MarkerFrame;
pub use interactive::{ElementNode, InteractiveMatcher};
pub use smoothing::{frames_to_settle, smooth_toward};
pub use state::FollowerState;
