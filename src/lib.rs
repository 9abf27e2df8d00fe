//! Folio: runtime pieces of the portfolio site.
//!
//! The host-independent core lives here; `wasm/folio-web` binds it to the
//! browser DOM.

pub mod config;
pub mod cursor;
pub mod error;
pub mod host;
pub mod site;

pub use config::CursorConfig;
pub use cursor::{mount, FollowerState, MarkerFrame, MountedCursor, PointerFollower, XY};
pub use error::{FolioError, FolioResult};
