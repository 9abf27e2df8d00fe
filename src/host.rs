//! Seams between the follower and its host environment.
//!
//! The browser binding implements these over the DOM; tests implement
//! them in memory. Everything runs on one thread, so handlers are plain
//! boxed closures with no `Send` bound.

use crate::cursor::{ElementNode, MarkerFrame, XY};
use crate::error::FolioResult;

pub type PointerMoveHandler = Box<dyn FnMut(XY<f64>)>;
pub type ElementHandler<E> = Box<dyn FnMut(&E)>;
pub type ViewportHandler = Box<dyn FnMut()>;
pub type FrameCallback = Box<dyn FnOnce()>;

/// Subscription interface for the host's pointer-event stream.
///
/// Handlers stay registered for the rest of the page session.
pub trait PointerEventSource {
    /// Element handle carried by over/out events.
    type Element: ElementNode;

    fn register_pointer_move_handler(&self, handler: PointerMoveHandler) -> FolioResult<()>;

    fn register_pointer_over_handler(
        &self,
        handler: ElementHandler<Self::Element>,
    ) -> FolioResult<()>;

    fn register_pointer_out_handler(
        &self,
        handler: ElementHandler<Self::Element>,
    ) -> FolioResult<()>;

    fn register_viewport_enter_handler(&self, handler: ViewportHandler) -> FolioResult<()>;

    fn register_viewport_leave_handler(&self, handler: ViewportHandler) -> FolioResult<()>;
}

/// Per-frame scheduling primitive ("run before next repaint").
pub trait FrameScheduler {
    /// Run `callback` once, before the next repaint.
    fn request_frame(&self, callback: FrameCallback) -> FolioResult<()>;
}

/// The rendered marker element.
pub trait MarkerSurface {
    /// Write position, opacity and hover class for one frame.
    fn apply(&self, frame: &MarkerFrame, hover_class: &str);
}

/// Finds the marker element in the current document.
pub trait MarkerLocator {
    type Marker: MarkerSurface;

    /// `None` when no element matches `selector`.
    fn find_marker(&self, selector: &str) -> Option<Self::Marker>;
}

/// Everything a follower needs from its host.
pub trait CursorHost: PointerEventSource + FrameScheduler + MarkerLocator {}

impl<T: PointerEventSource + FrameScheduler + MarkerLocator> CursorHost for T {}
