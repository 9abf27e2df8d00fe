//! In-memory host for follower tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::events::XY;
use super::frame::MarkerFrame;
use super::interactive::ElementNode;
use crate::error::{FolioError, FolioResult};
use crate::host::{
    ElementHandler, FrameCallback, FrameScheduler, MarkerLocator, MarkerSurface,
    PointerEventSource, PointerMoveHandler, ViewportHandler,
};

/// Element node with an owned ancestor chain.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeElement {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    parent: Option<Rc<FakeElement>>,
    native_closest: Option<bool>,
    closest_queries: Rc<RefCell<Vec<String>>>,
}

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attributes: Vec::new(),
            parent: None,
            native_closest: None,
            closest_queries: Rc::default(),
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_parent(mut self, parent: FakeElement) -> Self {
        self.parent = Some(Rc::new(parent));
        self
    }

    /// Answer `closest_match` with `result` instead of deferring to the walk.
    pub fn with_native_closest(mut self, result: bool) -> Self {
        self.native_closest = Some(result);
        self
    }

    /// Selectors passed to `closest_match` so far.
    pub fn closest_queries(&self) -> Vec<String> {
        self.closest_queries.borrow().clone()
    }
}

impl ElementNode for FakeElement {
    fn tag_name(&self) -> String {
        self.tag.to_ascii_uppercase()
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent.as_deref().cloned()
    }

    fn closest_match(&self, selector: &str) -> Option<bool> {
        let result = self.native_closest?;
        self.closest_queries.borrow_mut().push(selector.to_string());
        Some(result)
    }
}

/// One write to the marker: the frame and the hover class it was given.
pub type MarkerWrite = (MarkerFrame, String);

/// Marker that records every frame written to it.
#[derive(Debug, Clone, Default)]
pub struct RecordingMarker {
    writes: Rc<RefCell<Vec<MarkerWrite>>>,
}

impl MarkerSurface for RecordingMarker {
    fn apply(&self, frame: &MarkerFrame, hover_class: &str) {
        self.writes
            .borrow_mut()
            .push((*frame, hover_class.to_string()));
    }
}

/// Host with manual event dispatch and a manually pumped frame queue.
#[derive(Default)]
pub struct FakeHost {
    marker: Option<RecordingMarker>,
    looked_up: RefCell<Vec<String>>,
    move_handlers: RefCell<Vec<PointerMoveHandler>>,
    over_handlers: RefCell<Vec<ElementHandler<FakeElement>>>,
    out_handlers: RefCell<Vec<ElementHandler<FakeElement>>>,
    enter_handlers: RefCell<Vec<ViewportHandler>>,
    leave_handlers: RefCell<Vec<ViewportHandler>>,
    pending_frames: RefCell<VecDeque<FrameCallback>>,
    frame_requests: Cell<usize>,
    fail_frame_requests: Cell<bool>,
}

impl FakeHost {
    /// Host whose document contains a marker element.
    pub fn with_marker() -> Self {
        Self {
            marker: Some(RecordingMarker::default()),
            ..Default::default()
        }
    }

    /// Host whose document has no marker element.
    pub fn without_marker() -> Self {
        Self::default()
    }

    pub fn fail_frame_requests(&self) {
        self.fail_frame_requests.set(true);
    }

    pub fn looked_up(&self) -> Vec<String> {
        self.looked_up.borrow().clone()
    }

    pub fn handler_count(&self) -> usize {
        self.move_handlers.borrow().len()
            + self.over_handlers.borrow().len()
            + self.out_handlers.borrow().len()
            + self.enter_handlers.borrow().len()
            + self.leave_handlers.borrow().len()
    }

    pub fn frame_requests(&self) -> usize {
        self.frame_requests.get()
    }

    pub fn pending_frames(&self) -> usize {
        self.pending_frames.borrow().len()
    }

    /// Everything written to the marker so far.
    pub fn marker_writes(&self) -> Vec<MarkerWrite> {
        self.marker
            .as_ref()
            .map(|m| m.writes.borrow().clone())
            .unwrap_or_default()
    }

    pub fn last_frame(&self) -> Option<MarkerFrame> {
        self.marker_writes().last().map(|(frame, _)| *frame)
    }

    pub fn move_to(&self, x: f64, y: f64) {
        for handler in self.move_handlers.borrow_mut().iter_mut() {
            handler(XY::new(x, y));
        }
    }

    pub fn over(&self, element: &FakeElement) {
        for handler in self.over_handlers.borrow_mut().iter_mut() {
            handler(element);
        }
    }

    pub fn out(&self, element: &FakeElement) {
        for handler in self.out_handlers.borrow_mut().iter_mut() {
            handler(element);
        }
    }

    pub fn enter(&self) {
        for handler in self.enter_handlers.borrow_mut().iter_mut() {
            handler();
        }
    }

    pub fn leave(&self) {
        for handler in self.leave_handlers.borrow_mut().iter_mut() {
            handler();
        }
    }

    /// Run up to `count` queued frame callbacks. Returns how many ran.
    pub fn run_frames(&self, count: usize) -> usize {
        let mut ran = 0;
        while ran < count {
            let next = self.pending_frames.borrow_mut().pop_front();
            match next {
                Some(callback) => callback(),
                None => break,
            }
            ran += 1;
        }
        ran
    }
}

impl PointerEventSource for FakeHost {
    type Element = FakeElement;

    fn register_pointer_move_handler(&self, handler: PointerMoveHandler) -> FolioResult<()> {
        self.move_handlers.borrow_mut().push(handler);
        Ok(())
    }

    fn register_pointer_over_handler(
        &self,
        handler: ElementHandler<FakeElement>,
    ) -> FolioResult<()> {
        self.over_handlers.borrow_mut().push(handler);
        Ok(())
    }

    fn register_pointer_out_handler(
        &self,
        handler: ElementHandler<FakeElement>,
    ) -> FolioResult<()> {
        self.out_handlers.borrow_mut().push(handler);
        Ok(())
    }

    fn register_viewport_enter_handler(&self, handler: ViewportHandler) -> FolioResult<()> {
        self.enter_handlers.borrow_mut().push(handler);
        Ok(())
    }

    fn register_viewport_leave_handler(&self, handler: ViewportHandler) -> FolioResult<()> {
        self.leave_handlers.borrow_mut().push(handler);
        Ok(())
    }
}

impl FrameScheduler for FakeHost {
    fn request_frame(&self, callback: FrameCallback) -> FolioResult<()> {
        if self.fail_frame_requests.get() {
            return Err(FolioError::HostError("requestAnimationFrame failed".to_string()));
        }
        self.frame_requests.set(self.frame_requests.get() + 1);
        self.pending_frames.borrow_mut().push_back(callback);
        Ok(())
    }
}

impl MarkerLocator for FakeHost {
    type Marker = RecordingMarker;

    fn find_marker(&self, selector: &str) -> Option<RecordingMarker> {
        self.looked_up.borrow_mut().push(selector.to_string());
        self.marker.clone()
    }
}
