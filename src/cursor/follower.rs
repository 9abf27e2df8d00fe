//! Pointer follower component.
//!
//! `PointerFollower` owns the state and applies the event operations and the
//! frame tick to it. [`mount`] wires one follower to a host: it registers the
//! five pointer handlers and starts a frame loop that ticks, writes the marker
//! and reschedules itself for as long as the page lives.
//!
//! If the host has no marker element, `mount` does nothing at all: no
//! handlers, no frame requests.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use super::events::{PointerEvent, XY};
use super::frame::MarkerFrame;
use super::interactive::{ElementNode, InteractiveMatcher};
use super::state::FollowerState;
use crate::config::cursor::validate_smoothing_factor;
use crate::config::CursorConfig;
use crate::error::FolioResult;
use crate::host::{CursorHost, FrameScheduler, MarkerSurface};

/// Smoothed pointer-following marker state plus its configuration.
#[derive(Debug, Clone)]
pub struct PointerFollower {
    state: FollowerState,
    config: CursorConfig,
    matcher: InteractiveMatcher,
    frames: u64,
}

impl PointerFollower {
    pub fn new(config: CursorConfig) -> FolioResult<Self> {
        config.validate()?;
        let matcher = InteractiveMatcher::from_config(&config);
        Ok(Self {
            state: FollowerState::new(),
            config,
            matcher,
            frames: 0,
        })
    }

    pub fn state(&self) -> &FollowerState {
        &self.state
    }

    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    /// Ticks run since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn smoothing_factor(&self) -> f64 {
        self.config.smoothing_factor
    }

    /// Retune this follower; takes effect on the next tick.
    pub fn set_smoothing_factor(&mut self, factor: f64) -> FolioResult<()> {
        validate_smoothing_factor(factor)?;
        log::debug!("[CURSOR] Smoothing factor {} -> {}", self.config.smoothing_factor, factor);
        self.config.smoothing_factor = factor;
        Ok(())
    }

    /// Record the pointer position. The first call also reveals the marker.
    pub fn on_pointer_move(&mut self, position: XY<f64>) {
        self.state.set_target(position);
        if self.state.reveal() {
            self.state.set_visible(true);
            log::debug!(
                "[CURSOR] Revealed at ({:.1}, {:.1})",
                position.x,
                position.y
            );
        }
    }

    pub fn on_pointer_over_element<E: ElementNode>(&mut self, element: &E) {
        if self.matcher.matches(element) {
            self.state.set_hovering(true);
        }
    }

    pub fn on_pointer_out_element<E: ElementNode>(&mut self, element: &E) {
        if self.matcher.matches(element) {
            self.state.set_hovering(false);
        }
    }

    pub fn on_viewport_leave(&mut self) {
        self.state.set_visible(false);
    }

    pub fn on_viewport_enter(&mut self) {
        self.state.set_visible(true);
    }

    /// Dispatch one event to the matching operation.
    pub fn handle_event<E: ElementNode>(&mut self, event: &PointerEvent<E>) {
        match event {
            PointerEvent::Move(position) => self.on_pointer_move(*position),
            PointerEvent::Over(element) => self.on_pointer_over_element(element),
            PointerEvent::Out(element) => self.on_pointer_out_element(element),
            PointerEvent::ViewportEnter => self.on_viewport_enter(),
            PointerEvent::ViewportLeave => self.on_viewport_leave(),
        }
    }

    /// Advance the smoothed position one frame and return what to draw.
    pub fn tick(&mut self) -> MarkerFrame {
        self.state.advance(self.config.smoothing_factor);
        self.frames += 1;
        let frame = self.frame();
        log::trace!("[CURSOR] frame {}: {:?}", self.frames, frame);
        frame
    }

    /// Frame for the current state, without advancing.
    pub fn frame(&self) -> MarkerFrame {
        MarkerFrame::from_state(&self.state, &self.config)
    }
}

/// A follower attached to a host by [`mount`].
#[derive(Debug, Clone)]
pub struct MountedCursor {
    follower: Rc<RefCell<PointerFollower>>,
}

impl MountedCursor {
    pub fn follower(&self) -> Ref<'_, PointerFollower> {
        self.follower.borrow()
    }

    /// Copy of the current state.
    pub fn state(&self) -> FollowerState {
        self.follower.borrow().state().clone()
    }

    pub fn set_smoothing_factor(&self, factor: f64) -> FolioResult<()> {
        self.follower.borrow_mut().set_smoothing_factor(factor)
    }
}

/// Attach a follower to `host`.
///
/// Returns `Ok(None)` and touches nothing when the marker element is absent.
/// Otherwise registers the pointer handlers, draws the first frame right away
/// and keeps one frame request outstanding from then on.
pub fn mount<H>(host: Rc<H>, config: CursorConfig) -> FolioResult<Option<MountedCursor>>
where
    H: CursorHost + 'static,
    H::Marker: 'static,
{
    config.validate()?;

    let Some(marker) = host.find_marker(&config.marker_selector) else {
        log::debug!(
            "[CURSOR] No element matches '{}', follower stays inert",
            config.marker_selector
        );
        return Ok(None);
    };

    let follower = Rc::new(RefCell::new(PointerFollower::new(config)?));

    let f = Rc::clone(&follower);
    host.register_pointer_move_handler(Box::new(move |position: XY<f64>| {
        f.borrow_mut().on_pointer_move(position)
    }))?;

    let f = Rc::clone(&follower);
    host.register_pointer_over_handler(Box::new(move |element: &H::Element| {
        f.borrow_mut().on_pointer_over_element(element)
    }))?;

    let f = Rc::clone(&follower);
    host.register_pointer_out_handler(Box::new(move |element: &H::Element| {
        f.borrow_mut().on_pointer_out_element(element)
    }))?;

    let f = Rc::clone(&follower);
    host.register_viewport_leave_handler(Box::new(move || f.borrow_mut().on_viewport_leave()))?;

    let f = Rc::clone(&follower);
    host.register_viewport_enter_handler(Box::new(move || f.borrow_mut().on_viewport_enter()))?;

    log::info!(
        "[CURSOR] Follower mounted (smoothing={}, size={})",
        follower.borrow().smoothing_factor(),
        follower.borrow().config().marker_size
    );

    run_frame(host, Rc::clone(&follower), Rc::new(marker));

    Ok(Some(MountedCursor { follower }))
}

/// Tick, draw, and request the next frame.
fn run_frame<S, M>(scheduler: Rc<S>, follower: Rc<RefCell<PointerFollower>>, marker: Rc<M>)
where
    S: FrameScheduler + 'static,
    M: MarkerSurface + 'static,
{
    {
        let mut f = follower.borrow_mut();
        let frame = f.tick();
        marker.apply(&frame, &f.config().hover_class);
    }

    let next = Rc::clone(&scheduler);
    let result = scheduler.request_frame(Box::new(move || run_frame(next, follower, marker)));
    if let Err(e) = result {
        log::warn!("[CURSOR] Could not request next frame, animation stopped: {}", e);
    }
}
