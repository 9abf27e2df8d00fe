//! DOM implementations of the follower host traits.

use folio_lib::cursor::{ElementNode, MarkerFrame, XY};
use folio_lib::host::{
    ElementHandler, FrameCallback, FrameScheduler, MarkerLocator, MarkerSurface,
    PointerEventSource, PointerMoveHandler, ViewportHandler,
};
use folio_lib::site::KeyValueStore;
use folio_lib::error::ErrorContext;
use folio_lib::{FolioError, FolioResult};
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent, Storage, Window};

/// Convert a crate error into something JS can throw.
pub fn to_js(err: FolioError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Attach `closure` for the rest of the page session. Listeners are never
/// removed, so the closure is leaked.
fn listen<T>(target: &EventTarget, event: &str, closure: Closure<T>) -> FolioResult<()>
where
    T: ?Sized + WasmClosure,
{
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .host_context(event)?;
    closure.forget();
    Ok(())
}

/// Element handle for over/out events.
#[derive(Debug, Clone)]
pub struct DomElement(pub Element);

impl ElementNode for DomElement {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn parent_element(&self) -> Option<Self> {
        self.0.parent_element().map(DomElement)
    }

    fn closest_match(&self, selector: &str) -> Option<bool> {
        match self.0.closest(selector) {
            Ok(found) => Some(found.is_some()),
            Err(e) => {
                log::debug!("[CURSOR] closest('{}') failed: {:?}", selector, e);
                None
            },
        }
    }
}

/// The marker element, written through inline styles and its class list.
pub struct DomMarker {
    element: HtmlElement,
}

impl MarkerSurface for DomMarker {
    fn apply(&self, frame: &MarkerFrame, hover_class: &str) {
        let style = self.element.style();
        if let Err(e) = style.set_property("transform", &frame.css_transform()) {
            log::debug!("[CURSOR] transform write failed: {:?}", e);
        }
        if let Err(e) = style.set_property("opacity", frame.css_opacity()) {
            log::debug!("[CURSOR] opacity write failed: {:?}", e);
        }
        if let Err(e) = self
            .element
            .class_list()
            .toggle_with_force(hover_class, frame.hovering)
        {
            log::debug!("[CURSOR] class toggle failed: {:?}", e);
        }
    }
}

/// Browser window and document as a follower host.
///
/// Pointer moves come from the window, element crossings and viewport
/// enter/leave from the document, so hover matching is delegated and keeps
/// working as the SPA swaps page content.
pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    pub fn new() -> FolioResult<Self> {
        let window = web_sys::window().host_context("window")?;
        let document = window.document().host_context("document")?;
        Ok(Self { window, document })
    }
}

impl PointerEventSource for DomHost {
    type Element = DomElement;

    fn register_pointer_move_handler(&self, mut handler: PointerMoveHandler) -> FolioResult<()> {
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            handler(XY::new(event.client_x() as f64, event.client_y() as f64))
        });
        listen(&self.window, "mousemove", closure)
    }

    fn register_pointer_over_handler(
        &self,
        handler: ElementHandler<DomElement>,
    ) -> FolioResult<()> {
        listen(&self.document, "mouseover", element_closure(handler))
    }

    fn register_pointer_out_handler(
        &self,
        handler: ElementHandler<DomElement>,
    ) -> FolioResult<()> {
        listen(&self.document, "mouseout", element_closure(handler))
    }

    fn register_viewport_enter_handler(&self, mut handler: ViewportHandler) -> FolioResult<()> {
        let closure = Closure::<dyn FnMut()>::new(move || handler());
        listen(&self.document, "mouseenter", closure)
    }

    fn register_viewport_leave_handler(&self, mut handler: ViewportHandler) -> FolioResult<()> {
        let closure = Closure::<dyn FnMut()>::new(move || handler());
        listen(&self.document, "mouseleave", closure)
    }
}

/// Wrap an element handler so it receives the event target.
fn element_closure(mut handler: ElementHandler<DomElement>) -> Closure<dyn FnMut(Event)> {
    Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            handler(&DomElement(element));
        }
    })
}

impl FrameScheduler for DomHost {
    fn request_frame(&self, callback: FrameCallback) -> FolioResult<()> {
        let js_callback = Closure::once_into_js(move || callback());
        self.window
            .request_animation_frame(js_callback.unchecked_ref())
            .host_context("requestAnimationFrame")?;
        Ok(())
    }
}

impl MarkerLocator for DomHost {
    type Marker = DomMarker;

    fn find_marker(&self, selector: &str) -> Option<DomMarker> {
        match self.document.query_selector(selector) {
            Ok(Some(element)) => match element.dyn_into::<HtmlElement>() {
                Ok(element) => Some(DomMarker { element }),
                Err(_) => {
                    log::warn!("[CURSOR] '{}' is not an HTML element", selector);
                    None
                },
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("[CURSOR] Invalid marker selector '{}': {:?}", selector, e);
                None
            },
        }
    }
}

/// `window.localStorage` as a key-value store.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn new(window: &Window) -> FolioResult<Self> {
        let storage = window
            .local_storage()
            .storage_context("localStorage")?
            .storage_context("localStorage")?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        self.storage
            .get_item(key)
            .storage_context("getItem")
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        self.storage
            .set_item(key, value)
            .storage_context("setItem")
    }
}
