//! Folio browser binding
//!
//! Mounts the custom cursor on the live DOM and runs the build-version
//! guard. Loaded from `main.js` before the SPA mounts:
//!
//! ```js
//! import init, { checkSiteVersion, mountCursor } from 'folio-web';
//! await init();
//! checkSiteVersion(import.meta.env.VITE_BUILD_ID);
//! const cursor = mountCursor({ smoothingFactor: 0.2 });
//! ```

mod dom;

use folio_lib::config::cursor::{
    get_cursor_config, set_cursor_config, set_default_smoothing_factor,
};
use folio_lib::cursor::{MountedCursor, XY};
use folio_lib::error::ErrorContext;
use folio_lib::site::check_version;
use folio_lib::{mount, CursorConfig, FolioError};
use serde::Serialize;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use dom::{to_js, DomHost, LocalStore};

/// Initialize panic hook and logging for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[Folio] WASM module initialized");
}

/// Follower state as seen from JavaScript
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CursorStateView {
    target: XY<f64>,
    current: XY<f64>,
    revealed: bool,
    hovering: bool,
    visible: bool,
}

/// Handle to a mounted cursor follower
#[wasm_bindgen]
pub struct CursorHandle {
    inner: MountedCursor,
}

#[wasm_bindgen]
impl CursorHandle {
    /// Retune the trailing lag of this cursor, `(0, 1]`
    #[wasm_bindgen(js_name = setSmoothingFactor)]
    pub fn set_smoothing_factor(&self, factor: f64) -> Result<(), JsValue> {
        self.inner.set_smoothing_factor(factor).map_err(to_js)
    }

    #[wasm_bindgen(getter, js_name = smoothingFactor)]
    pub fn smoothing_factor(&self) -> f64 {
        self.inner.follower().smoothing_factor()
    }

    /// Snapshot of the follower state
    #[wasm_bindgen]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        let state = self.inner.state();
        let view = CursorStateView {
            target: state.target(),
            current: state.current(),
            revealed: state.revealed(),
            hovering: state.hovering(),
            visible: state.visible(),
        };
        serde_wasm_bindgen::to_value(&view)
            .host_context("serialize cursor state")
            .map_err(to_js)
    }
}

/// Mount the custom cursor.
///
/// `config` is an optional partial `CursorConfig`; omitted fields fall back to
/// defaults. Returns `undefined` when the page has no marker element.
#[wasm_bindgen(js_name = mountCursor)]
pub fn mount_cursor(config: JsValue) -> Result<Option<CursorHandle>, JsValue> {
    let config = read_config(config)?;
    let host = Rc::new(DomHost::new().map_err(to_js)?);

    let mounted = mount(host, config).map_err(to_js)?;
    if mounted.is_none() {
        log::info!("[Folio] No cursor marker on this page");
    }
    Ok(mounted.map(|inner| CursorHandle { inner }))
}

/// Replace the defaults used by later `mountCursor` calls.
#[wasm_bindgen(js_name = setDefaultCursorConfig)]
pub fn set_default_cursor_config(config: JsValue) -> Result<(), JsValue> {
    let config = read_config(config)?;
    set_cursor_config(config).map_err(to_js)
}

/// Change only the default smoothing factor used by later `mountCursor` calls.
#[wasm_bindgen(js_name = setDefaultSmoothingFactor)]
pub fn set_default_smoothing_factor_js(factor: f64) -> Result<(), JsValue> {
    set_default_smoothing_factor(factor).map_err(to_js)
}

fn read_config(config: JsValue) -> Result<CursorConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(get_cursor_config());
    }
    serde_wasm_bindgen::from_value::<CursorConfig>(config)
        .map_err(|e| to_js(FolioError::InvalidConfig(e.to_string())))
}

/// Compare `build_id` with the last seen build and force one reload on change.
///
/// Also unregisters any service workers so they cannot keep serving stale
/// assets. Returns the check outcome (`{ kind: "firstVisit" | "current" |
/// "reload", ... }`).
#[wasm_bindgen(js_name = checkSiteVersion)]
pub fn check_site_version(build_id: &str) -> Result<JsValue, JsValue> {
    let window = web_sys::window().host_context("window").map_err(to_js)?;
    let store = LocalStore::new(&window).map_err(to_js)?;
    let href = window
        .location()
        .href()
        .host_context("location.href")
        .map_err(to_js)?;

    let outcome = check_version(&store, build_id, &href).map_err(to_js)?;
    if let folio_lib::site::VersionCheck::Reload { url, .. } = &outcome {
        window
            .location()
            .replace(url)
            .host_context("location.replace")
            .map_err(to_js)?;
    }

    unregister_service_workers(&window);

    serde_wasm_bindgen::to_value(&outcome)
        .host_context("serialize version check")
        .map_err(to_js)
}

/// Fire-and-forget unregistration of every service worker registration.
fn unregister_service_workers(window: &web_sys::Window) {
    let navigator = window.navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))
        .unwrap_or(false);
    if !supported {
        return;
    }

    let registrations = navigator.service_worker().get_registrations();
    wasm_bindgen_futures::spawn_local(async move {
        let result = async {
            let list = JsFuture::from(registrations).await?;
            for registration in js_sys::Array::from(&list).iter() {
                let registration: web_sys::ServiceWorkerRegistration = registration.dyn_into()?;
                JsFuture::from(registration.unregister()?).await?;
                log::info!("[VERSION] Unregistered service worker {}", registration.scope());
            }
            Ok::<(), JsValue>(())
        }
        .await;

        if let Err(e) = result.host_context("service worker cleanup") {
            log::warn!("[VERSION] {}", e);
        }
    });
}
