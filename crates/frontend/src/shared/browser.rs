//! Thin wrappers over the `window` APIs the storefront needs.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

/// Blocking notification
pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

/// Blocking yes/no question; `false` when the dialog cannot be shown
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// `location.hash`, including the leading `#`
pub fn current_fragment() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Current address without the fragment (`pathname + search`)
pub fn base_address() -> String {
    let Some(location) = window().map(|w| w.location()) else {
        return String::new();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{path}{search}")
}

/// `history.pushState(null, '', url)`
pub fn push_address(url: &str) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(url)) {
            log::warn!("pushState falló: {:?}", e);
        }
    }
}

pub fn user_agent() -> String {
    window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

pub fn scroll_to_top() {
    if let Some(w) = window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Milliseconds since epoch, used for cache busting
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// `window.open(url, '_blank')`. `Ok(false)` means the popup was blocked.
pub fn open_in_new_tab(url: &str) -> Result<bool, JsValue> {
    let w = window().ok_or_else(|| JsValue::from_str("no window"))?;
    Ok(w.open_with_url_and_target(url, "_blank")?.is_some())
}

/// In-place navigation, the last resort of the checkout cascade
pub fn navigate(url: &str) {
    if let Some(w) = window() {
        let _ = w.location().set_href(url);
    }
}

/// Listen to a window event for the whole app lifetime
pub fn on_window_event(name: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Some(w) = window() {
        let _ = w.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    }
    // Listeners are installed once at startup; keep the closure alive.
    closure.forget();
}
