//! Clipboard utilities for copying text to clipboard
//!
//! Wraps the Web Clipboard API. `navigator.clipboard` is missing on insecure
//! origins, so availability is checked before every write.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Whether `navigator.clipboard` exists in this browsing context
pub fn clipboard_available() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w.navigator(), &JsValue::from_str("clipboard")).ok())
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

/// Write text to the system clipboard, resolving to `true` on success
pub async fn write_text(text: &str) -> bool {
    if !clipboard_available() {
        return false;
    }
    let Some(window) = web_sys::window() else {
        return false;
    };
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await.is_ok()
}

/// Copy text to clipboard with callbacks for both outcomes
///
/// `on_failure` also runs when the Clipboard API is unavailable.
pub fn copy_to_clipboard_or_else<S, F>(text: &str, on_success: S, on_failure: F)
where
    S: FnOnce() + 'static,
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if write_text(&text).await {
            on_success();
        } else {
            on_failure();
        }
    });
}
