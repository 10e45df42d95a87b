//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API. Write failures are logged and otherwise
//! ignored: the caller does not wait for the write to finish.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await
            {
                log::warn!("Clipboard write failed: {:?}", e);
            }
        }
    });
}
