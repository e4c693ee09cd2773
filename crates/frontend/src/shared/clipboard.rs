//! Clipboard helpers.
//!
//! The async Clipboard API is unavailable over plain http on some
//! deployments, so copying falls back to a hidden textarea + execCommand.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

/// Copy text to the system clipboard with a callback on success.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            if wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                .await
                .is_ok()
            {
                on_success();
                return;
            }
            if copy_via_textarea(&text) {
                on_success();
            }
        }
    });
}

fn copy_via_textarea(text: &str) -> bool {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return false,
    };
    let body = match document.body() {
        Some(b) => b,
        None => return false,
    };

    let textarea = match document
        .create_element("textarea")
        .ok()
        .and_then(|e| e.dyn_into::<HtmlTextAreaElement>().ok())
    {
        Some(t) => t,
        None => return false,
    };

    textarea.set_value(text);
    let _ = textarea.style().set_property("position", "fixed");
    let _ = textarea.style().set_property("opacity", "0");

    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|d| d.exec_command("copy").ok())
        .unwrap_or(false);
    let _ = body.remove_child(&textarea);
    copied
}
