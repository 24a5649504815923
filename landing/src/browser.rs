//! Thin wrappers over the `web_sys` calls the sections share.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config::{START_TOUR_EVENT, TOUR_HIGHLIGHT_CLASS};
use crate::error::{LandingError, Result, describe_js};

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(LandingError::NoWindow)
}

/// Write `text` to the system clipboard.
pub async fn copy_text(text: &str) -> Result<()> {
    let promise = window()?.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| LandingError::Clipboard(describe_js(&e)))
}

/// Ask the tour to start. Anything on the page may call this.
pub fn request_tour() -> Result<()> {
    let dispatch_err = |e: wasm_bindgen::JsValue| LandingError::Dispatch {
        event: START_TOUR_EVENT.to_string(),
        detail: describe_js(&e),
    };
    let event = web_sys::CustomEvent::new(START_TOUR_EVENT).map_err(dispatch_err)?;
    window()?.dispatch_event(&event).map_err(dispatch_err)?;
    tracing::debug!("tour requested");
    Ok(())
}

/// Preview URL for a picked file. Pair with [`revoke_object_url`].
pub fn object_url(file: &web_sys::File) -> Result<String> {
    web_sys::Url::create_object_url_with_blob(file)
        .map_err(|e| LandingError::ObjectUrl(describe_js(&e)))
}

pub fn revoke_object_url(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        tracing::debug!(url, err = %describe_js(&e), "object URL revoke failed");
    }
}

/// First file of a `<input type="file">` change event, if any.
pub fn picked_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    ev.target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}

pub fn query(selector: &str) -> Option<web_sys::Element> {
    web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()
}

/// Scroll `selector` to the middle of the viewport and mark it.
/// Returns `false` when nothing matches.
pub fn spotlight(selector: &str) -> bool {
    let Some(el) = query(selector) else {
        return false;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    let _ = el.class_list().add_1(TOUR_HIGHLIGHT_CLASS);
    true
}

pub fn clear_spotlight(selector: &str) {
    if let Some(el) = query(selector) {
        let _ = el.class_list().remove_1(TOUR_HIGHLIGHT_CLASS);
    }
}

/// Vertical scroll position, 0 when unknown.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Smooth in-page anchor scrolling, unless the visitor asked for less motion.
pub fn configure_scroll_behavior() {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let behavior = if prefers_reduced_motion() { "auto" } else { "smooth" };
    let _ = root.style().set_property("scroll-behavior", behavior);
}
