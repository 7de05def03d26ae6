//! Thin wrappers over the browser APIs the page behaviors need.
//!
//! Every helper degrades to a no-op when the object it needs is missing, so
//! one unavailable API never takes another behavior down with it.

use gloo::events::EventListener;
use portfolio_core::diagnostics::BannerLine;
use portfolio_core::{PortfolioError, PortfolioResult, ResumeAsset};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

/// Id of the optional `<script type="application/json">` config override
const CONFIG_ELEMENT_ID: &str = "site-config";

fn window() -> PortfolioResult<Window> {
    web_sys::window().ok_or_else(|| PortfolioError::Dom("no window".to_string()))
}

fn document() -> PortfolioResult<Document> {
    window()?
        .document()
        .ok_or_else(|| PortfolioError::Dom("no document".to_string()))
}

fn js_error(context: &str, err: JsValue) -> PortfolioError {
    PortfolioError::Dom(format!("{context}: {err:?}"))
}

/// Current vertical scroll offset in pixels
pub fn scroll_offset() -> f64 {
    window()
        .ok()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Call `on_offset` with the new offset on every window scroll event.
///
/// The listener is removed when the returned handle is dropped.
pub fn on_scroll(mut on_offset: impl FnMut(f64) + 'static) -> Option<EventListener> {
    let window = window().ok()?;
    let source = window.clone();
    Some(EventListener::new(&window, "scroll", move |_| {
        on_offset(source.scroll_y().unwrap_or(0.0));
    }))
}

/// Smoothly scroll the viewport back to the top.
pub fn scroll_to_top() {
    let Ok(window) = window() else { return };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smoothly scroll the element with `id` to the top of the viewport.
///
/// Returns false when no such element exists.
pub fn scroll_to_fragment(id: &str) -> bool {
    let Some(target) = document().ok().and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Start downloading `asset` through a transient anchor.
pub fn download(asset: &ResumeAsset) -> PortfolioResult<()> {
    let anchor: HtmlAnchorElement = document()?
        .create_element("a")
        .map_err(|e| js_error("create anchor", e))?
        .dyn_into()
        .map_err(|_| PortfolioError::Dom("created element is not an anchor".to_string()))?;
    anchor.set_href(&asset.href);
    anchor.set_download(&asset.file_name);
    anchor.click();
    Ok(())
}

/// Replace the current history entry with itself.
pub fn replace_history_entry() -> PortfolioResult<()> {
    let window = window()?;
    let href = window
        .location()
        .href()
        .map_err(|e| js_error("read location", e))?;
    window
        .history()
        .map_err(|e| js_error("access history", e))?
        .replace_state_with_url(&JsValue::NULL, "", Some(&href))
        .map_err(|e| js_error("replace history entry", e))
}

/// Raw JSON of the embedded config override, if the page carries one
pub fn embedded_config() -> Option<String> {
    document()
        .ok()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

/// Print styled lines to the developer console.
pub fn print_banner(lines: &[BannerLine]) {
    for line in lines {
        gloo::console::log!(line.format(), line.style);
    }
}
