//! Thin wrappers over the browser primitives the sections share: scroll
//! position, smooth scrolling, section measurement, and a timer-backed
//! sleep. All lookups degrade to no-ops when the window is unavailable.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
};

use crate::interaction::SectionBounds;

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn scroll_offset() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn scroll_behavior() -> ScrollBehavior {
    if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    }
}

pub fn scroll_to_section(section_id: &str) {
    let Some(document) = document() else {
        return;
    };
    let Some(element) = document.get_element_by_id(section_id) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(scroll_behavior());
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(scroll_behavior());
    win.scroll_to_with_scroll_to_options(&options);
}

/// Measures the document-space bounding boxes of the given section ids,
/// preserving their order. Sections missing from the DOM are skipped.
pub fn measure_sections(ids: &[&'static str]) -> Vec<SectionBounds> {
    let Some(document) = document() else {
        return Vec::new();
    };

    ids.iter()
        .filter_map(|&id| {
            let element: HtmlElement = document.get_element_by_id(id)?.dyn_into().ok()?;

            Some(SectionBounds {
                id,
                top: f64::from(element.offset_top()),
                height: f64::from(element.offset_height()),
            })
        })
        .collect()
}

/// Subscribes `handler` to window scroll events and returns the
/// unsubscribe closure for the caller's effect teardown.
pub fn on_scroll(handler: impl Fn() + 'static) -> impl FnOnce() {
    let callback = Closure::<dyn Fn()>::new(handler);

    if let Some(win) = window() {
        let _ = win.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
    }

    move || {
        if let Some(win) = window() {
            let _ = win
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }
    }
}

/// Resolves after `ms` via a JS timeout; the delay behind the simulated
/// form submission.
pub async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(win) = window() {
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });

    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
