//! Scroll-triggered fade-ins.
//!
//! Anything with the `reveal` class starts hidden (see `style.css`) and gets
//! `visible` the first time it scrolls into view. Each element is observed
//! once, then dropped from the observer.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::browser;
use crate::config::{REVEAL_CLASS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, REVEAL_VISIBLE_CLASS};

/// `transition-delay` for the `index`-th card of a staggered grid.
pub fn stagger(index: usize) -> String {
    format!("transition-delay: {}ms;", index * 100)
}

fn reveal_targets() -> Vec<Element> {
    let Some(nodes) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all(&format!(".{REVEAL_CLASS}")).ok())
    else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn show(el: &Element) {
    let _ = el.class_list().add_1(REVEAL_VISIBLE_CLASS);
}

fn observe(targets: &[Element]) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    show(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for el in targets {
        observer.observe(el);
    }
    // The observer holds the only reference to the callback for the page lifetime.
    callback.forget();
    Ok(())
}

/// Mount once, after the sections. Also sets the document scroll behaviour.
#[component]
pub fn ScrollReveal() -> impl IntoView {
    Effect::new(move || {
        browser::configure_scroll_behavior();

        let targets = reveal_targets();
        if browser::prefers_reduced_motion() {
            targets.iter().for_each(show);
            return;
        }
        if let Err(e) = observe(&targets) {
            tracing::warn!(err = ?e, "IntersectionObserver unavailable, showing everything");
            targets.iter().for_each(show);
        } else {
            tracing::debug!(count = targets.len(), "reveal observer armed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_steps_by_a_tenth_of_a_second() {
        assert_eq!(stagger(0), "transition-delay: 0ms;");
        assert_eq!(stagger(3), "transition-delay: 300ms;");
    }
}
