//! Browser-only checks. Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use krishe_landing::browser;
use krishe_landing::config::{START_TOUR_EVENT, TOUR_HIGHLIGHT_CLASS, TOUR_SEEN_KEY};
use krishe_landing::storage::{FlagStore, LocalFlagStore};
use krishe_landing::telemetry::log_directive;
use krishe_landing::tour::claim_autostart;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn forget_tour() {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .expect("localStorage");
    storage.remove_item(TOUR_SEEN_KEY).expect("remove flag");
}

#[wasm_bindgen_test]
fn local_store_round_trips_the_seen_flag() {
    forget_tour();
    let store = LocalFlagStore;
    assert!(!store.is_set(TOUR_SEEN_KEY).unwrap());
    store.set(TOUR_SEEN_KEY).unwrap();
    assert!(store.is_set(TOUR_SEEN_KEY).unwrap());
}

#[wasm_bindgen_test]
fn autostart_is_claimed_once_per_browser() {
    forget_tour();
    assert!(claim_autostart(&LocalFlagStore));
    assert!(!claim_autostart(&LocalFlagStore));
    forget_tour();
}

#[wasm_bindgen_test]
fn request_tour_reaches_window_listeners() {
    let window = web_sys::window().unwrap();
    let heard = Rc::new(Cell::new(0u32));

    let counter = heard.clone();
    let listener =
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_| counter.set(counter.get() + 1));
    window
        .add_event_listener_with_callback(START_TOUR_EVENT, listener.as_ref().unchecked_ref())
        .unwrap();

    browser::request_tour().unwrap();
    // dispatchEvent runs listeners synchronously
    assert_eq!(heard.get(), 1);

    window
        .remove_event_listener_with_callback(START_TOUR_EVENT, listener.as_ref().unchecked_ref())
        .unwrap();
}

#[wasm_bindgen_test]
fn missing_spotlight_target_is_reported() {
    assert!(!browser::spotlight("#definitely-not-on-this-page"));
}

#[wasm_bindgen_test]
fn spotlight_marks_and_clear_unmarks_the_target() {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("section").unwrap();
    el.set_id("spotlight-target");
    document.body().unwrap().append_child(&el).unwrap();

    assert!(browser::spotlight("#spotlight-target"));
    assert!(el.class_list().contains(TOUR_HIGHLIGHT_CLASS));

    browser::clear_spotlight("#spotlight-target");
    assert!(!el.class_list().contains(TOUR_HIGHLIGHT_CLASS));

    el.remove();
}

#[wasm_bindgen_test]
fn log_directive_is_percent_decoded() {
    assert_eq!(
        log_directive("?log=krishe_landing%3Dtrace%2Cinfo").as_deref(),
        Some("krishe_landing=trace,info")
    );
    assert_eq!(log_directive("?a=1&log=debug").as_deref(), Some("debug"));
}

#[wasm_bindgen_test]
fn missing_or_empty_log_directive_is_none() {
    assert_eq!(log_directive(""), None);
    assert_eq!(log_directive("?other=1"), None);
    assert_eq!(log_directive("?log="), None);
}
