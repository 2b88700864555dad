//! WebAssembly tests for the search controller.
//!
//! Run with: wasm-pack test --headless --chrome

use client::controller::{SearchController, SearchOutput};
use client::results::RenderItem;
use leptos::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn controller_starts_idle() {
    let controller = SearchController::new();
    assert_eq!(controller.output().get_untracked(), SearchOutput::Idle);
}

#[wasm_bindgen_test]
fn current_token_publishes() {
    let controller = SearchController::new();
    let token = controller.begin();
    controller.publish(token, SearchOutput::Message("Searching...".to_string()));
    assert_eq!(
        controller.output().get_untracked(),
        SearchOutput::Message("Searching...".to_string())
    );
}

#[wasm_bindgen_test]
fn stale_token_is_discarded() {
    let controller = SearchController::new();
    let first = controller.begin();
    let second = controller.begin();

    controller.publish(
        second,
        SearchOutput::Results(vec![RenderItem {
            src: "/images/cats/1.jpg".to_string(),
            alt: "42".to_string(),
        }]),
    );
    // The superseded flow's late response must not overwrite the newer one.
    controller.publish(first, SearchOutput::Message("Error: timeout".to_string()));

    match controller.output().get_untracked() {
        SearchOutput::Results(items) => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].src, "/images/cats/1.jpg");
        }
        other => panic!("expected results to survive, got {other:?}"),
    }
}

#[wasm_bindgen_test]
fn each_begin_invalidates_earlier_tokens() {
    let controller = SearchController::new();
    let first = controller.begin();
    assert!(controller.is_current(first));
    let second = controller.begin();
    assert!(!controller.is_current(first));
    assert!(controller.is_current(second));
}
