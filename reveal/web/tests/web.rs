//! Browser-side mount/dispose behavior against a real DOM.

#![cfg(target_arch = "wasm32")]

use reveal_web::{mount_with_preference, scan_targets, MotionPreference};
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
<div data-hero-eyebrow>eyebrow</div>
<h1 data-hero-title><span>line one</span><span>line two</span></h1>
<p data-hero-copy>copy</p>
<div data-hero-cta>cta</div>
<section data-reveal>a</section>
<section data-reveal>b</section>
<section data-reveal>c</section>
<article data-card>1</article>
<article data-card>2</article>
<article data-card>3</article>
<article data-card>4</article>
"#;

fn mount_fixture(markup: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(markup);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn remove_fixture(root: &Element) {
    root.remove();
}

#[wasm_bindgen_test]
fn scan_finds_every_tagged_target() {
    let root = mount_fixture(PAGE);

    let inventory = scan_targets(&root).inventory();
    let hero = inventory.hero.expect("hero group present");
    assert!(hero.has_eyebrow);
    assert_eq!(hero.title_lines, 2);
    assert!(hero.has_copy);
    assert!(hero.has_cta);
    assert_eq!(inventory.reveals, 3);
    assert_eq!(inventory.cards, 4);

    remove_fixture(&root);
}

#[wasm_bindgen_test]
fn scan_of_untagged_markup_is_empty() {
    let root = mount_fixture("<p>plain</p>");

    let inventory = scan_targets(&root).inventory();
    assert!(inventory.hero.is_none());
    assert_eq!(inventory.reveals, 0);
    assert_eq!(inventory.cards, 0);

    remove_fixture(&root);
}

#[wasm_bindgen_test]
fn mount_registers_one_registration_per_target_group() {
    let root = mount_fixture(PAGE);

    let mut handle = mount_with_preference(&root, MotionPreference::Allowed);
    // 1 hero group + 3 reveals + 4 cards.
    assert_eq!(handle.registration_count(), 8);
    assert_eq!(handle.pending_count(), 7);
    assert_eq!(handle.observer_count(), 7);

    handle.dispose();
    remove_fixture(&root);
}

#[wasm_bindgen_test]
fn reduced_motion_mount_registers_nothing() {
    let root = mount_fixture(PAGE);

    let mut handle = mount_with_preference(&root, MotionPreference::Reduced);
    assert_eq!(handle.registration_count(), 0);
    assert_eq!(handle.observer_count(), 0);

    handle.dispose();
    remove_fixture(&root);
}

#[wasm_bindgen_test]
fn dispose_detaches_everything_and_is_idempotent() {
    let root = mount_fixture(PAGE);
    let mut handle = mount_with_preference(&root, MotionPreference::Allowed);

    handle.dispose();
    assert!(handle.is_disposed());
    assert_eq!(handle.registration_count(), 0);
    assert_eq!(handle.observer_count(), 0);

    // Second dispose is a safe no-op.
    handle.dispose();
    assert!(handle.is_disposed());

    remove_fixture(&root);
}

#[wasm_bindgen_test]
fn mount_with_missing_targets_skips_them() {
    let root = mount_fixture("<section data-reveal>only</section>");

    let mut handle = mount_with_preference(&root, MotionPreference::Allowed);
    assert_eq!(handle.registration_count(), 1);
    assert_eq!(handle.observer_count(), 1);

    handle.dispose();
    remove_fixture(&root);
}
