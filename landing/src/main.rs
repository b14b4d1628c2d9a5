// Approx Landing Page — Leptos 0.8 Edition

mod sections;

use leptos::html::Div;
use leptos::prelude::*;
use sections::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    reveal_web::init();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// One-line brand card for the curious.
fn print_console_brand() {
    web_sys::console::log_2(
        &JsValue::from_str("%cAPPROX — YouTube ecosystems for B2B. Built with Rust + Leptos."),
        &JsValue::from_str("color: #32f0ff; font-family: monospace;"),
    );
}

#[component]
fn App() -> impl IntoView {
    let root: NodeRef<Div> = NodeRef::new();
    // The reveal handle holds browser resources and is not Send.
    let reveal = StoredValue::new_local(None::<reveal_web::RevealHandle>);

    // Mount hook: arm the reveal animations once the root is in the DOM.
    Effect::new(move || {
        if let Some(element) = root.get() {
            if reveal.with_value(|handle| handle.is_none()) {
                print_console_brand();
                reveal.set_value(Some(reveal_web::mount(&element)));
            }
        }
    });

    // Unmount hook: revert every animation and detach every observer.
    on_cleanup(move || {
        reveal.update_value(|handle| {
            if let Some(mut handle) = handle.take() {
                handle.dispose();
            }
        });
    });

    view! {
        <div class="page" node_ref=root>
            <div class="noise-overlay"></div>
            <div class="vignette-overlay"></div>
            <div class="grid-overlay"></div>
            <Nav />
            <main>
                <Hero />
                <Proof />
                <Process />
                <Offer />
                <CtaBanner />
            </main>
            <Footer />
        </div>
    }
}
