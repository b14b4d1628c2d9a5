use super::CALENDLY_URL;
use leptos::prelude::*;

/// Closing call-to-action banner.
#[component]
pub fn CtaBanner() -> impl IntoView {
    view! {
        <section class="cta container" id="cta">
            <div class="cta-banner" data-reveal="">
                <p class="section-eyebrow">"Ready to Build Your Content Engine?"</p>
                <h2 class="section-title">
                    "Turn your expertise into a long-term growth asset."
                </h2>
                <a
                    href=CALENDLY_URL
                    target="_blank"
                    rel="noreferrer"
                    class="btn btn-primary"
                >
                    "Book a Call"
                    <span class="btn-arrow">"→"</span>
                </a>
            </div>
        </section>
    }
}
