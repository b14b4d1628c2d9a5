use super::CALENDLY_URL;
use leptos::prelude::*;

/// Above-the-fold hero: eyebrow badge, two-line title, supporting copy,
/// call-to-action pair and the intro video. The `data-hero-*` tags are
/// the animation contract; the title lines are the `<span>` children of
/// the tagged heading.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero container" id="top">
            <div class="hero-inner">
                <div class="hero-badge" data-hero-eyebrow="">
                    <span class="hero-badge-dot"></span>
                    <p class="hero-badge-text">
                        "Attention: Consultants, B2B SaaS & Agencies"
                    </p>
                </div>
                <h1 class="hero-title" data-hero-title="">
                    <span class="hero-title-line">"Turn Content Into"</span>
                    <span class="hero-title-line accent">"Inbound Leads"</span>
                </h1>
                <p class="hero-copy" data-hero-copy="">
                    "We help B2B brands scale client acquisition through YouTube ecosystems."
                </p>
                <div class="hero-actions" data-hero-cta="">
                    <a
                        href=CALENDLY_URL
                        target="_blank"
                        rel="noreferrer"
                        class="btn btn-primary"
                    >
                        "Book a Strategy Call"
                        <span class="btn-arrow">"›"</span>
                    </a>
                    <a href="#process" class="btn btn-secondary">
                        "Our Approach"
                    </a>
                </div>
                <div class="hero-video">
                    <iframe
                        src="https://www.youtube.com/embed/T5N0O5B3AP0?si=QatkG0Me0almahRZ"
                        title="YouTube video player"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                        referrerpolicy="strict-origin-when-cross-origin"
                        allowfullscreen=true
                        class="hero-video-frame"
                    ></iframe>
                </div>
            </div>
        </section>
    }
}
