use leptos::prelude::*;

const WHAT_YOU_GET: [(&str, &str); 4] = [
    (
        "Compounding System",
        "One good video can bring you qualified leads for months. That's true leverage.",
    ),
    (
        "Niche Authority",
        "You build a channel with niche authority that positions you ahead of competitors.",
    ),
    (
        "Content Library",
        "You create a library of answers to your ideal clients biggest problems that attracts high-intent leads.",
    ),
    (
        "Done-for-you Execution",
        "Script writing, editing, packaging and channel optimization are handled end-to-end so your time investment stays lean.",
    ),
];

/// What-you-get section: the four outcome cards, staggered on entry.
#[component]
pub fn Offer() -> impl IntoView {
    view! {
        <section class="offer container" id="model">
            <div class="offer-intro" data-reveal="">
                <p class="section-eyebrow">"What You Get"</p>
                <h2 class="section-title">
                    "Outcomes that compound, not one-off deliverables."
                </h2>
            </div>
            <div class="offer-grid">
                {WHAT_YOU_GET
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <article class="offer-card" data-card="">
                                <div class="offer-card-icon"></div>
                                <h3 class="offer-card-title">{*title}</h3>
                                <p class="offer-card-body">{*body}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
