use leptos::prelude::*;

const BUYER_STATS: [(&str, &str); 3] = [
    ("70%", "of B2B buyer research is done before first contact"),
    ("90%", "of B2B buying journeys begin online"),
    ("75%", "of B2B buyers prefer independent research"),
];

const AUDIENCES: [&str; 3] = [
    "Consultants",
    "B2B SaaS companies",
    "Agencies and expert-led firms",
];

/// Why-section: buyer behavior stats and who the offer is built for.
#[component]
pub fn Proof() -> impl IntoView {
    view! {
        <section class="proof container" id="proof">
            <div class="proof-grid">
                <div class="proof-intro" data-reveal="">
                    <p class="section-eyebrow">"Why?"</p>
                    <h2 class="section-title">
                        "B2B Buyer behavior have changed. Your content strategy should too."
                    </h2>
                    <p class="section-copy">
                        "We design content around how B2B buying decisions are actually made today."
                    </p>
                </div>

                <div class="proof-panels" data-reveal="">
                    <div class="proof-panel">
                        <p class="panel-label">"B2B Market Reality"</p>
                        <div class="stat-grid">
                            {BUYER_STATS
                                .iter()
                                .map(|(value, label)| {
                                    view! {
                                        <div class="stat">
                                            <p class="stat-value">{*value}</p>
                                            <p class="stat-label">{*label}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="proof-panel subtle">
                        <p class="panel-label">"Who We Build For"</p>
                        <ul class="audience-list">
                            {AUDIENCES
                                .iter()
                                .map(|audience| {
                                    view! {
                                        <li class="audience-item">
                                            <span class="audience-dot"></span>
                                            {*audience}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
