use leptos::prelude::*;

const PROCESS_STEPS: [(&str, &str); 3] = [
    (
        "Analyze",
        "We analyze your business, sales process, and ideal customer profile so strategy reflects reality.",
    ),
    (
        "Outline",
        "We define what buyers need at each buying stage and map it into a clear, structured content system.",
    ),
    (
        "Create",
        "We create relevant video assets that educate buyers and support your sales process.",
    ),
];

/// Our-approach section: the three-step method.
#[component]
pub fn Process() -> impl IntoView {
    view! {
        <section class="process container" id="process">
            <div class="process-card" data-reveal="">
                <div class="process-grid">
                    <div class="process-intro">
                        <p class="section-eyebrow">"Our Approach"</p>
                        <h2 class="section-title">"Analyze. Outline. Create."</h2>
                        <p class="section-copy">
                            "We start with business reality, map buyer information needs, and produce content assets that support acquisition and conversion."
                        </p>
                        <div class="process-steps">
                            {PROCESS_STEPS
                                .iter()
                                .enumerate()
                                .map(|(index, (title, description))| {
                                    view! {
                                        <div class="process-step">
                                            <p class="process-step-label">
                                                {format!("{}. {title}", index + 1)}
                                            </p>
                                            <p class="process-step-copy">{*description}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <img
                        src="https://unsplash.com/photos/j8oxkeN1A10/download?force=true&w=1600"
                        alt="Chess pieces on a board representing strategic planning"
                        class="process-image"
                        loading="lazy"
                    />
                </div>
            </div>
        </section>
    }
}
