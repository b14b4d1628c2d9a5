use super::CALENDLY_URL;
use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 3] = [
    ("Why", "#proof"),
    ("Our Approach", "#process"),
    ("What You Get", "#model"),
];

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="nav container">
                <a href="#" class="nav-brand">"APPROX"</a>
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a href=*href class="nav-link">
                                    {*label}
                                    <span class="nav-link-underline"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <a href=CALENDLY_URL target="_blank" rel="noreferrer" class="nav-cta">
                    "Book a Call"
                    <span class="nav-cta-arrow">"→"</span>
                </a>
            </nav>
        </header>
    }
}
