use super::CALENDLY_URL;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner container">
                <div class="footer-brand">
                    <p class="footer-logo">"APPROX"</p>
                    <p class="footer-tagline">
                        "YouTube ecosystems for consultants, B2B SaaS companies & agencies."
                    </p>
                </div>
                <div class="footer-links">
                    <a href="#proof" class="footer-link">"Why"</a>
                    <a href="#process" class="footer-link">"Our Approach"</a>
                    <a href="#model" class="footer-link">"What You Get"</a>
                    <a href=CALENDLY_URL target="_blank" rel="noreferrer" class="footer-link">
                        "Book a Call"
                    </a>
                </div>
            </div>
        </footer>
    }
}
