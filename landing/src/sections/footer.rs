use leptos::prelude::*;

use crate::config::{PRODUCT_NAME, REPO_URL, VERSION};

const PRODUCT_LINKS: &[(&str, &str)] = &[
    ("Features", "#features"),
    ("Plant Diagnosis", "#diagnose"),
    ("How It Works", "#how"),
    ("Technology", "#tech"),
];

const COMMUNITY_LINKS: &[(&str, &str)] = &[
    ("Contribute", "#contribute"),
    ("Documentation", "#docs"),
    ("Community", "#community"),
];

fn link_column(
    title: &'static str,
    links: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4>{title}</h4>
            {links
                .iter()
                .map(|(name, href)| view! { <a href=*href class="footer-link">{*name}</a> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="footer" class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <span class="footer-logo">"🌿"</span>
                        <span class="footer-title">{PRODUCT_NAME}</span>
                        <p class="footer-tagline">"AI-powered insights for every field."</p>
                    </div>
                    {link_column("Product", PRODUCT_LINKS)}
                    {link_column("Community", COMMUNITY_LINKS)}
                    <div class="footer-column">
                        <h4>"Support"</h4>
                        <a href="mailto:support@krish-e.com" class="footer-link">"support@krish-e.com"</a>
                        <a href=REPO_URL target="_blank" rel="noopener noreferrer" class="footer-link">
                            "GitHub"
                        </a>
                    </div>
                </div>
                <p class="footer-copyright">
                    {format!("{PRODUCT_NAME} {VERSION} · Built by the {PRODUCT_NAME} Team (c)2025 · MIT License")}
                </p>
            </div>
        </footer>
    }
}
