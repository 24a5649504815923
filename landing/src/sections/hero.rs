use leptos::prelude::*;

use super::ask_for_tour;
use crate::config::PRODUCT_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="hero-glow hero-glow-top"></div>
            <div class="hero-glow hero-glow-bottom"></div>
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        "AI-Powered Agricultural Solutions"
                    </div>
                    <h1 class="hero-title">
                        "Meet "
                        <span class="hero-title-accent">{PRODUCT_NAME}</span>
                    </h1>
                    <p class="hero-description">
                        "Your intelligent agricultural companion that revolutionizes farming with "
                        "AI-powered crop recommendations, plant diagnosis, and smart farming solutions."
                    </p>
                    <div class="hero-actions">
                        <a href="#features" class="btn btn-primary">
                            "Explore Features →"
                        </a>
                        <a href="#diagnose" class="btn btn-secondary">
                            "▶ Try Demo"
                        </a>
                        <button class="btn btn-link" on:click=move |_| ask_for_tour()>
                            "Take a Tour"
                        </button>
                    </div>
                    <div class="hero-visual">
                        <img
                            src="https://images.pexels.com/photos/2760847/pexels-photo-2760847.jpeg"
                            alt="Smart farming technology"
                            loading="lazy"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
