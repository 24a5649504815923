// KRISH-e Landing Page, Leptos 0.8 Edition
// Built by the KRISH-e Team (c)2025

pub mod browser;
pub mod carousel;
pub mod config;
pub mod diagnose;
pub mod error;
pub mod reveal;
pub mod sections;
pub mod storage;
pub mod telemetry;
pub mod tour;

use leptos::prelude::*;
use reveal::ScrollReveal;
use sections::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="page">
            <Header />
            <main>
                <Hero />
                <About />
                <Features />
                <Diagnose />
                <Screenshots />
                <TechStack />
                <HowItWorks />
                <GetStarted />
                <Contribute />
            </main>
            <Footer />
            <GuidedTour />
            <ScrollReveal />
        </div>
    }
}
