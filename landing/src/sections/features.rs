use leptos::prelude::*;

use crate::config::PRODUCT_NAME;
use crate::reveal::stagger;

#[component]
pub fn Features() -> impl IntoView {
    let description = format!(
        "Discover how {PRODUCT_NAME}'s comprehensive suite of AI-powered tools can transform your agricultural operations"
    );
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">"Powerful Features for Smart Farming"</h2>
                    <p class="section-description">{description}</p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        anchor="feature-crop"
                        index=0
                        icon="🌾"
                        title="Crop Recommendation"
                        description="AI-powered suggestions for optimal crop selection based on soil conditions, climate data, and market trends."
                        benefits=&["Increased yield potential", "Reduced risk", "Market-aligned choices"]
                    />
                    <FeatureCard
                        anchor="feature-fertilizer"
                        index=1
                        icon="⚗"
                        title="Fertilizer Optimization"
                        description="Smart fertilizer recommendations that maximize crop nutrition while minimizing environmental impact and costs."
                        benefits=&["Cost optimization", "Environmental protection", "Enhanced soil health"]
                    />
                    <FeatureCard
                        anchor="feature-diagnose"
                        index=2
                        icon="🔍"
                        title="Plant Diagnosis"
                        description="Advanced image recognition to identify plant diseases, pests, and nutrient deficiencies with instant treatment recommendations."
                        benefits=&["Early detection", "Accurate diagnosis", "Treatment guidance"]
                    />
                    <FeatureCard
                        anchor="feature-schedule"
                        index=3
                        icon="📅"
                        title="Farming Schedule"
                        description="Intelligent scheduling system that optimizes planting, irrigation, fertilization, and harvesting activities."
                        benefits=&["Time optimization", "Resource planning", "Activity coordination"]
                    />
                    <FeatureCard
                        anchor="feature-assistant"
                        index=4
                        icon="💬"
                        title="AI Assistant"
                        description="24/7 agricultural chatbot that answers farming questions and provides personalized guidance and support."
                        benefits=&["Instant support", "Expert knowledge", "Personalized advice"]
                    />
                    <FeatureCard
                        anchor="feature-sustainability"
                        index=5
                        icon="🌿"
                        title="Sustainability Insights"
                        description="Track and improve your farm's environmental impact with actionable sustainability metrics and recommendations."
                        benefits=&["Carbon tracking", "Water conservation", "Biodiversity support"]
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    anchor: &'static str,
    index: usize,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    benefits: &'static [&'static str],
) -> impl IntoView {
    view! {
        <article id=anchor class="feature-card reveal" style=stagger(index)>
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
            <ul class="feature-benefits">
                {benefits.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
            </ul>
            <a href="#diagnose" class="feature-link">"Learn more →"</a>
        </article>
    }
}
