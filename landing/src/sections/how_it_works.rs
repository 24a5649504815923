use leptos::prelude::*;

use crate::config::PRODUCT_NAME;

struct Step {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    details: [&'static str; 4],
}

const STEPS: &[Step] = &[
    Step {
        icon: "👤",
        title: "Sign Up & Profile Setup",
        description: "Create your account and set up your farm profile with location, crop types, and farming preferences.",
        details: [
            "Farm location mapping",
            "Crop history input",
            "Farming goals setting",
            "Preference configuration",
        ],
    },
    Step {
        icon: "⬆",
        title: "Data Input & Integration",
        description: "Upload field images, soil reports, and connect with local weather stations for comprehensive data collection.",
        details: [
            "Soil test results upload",
            "Field photo capture",
            "Weather data sync",
            "Historical data import",
        ],
    },
    Step {
        icon: "🧠",
        title: "AI Analysis & Processing",
        description: "Our advanced AI algorithms analyze your data to generate personalized insights and recommendations.",
        details: [
            "Machine learning analysis",
            "Pattern recognition",
            "Risk assessment",
            "Optimization calculations",
        ],
    },
    Step {
        icon: "💡",
        title: "Personalized Recommendations",
        description: "Receive tailored advice for crop selection, fertilizer application, disease management, and scheduling.",
        details: [
            "Crop recommendations",
            "Fertilizer optimization",
            "Pest management plans",
            "Planting schedules",
        ],
    },
    Step {
        icon: "📊",
        title: "Monitor & Track Progress",
        description: "Track your farm's performance with real-time analytics, yield predictions, and progress monitoring.",
        details: [
            "Performance dashboards",
            "Yield forecasting",
            "Growth tracking",
            "ROI analysis",
        ],
    },
    Step {
        icon: "✅",
        title: "Continuous Improvement",
        description: "Benefit from continuous learning as our AI improves recommendations based on outcomes and new data.",
        details: [
            "Feedback integration",
            "Model refinement",
            "Best practice updates",
            "Community insights",
        ],
    },
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how" class="how">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">{format!("How {PRODUCT_NAME} Works")}</h2>
                    <p class="section-description">
                        "Discover the simple yet powerful workflow that transforms your farming "
                        "operations with AI-driven insights"
                    </p>
                </div>

                <div class="how-steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            // odd rows put the card on the right
                            let row = if i % 2 == 1 { "how-step reveal how-step-flipped" } else { "how-step reveal" };
                            view! {
                                <div class=row>
                                    <div class="how-step-card">
                                        <div class="how-step-head">
                                            <span class="how-step-icon">{step.icon}</span>
                                            <span class="how-step-number">{format!("Step {}", i + 1)}</span>
                                        </div>
                                        <h3 class="how-step-title">{step.title}</h3>
                                        <p class="how-step-description">{step.description}</p>
                                        <ul class="how-step-details">
                                            {step.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
                                        </ul>
                                    </div>
                                    <div class="how-step-marker">{i + 1}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="how-cta reveal">
                    <h3>"Ready to Transform Your Farm?"</h3>
                    <p>"Join thousands of farmers who are already benefiting from AI-powered agricultural insights"</p>
                    <a href="#get-started" class="btn btn-primary">"Get Started Today"</a>
                </div>
            </div>
        </section>
    }
}
