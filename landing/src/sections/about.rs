use leptos::prelude::*;

use crate::config::PRODUCT_NAME;
use crate::reveal::stagger;

struct Stat {
    icon: &'static str,
    value: &'static str,
    label: &'static str,
    description: &'static str,
}

const STATS: &[Stat] = &[
    Stat {
        icon: "◎",
        value: "95%",
        label: "Accuracy Rate",
        description: "In crop recommendations",
    },
    Stat {
        icon: "👥",
        value: "10K+",
        label: "Active Farmers",
        description: "Trust our platform",
    },
    Stat {
        icon: "🏅",
        value: "50+",
        label: "Crop Varieties",
        description: "Supported by AI",
    },
    Stat {
        icon: "📈",
        value: "30%",
        label: "Yield Increase",
        description: "Average improvement",
    },
];

const MISSION_POINTS: &[&str] = &[
    "Smart crop recommendations based on soil and climate data",
    "AI-powered plant disease detection and treatment",
    "Optimized fertilizer usage for maximum yield",
    "Comprehensive farming schedule management",
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">"Revolutionizing Agriculture with AI"</h2>
                    <p class="section-description">
                        {PRODUCT_NAME}
                        " combines cutting-edge artificial intelligence with deep agricultural knowledge "
                        "to provide farmers with intelligent insights, personalized recommendations, and "
                        "data-driven solutions that maximize crop yield while minimizing resource usage."
                    </p>
                </div>

                <div class="stats-grid">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            view! {
                                <div class="stat-card reveal" style=stagger(i)>
                                    <div class="stat-icon">{stat.icon}</div>
                                    <div class="stat-value">{stat.value}</div>
                                    <div class="stat-label">{stat.label}</div>
                                    <div class="stat-description">{stat.description}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mission reveal">
                    <div class="mission-copy">
                        <h3 class="mission-title">"Our Mission"</h3>
                        <p class="mission-text">
                            "To empower farmers worldwide with intelligent agricultural solutions that increase "
                            "productivity, ensure sustainability, and contribute to global food security through "
                            "the power of artificial intelligence."
                        </p>
                        <ul class="mission-points">
                            {MISSION_POINTS.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                        </ul>
                    </div>
                    <img
                        class="mission-image"
                        src="https://images.pexels.com/photos/1595108/pexels-photo-1595108.jpeg"
                        alt="Modern farming technology"
                        loading="lazy"
                    />
                </div>
            </div>
        </section>
    }
}
