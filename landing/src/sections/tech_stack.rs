use leptos::prelude::*;

use crate::config::PRODUCT_NAME;
use crate::reveal::stagger;

struct TechCategory {
    icon: &'static str,
    category: &'static str,
    items: [(&'static str, &'static str); 4],
}

const TECHNOLOGIES: &[TechCategory] = &[
    TechCategory {
        icon: "🧠",
        category: "Artificial Intelligence",
        items: [
            ("TensorFlow", "Deep learning framework for crop analysis"),
            ("Computer Vision", "Advanced image recognition for plant diagnosis"),
            ("Natural Language Processing", "Intelligent chatbot and query processing"),
            ("Machine Learning Models", "Predictive analytics for crop recommendations"),
        ],
    },
    TechCategory {
        icon: "☁",
        category: "Cloud Infrastructure",
        items: [
            ("AWS/Google Cloud", "Scalable cloud computing platform"),
            ("Kubernetes", "Container orchestration for high availability"),
            ("Microservices", "Distributed architecture for reliability"),
            ("CDN", "Global content delivery for fast access"),
        ],
    },
    TechCategory {
        icon: "📱",
        category: "Mobile & Web",
        items: [
            ("React Native", "Cross-platform mobile application"),
            ("Progressive Web App", "Offline-capable web experience"),
            ("React.js", "Modern web interface development"),
            ("TypeScript", "Type-safe application development"),
        ],
    },
    TechCategory {
        icon: "🗄",
        category: "Data & Analytics",
        items: [
            ("PostgreSQL", "Robust relational database system"),
            ("Redis", "High-performance caching layer"),
            ("Apache Kafka", "Real-time data streaming platform"),
            ("Data Lakes", "Massive agricultural data storage"),
        ],
    },
    TechCategory {
        icon: "🛡",
        category: "Security & Privacy",
        items: [
            ("OAuth 2.0", "Secure user authentication system"),
            ("End-to-End Encryption", "Protected data transmission"),
            ("GDPR Compliance", "Privacy regulation adherence"),
            ("Multi-Factor Auth", "Enhanced account security"),
        ],
    },
    TechCategory {
        icon: "⚡",
        category: "Performance",
        items: [
            ("Edge Computing", "Low-latency processing at the edge"),
            ("Caching Strategies", "Optimized data retrieval"),
            ("Load Balancing", "Distributed request handling"),
            ("Real-time Updates", "Live data synchronization"),
        ],
    },
];

#[component]
pub fn TechStack() -> impl IntoView {
    view! {
        <section id="tech" class="tech">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">"Powered by Cutting-Edge Technology"</h2>
                    <p class="section-description">
                        {PRODUCT_NAME}
                        " leverages the latest in AI, cloud computing, and modern web technologies "
                        "to deliver a seamless and powerful agricultural experience"
                    </p>
                </div>

                <div class="tech-grid">
                    {TECHNOLOGIES
                        .iter()
                        .enumerate()
                        .map(|(i, tech)| {
                            view! {
                                <div class="tech-card reveal" style=stagger(i)>
                                    <div class="tech-icon">{tech.icon}</div>
                                    <h3 class="tech-category">{tech.category}</h3>
                                    <div class="tech-items">
                                        {tech
                                            .items
                                            .iter()
                                            .map(|(name, description)| {
                                                view! {
                                                    <div class="tech-item">
                                                        <h4>{*name}</h4>
                                                        <p>{*description}</p>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="tech-banner reveal">
                    <h3>"Built for Scale and Reliability"</h3>
                    <p>
                        "Our robust technology stack ensures "
                        {PRODUCT_NAME}
                        " can handle millions of users while maintaining fast response times and 99.9% uptime"
                    </p>
                </div>
            </div>
        </section>
    }
}
