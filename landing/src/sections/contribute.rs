use leptos::prelude::*;

use crate::config::{PRODUCT_NAME, REPO_URL};
use crate::reveal::stagger;

const STATS: &[(&str, &str, &str)] = &[
    ("⭐", "2.5K", "GitHub Stars"),
    ("🍴", "468", "Forks"),
    ("👥", "150+", "Contributors"),
    ("🐞", "1.2K", "Issues Resolved"),
];

struct ContributionType {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    ways: [&'static str; 4],
}

const CONTRIBUTION_TYPES: &[ContributionType] = &[
    ContributionType {
        icon: "</>",
        title: "Code Contributions",
        description: "Help improve KRISH-e by contributing new features, optimizations, and enhancements",
        ways: [
            "Feature development",
            "Performance optimization",
            "Code refactoring",
            "Testing improvements",
        ],
    },
    ContributionType {
        icon: "🐞",
        title: "Bug Reports",
        description: "Report issues and help us maintain the quality and reliability of the platform",
        ways: [
            "Issue reporting",
            "Bug reproduction",
            "Testing fixes",
            "Quality assurance",
        ],
    },
    ContributionType {
        icon: "📖",
        title: "Documentation",
        description: "Improve our documentation to help other developers and users understand KRISH-e",
        ways: [
            "API documentation",
            "User guides",
            "Code examples",
            "Tutorials",
        ],
    },
    ContributionType {
        icon: "💬",
        title: "Community Support",
        description: "Help other users by answering questions and sharing your expertise",
        ways: [
            "Forum participation",
            "Issue resolution",
            "Best practices",
            "Knowledge sharing",
        ],
    },
];

const CONTRIBUTE_STEPS: &[(&str, &str)] = &[
    (
        "Fork the Repository",
        "Fork our GitHub repository to create your own copy of the project",
    ),
    (
        "Make Your Changes",
        "Implement your improvements, fix bugs, or add new features",
    ),
    (
        "Submit Pull Request",
        "Submit your changes for review and integration into the main project",
    ),
];

#[component]
pub fn Contribute() -> impl IntoView {
    view! {
        <section id="contribute" class="contribute">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">"Join Our Community"</h2>
                    <p class="section-description">
                        {PRODUCT_NAME}
                        " is an open-source project built by the community, for the community. "
                        "Contribute to the future of AI-powered agriculture."
                    </p>
                </div>

                <div class="contribute-stats">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(i, (icon, value, label))| {
                            view! {
                                <div class="contribute-stat reveal" style=stagger(i)>
                                    <span class="contribute-stat-icon">{*icon}</span>
                                    <span class="contribute-stat-value">{*value}</span>
                                    <span class="contribute-stat-label">{*label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="contribute-grid">
                    {CONTRIBUTION_TYPES
                        .iter()
                        .enumerate()
                        .map(|(i, kind)| {
                            view! {
                                <div class="contribute-card reveal" style=stagger(i)>
                                    <div class="contribute-card-icon">{kind.icon}</div>
                                    <h3>{kind.title}</h3>
                                    <p>{kind.description}</p>
                                    <ul>
                                        {kind.ways.iter().map(|w| view! { <li>{*w}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="contribute-steps reveal">
                    <h3>"Ready to Contribute?"</h3>
                    <p>
                        "Follow these simple steps to start contributing to "
                        {PRODUCT_NAME}
                        " and help build the future of agricultural technology"
                    </p>
                    <ol class="contribute-steps-list">
                        {CONTRIBUTE_STEPS
                            .iter()
                            .enumerate()
                            .map(|(i, (title, text))| {
                                view! {
                                    <li class="contribute-step">
                                        <span class="contribute-step-number">{i + 1}</span>
                                        <h4>{*title}</h4>
                                        <p>{*text}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>

                <div class="contribute-connect reveal">
                    <h3>"Connect with Our Community"</h3>
                    <div class="contribute-links">
                        <a href=REPO_URL target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                            "View on GitHub"
                        </a>
                        <a href="#community" class="btn btn-secondary">"Join Community"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
