use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::config::{APP_CLONE_URL, COPY_FEEDBACK, PRODUCT_NAME};
use crate::reveal::stagger;

struct QuickStart {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
    action: &'static str,
    href: &'static str,
}

const QUICK_START: &[QuickStart] = &[
    QuickStart {
        icon: "🌐",
        title: "Web Application",
        description: "Full-featured web dashboard for comprehensive farm management",
        features: [
            "Complete dashboard",
            "Advanced analytics",
            "Multi-user support",
            "Desktop optimized",
        ],
        action: "Launch Web App",
        href: "#demo",
    },
    QuickStart {
        icon: "📱",
        title: "Mobile App",
        description: "Field-ready mobile application for on-the-go farm management",
        features: [
            "Offline capability",
            "Camera integration",
            "GPS tracking",
            "Field optimized",
        ],
        action: "Download App",
        href: "#mobile",
    },
    QuickStart {
        icon: "</>",
        title: "Developer API",
        description: "Integrate KRISH-e capabilities into your existing systems",
        features: [
            "RESTful API",
            "AI endpoints",
            "Webhook support",
            "Comprehensive docs",
        ],
        action: "View API Docs",
        href: "#api",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    CloneApp,
    Shell(&'static str),
}

impl Command {
    fn line(self) -> String {
        match self {
            Command::CloneApp => format!("git clone {APP_CLONE_URL}"),
            Command::Shell(line) => line.to_string(),
        }
    }
}

/// One copyable installation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InstallStep {
    title: &'static str,
    command: Command,
    description: &'static str,
}

const INSTALL_STEPS: [InstallStep; 4] = [
    InstallStep {
        title: "Clone Repository",
        command: Command::CloneApp,
        description: "Download the KRISH-e application source code",
    },
    InstallStep {
        title: "Install Dependencies",
        command: Command::Shell("npm install"),
        description: "Install all required packages and dependencies",
    },
    InstallStep {
        title: "Environment Setup",
        command: Command::Shell("cp .env.example .env.local"),
        description: "Configure your environment variables",
    },
    InstallStep {
        title: "Start Development",
        command: Command::Shell("npm run dev"),
        description: "Launch the development server",
    },
];

/// (name, description, is_folder)
const PROJECT_TREE: &[(&str, &str, bool)] = &[
    ("src/", "Main application source code", true),
    ("├── components/", "Reusable React components", true),
    ("├── pages/", "Application pages and routes", true),
    ("├── services/", "API services and utilities", true),
    ("├── models/", "AI models and algorithms", true),
    ("├── utils/", "Helper functions and utilities", true),
    ("├── types/", "TypeScript type definitions", true),
    ("└── assets/", "Static assets and images", true),
    ("docs/", "Documentation and guides", true),
    ("tests/", "Test suites and configurations", true),
    ("package.json", "Project dependencies and scripts", false),
    ("README.md", "Project overview and setup guide", false),
];

const REQUIREMENTS: &[(&str, &str)] = &[
    ("Node.js", "Version 16 or higher"),
    ("Memory", "Minimum 4GB RAM"),
    ("Storage", "5GB free space"),
    ("Git", "Latest version"),
];

#[component]
pub fn GetStarted() -> impl IntoView {
    // Index of the step whose command was copied last, while its check mark shows
    let (copied, set_copied) = signal(None::<usize>);

    let copy = move |index: usize| {
        let command = INSTALL_STEPS[index].command.line();
        spawn_local(async move {
            match browser::copy_text(&command).await {
                Ok(()) => {
                    set_copied.set(Some(index));
                    set_timeout(
                        move || {
                            set_copied.update(|c| {
                                if *c == Some(index) {
                                    *c = None;
                                }
                            })
                        },
                        COPY_FEEDBACK,
                    );
                }
                Err(err) => tracing::error!(%err, %command, "failed to copy install command"),
            }
        });
    };

    view! {
        <section id="get-started" class="get-started">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">{format!("Get Started with {PRODUCT_NAME}")}</h2>
                    <p class="section-description">
                        "Choose your preferred way to integrate "
                        {PRODUCT_NAME}
                        " into your farming operations"
                    </p>
                </div>

                <div class="quick-start-grid">
                    {QUICK_START
                        .iter()
                        .enumerate()
                        .map(|(i, option)| {
                            view! {
                                <div class="quick-start-card reveal" style=stagger(i)>
                                    <div class="quick-start-icon">{option.icon}</div>
                                    <h3>{option.title}</h3>
                                    <p>{option.description}</p>
                                    <ul class="quick-start-features">
                                        {option.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                    </ul>
                                    <a href=option.href class="btn btn-primary">{option.action}</a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="install reveal">
                    <h3>"Quick Installation"</h3>
                    <p>{format!("Get {PRODUCT_NAME} running on your local machine in just a few simple steps")}</p>
                    <div class="install-steps">
                        {INSTALL_STEPS
                            .iter()
                            .enumerate()
                            .map(|(i, step)| {
                                view! {
                                    <div class="install-step">
                                        <div class="install-step-number">{i + 1}</div>
                                        <div class="install-step-body">
                                            <h4>{step.title}</h4>
                                            <p>{step.description}</p>
                                            <div class="install-command-box">
                                                <code class="install-cmd">{step.command.line()}</code>
                                                <button
                                                    class="copy-btn"
                                                    aria-label=format!("Copy {}", step.title)
                                                    on:click=move |_| copy(i)
                                                >
                                                    {move || if copied.get() == Some(i) { "✓" } else { "⧉" }}
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="get-started-lower">
                    <div class="project-structure reveal">
                        <h3>"Project Structure"</h3>
                        <p>{format!("Understanding the {PRODUCT_NAME} codebase organization")}</p>
                        <div class="project-tree">
                            {PROJECT_TREE
                                .iter()
                                .map(|(name, description, folder)| {
                                    let icon = if *folder { "📁" } else { "📄" };
                                    view! {
                                        <div class="project-tree-row">
                                            <span class="project-tree-icon">{icon}</span>
                                            <code class="project-tree-name">{*name}</code>
                                            <span class="project-tree-description">{*description}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="project-help">
                            <p>"Need help getting started? Check out our comprehensive documentation"</p>
                            <a href="#docs" class="btn btn-secondary">"View Documentation"</a>
                            <a href="#examples" class="btn btn-secondary">"View Examples"</a>
                        </div>
                    </div>

                    <div class="requirements reveal">
                        <h3>"System Requirements"</h3>
                        {REQUIREMENTS
                            .iter()
                            .map(|(name, need)| {
                                view! {
                                    <div class="requirement">
                                        <span class="requirement-name">{*name}</span>
                                        <span class="requirement-value">{*need}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_step_uses_the_app_repository() {
        assert_eq!(
            INSTALL_STEPS[0].command.line(),
            "git clone https://github.com/krishe-ai/krish-e-app.git"
        );
    }

    #[test]
    fn every_install_step_has_a_command() {
        assert!(INSTALL_STEPS.iter().all(|s| !s.command.line().trim().is_empty()));
    }
}
