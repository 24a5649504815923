use leptos::ev;
use leptos::prelude::*;

use super::ask_for_tour;
use crate::browser;
use crate::config::{PRODUCT_NAME, SCROLLED_THRESHOLD};

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "#hero"),
    ("About", "#about"),
    ("Features", "#features"),
    ("Demo", "#diagnose"),
    ("How It Works", "#how"),
    ("Get Started", "#get-started"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(browser::scroll_y() > SCROLLED_THRESHOLD);

    let on_scroll = window_event_listener(ev::scroll, move |_| {
        set_scrolled.set(browser::scroll_y() > SCROLLED_THRESHOLD);
    });
    on_cleanup(move || on_scroll.remove());

    view! {
        <header
            id="nav"
            class=move || if scrolled.get() { "header header-scrolled" } else { "header" }
        >
            <div class="container">
                <div class="header-inner">
                    <a href="#hero" class="header-brand">
                        <span class="header-logo">"🌿"</span>
                        <span class="header-title">{PRODUCT_NAME}</span>
                    </a>

                    // Desktop navigation
                    <nav class="header-links">
                        {NAV_ITEMS
                            .iter()
                            .map(|(name, href)| view! { <a href=*href class="header-link">{*name}</a> })
                            .collect_view()}
                        <button id="tour-button" class="btn btn-primary btn-small" on:click=move |_| ask_for_tour()>
                            "Take a Tour"
                        </button>
                    </nav>

                    <button
                        class="header-menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>

                // Mobile navigation
                <Show when=move || menu_open.get()>
                    <nav class="header-mobile">
                        {NAV_ITEMS
                            .iter()
                            .map(|(name, href)| {
                                view! {
                                    <a
                                        href=*href
                                        class="header-mobile-link"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {*name}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <button
                            class="header-mobile-tour"
                            on:click=move |_| {
                                ask_for_tour();
                                set_menu_open.set(false);
                            }
                        >
                            "Take a Tour"
                        </button>
                    </nav>
                </Show>
            </div>
        </header>
    }
}
