use leptos::prelude::*;

use crate::carousel::{Carousel, Device, SCREENSHOTS};
use crate::config::PRODUCT_NAME;

#[component]
pub fn Screenshots() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(SCREENSHOTS.len()));
    let (device, set_device) = signal(Device::default());

    let active = move || SCREENSHOTS[carousel.with(Carousel::index)];

    view! {
        <section id="screenshots" class="screenshots">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">{format!("See {PRODUCT_NAME} in Action")}</h2>
                    <p class="section-description">
                        "Explore our intuitive interface designed for modern farmers across all devices"
                    </p>
                    <div class="device-toggle">
                        {Device::ALL
                            .into_iter()
                            .map(|d| {
                                view! {
                                    <button
                                        class=move || {
                                            if device.get() == d { "device-btn active" } else { "device-btn" }
                                        }
                                        on:click=move |_| set_device.set(d)
                                    >
                                        {d.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class=move || device.get().frame_class()>
                    <div class="device-bar">
                        {move || {
                            if device.get().has_browser_chrome() {
                                view! {
                                    <div class="browser-chrome">
                                        <span class="terminal-dot red"></span>
                                        <span class="terminal-dot yellow"></span>
                                        <span class="terminal-dot green"></span>
                                        <span class="browser-address">"krish-e.com"</span>
                                    </div>
                                }
                                .into_any()
                            } else {
                                view! { <div class="device-notch"></div> }.into_any()
                            }
                        }}
                    </div>
                    <div class="device-screen">
                        <img src=move || active().url alt=move || active().title />
                        <button
                            class="carousel-arrow carousel-prev"
                            aria-label="Previous screenshot"
                            on:click=move |_| carousel.update(Carousel::prev_slide)
                        >
                            "‹"
                        </button>
                        <button
                            class="carousel-arrow carousel-next"
                            aria-label="Next screenshot"
                            on:click=move |_| carousel.update(Carousel::next_slide)
                        >
                            "›"
                        </button>
                    </div>
                </div>

                <div class="screenshot-info">
                    <h3 class="screenshot-title">{move || active().title}</h3>
                    <p class="screenshot-description">{move || active().description}</p>
                </div>

                <div class="carousel-dots">
                    {(0..SCREENSHOTS.len())
                        .map(|i| {
                            view! {
                                <button
                                    class=move || {
                                        if carousel.with(Carousel::index) == i {
                                            "carousel-dot active"
                                        } else {
                                            "carousel-dot"
                                        }
                                    }
                                    aria-label=format!("Go to screenshot {}", i + 1)
                                    on:click=move |_| carousel.update(|c| c.go_to(i))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
