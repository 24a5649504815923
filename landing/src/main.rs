// KRISH-e Landing Page, Leptos 0.8 Edition
// Built by the KRISH-e Team (c)2025

use krishe_landing::{App, telemetry};

fn main() {
    console_error_panic_hook::set_once();
    telemetry::init();
    telemetry::banner();
    tracing::info!(version = krishe_landing::config::VERSION, "mounting landing page");
    leptos::mount::mount_to_body(App);
}
