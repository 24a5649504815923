//! Site-wide configuration.
//!
//! Everything the page needs to know at build time lives here so sections
//! never hardcode timings, keys, or URLs of their own.

use std::time::Duration;

/// Product name as shown in the header, hero, and footer.
pub const PRODUCT_NAME: &str = "KRISH-e";

/// Version string used across the landing page (single source of truth)
pub const VERSION: &str = "v0.3.2";

/// Public source repository.
pub const REPO_URL: &str = "https://github.com/krishe-ai/krish-e";

/// Clone URL shown in the installation guide.
pub const APP_CLONE_URL: &str = "https://github.com/krishe-ai/krish-e-app.git";

/// Local storage key marking that the onboarding tour auto-ran once.
pub const TOUR_SEEN_KEY: &str = "krish-e-tour-seen";

/// Value written under [`TOUR_SEEN_KEY`]. Only presence is checked.
pub const TOUR_SEEN_VALUE: &str = "true";

/// Name of the custom `window` event that requests a tour start.
pub const START_TOUR_EVENT: &str = "startTour";

/// Delay before the first-visit tour starts on its own.
pub const TOUR_AUTOSTART_DELAY: Duration = Duration::from_millis(2000);

/// Simulated analysis time for the canned sample images.
pub const SAMPLE_ANALYSIS_DELAY: Duration = Duration::from_millis(2500);

/// Simulated analysis time for user uploads.
pub const UPLOAD_ANALYSIS_DELAY: Duration = Duration::from_millis(3000);

/// How long a "copied" check mark stays on a copy button.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// Vertical scroll offset (px) after which the header turns opaque.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// CSS class toggled on elements that fade in on scroll.
pub const REVEAL_CLASS: &str = "reveal";

/// Class added once a reveal element has entered the viewport.
pub const REVEAL_VISIBLE_CLASS: &str = "visible";

/// IntersectionObserver threshold for reveal elements.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// IntersectionObserver root margin for reveal elements.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Class applied to the element the tour currently points at.
pub const TOUR_HIGHLIGHT_CLASS: &str = "tour-highlight";

/// Query parameter that overrides the log filter, e.g. `?log=debug`.
pub const LOG_QUERY_PARAM: &str = "log";

/// Log filter used when no override is given.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_delays_match_product_copy() {
        assert_eq!(SAMPLE_ANALYSIS_DELAY.as_millis(), 2500);
        assert_eq!(UPLOAD_ANALYSIS_DELAY.as_millis(), 3000);
        assert!(UPLOAD_ANALYSIS_DELAY > SAMPLE_ANALYSIS_DELAY);
    }

    #[test]
    fn default_filter_is_a_valid_level() {
        assert!(matches!(default_log_filter(), "debug" | "info"));
    }
}
