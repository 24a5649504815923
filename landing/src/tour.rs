//! Guided tour: the step list and the cursor that walks it.
//!
//! The sequencer is plain index arithmetic so it can be tested without a
//! browser. `sections::tour` renders it and wires it to the DOM.

use crate::config::TOUR_SEEN_KEY;
use crate::storage::FlagStore;

/// What a tour button does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TourAction {
    Back,
    Next,
    Skip,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TourButton {
    pub label: &'static str,
    pub action: TourAction,
    pub primary: bool,
}

/// Which side of the target the popover sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Top,
    Bottom,
}

impl Placement {
    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TourStep {
    /// CSS selector of the element the step points at.
    pub target: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub placement: Placement,
    pub buttons: &'static [TourButton],
}

impl TourStep {
    pub fn id(&self) -> String {
        step_id(self.title)
    }
}

/// Lowercase the title and turn every whitespace run into a single `-`.
pub fn step_id(title: &str) -> String {
    let mut id = String::with_capacity(title.len());
    let mut in_space = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_space {
                id.push('-');
            }
            in_space = true;
        } else {
            id.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    id
}

const SKIP: TourButton = TourButton {
    label: "Skip Tour",
    action: TourAction::Skip,
    primary: false,
};
const BACK: TourButton = TourButton {
    label: "Back",
    action: TourAction::Back,
    primary: false,
};
const NEXT: TourButton = TourButton {
    label: "Next",
    action: TourAction::Next,
    primary: true,
};
const FINISH: TourButton = TourButton {
    label: "Finish Tour",
    action: TourAction::Complete,
    primary: true,
};

const FIRST_BUTTONS: &[TourButton] = &[SKIP, NEXT];
const MIDDLE_BUTTONS: &[TourButton] = &[BACK, NEXT];
const LAST_BUTTONS: &[TourButton] = &[BACK, FINISH];

const fn step(
    target: &'static str,
    title: &'static str,
    text: &'static str,
    placement: Placement,
) -> TourStep {
    TourStep {
        target,
        title,
        text,
        placement,
        buttons: MIDDLE_BUTTONS,
    }
}

pub static TOUR_STEPS: [TourStep; 17] = [
    TourStep {
        buttons: FIRST_BUTTONS,
        ..step(
            "#nav",
            "Welcome to KRISH-e!",
            "Let me show you around our AI-powered agricultural platform. This tour will introduce you to all the key features.",
            Placement::Bottom,
        )
    },
    step(
        "#tour-button",
        "Navigation & Tour",
        "This is your main navigation. You can always restart this tour by clicking \"Take a Tour\" here.",
        Placement::Bottom,
    ),
    step(
        "#hero",
        "Hero Section",
        "This is where your agricultural journey begins. Learn about KRISH-e's mission to revolutionize farming with AI.",
        Placement::Bottom,
    ),
    step(
        "#about",
        "About KRISH-e",
        "Discover how KRISH-e combines AI with agricultural expertise to help farmers make data-driven decisions.",
        Placement::Bottom,
    ),
    step(
        "#features",
        "Powerful Features",
        "Explore our comprehensive suite of AI-powered agricultural tools designed to optimize every aspect of farming.",
        Placement::Top,
    ),
    step(
        "#feature-crop",
        "Crop Recommendation",
        "Get AI-powered crop suggestions based on soil conditions, climate data, and market trends.",
        Placement::Top,
    ),
    step(
        "#feature-fertilizer",
        "Fertilizer Optimization",
        "Optimize fertilizer usage with smart recommendations that maximize crop nutrition while minimizing costs.",
        Placement::Top,
    ),
    step(
        "#feature-diagnose",
        "Plant Diagnosis",
        "Use advanced image recognition to identify plant diseases, pests, and nutrient deficiencies instantly.",
        Placement::Top,
    ),
    step(
        "#feature-schedule",
        "Farming Schedule",
        "Plan and optimize your farming activities with intelligent scheduling for maximum efficiency.",
        Placement::Top,
    ),
    step(
        "#feature-assistant",
        "AI Assistant",
        "Get 24/7 support from our agricultural AI chatbot that answers your farming questions instantly.",
        Placement::Top,
    ),
    step(
        "#diagnose",
        "Live Plant Diagnosis Demo",
        "Try our AI-powered plant diagnosis tool! Upload plant images or use sample images to see instant analysis.",
        Placement::Top,
    ),
    step(
        "#screenshots",
        "Screenshots Gallery",
        "See KRISH-e in action across different devices - desktop, tablet, and mobile.",
        Placement::Top,
    ),
    step(
        "#tech",
        "Technology Stack",
        "Learn about the cutting-edge technologies powering KRISH-e's AI capabilities.",
        Placement::Top,
    ),
    step(
        "#how",
        "How It Works",
        "Understand the simple workflow from setup to continuous improvement that makes KRISH-e so effective.",
        Placement::Top,
    ),
    step(
        "#get-started",
        "Get Started",
        "Ready to begin? Here you'll find everything you need to start using KRISH-e in your farming operations.",
        Placement::Top,
    ),
    step(
        "#contribute",
        "Join Our Community",
        "KRISH-e is open source! Contribute to the project and connect with fellow agricultural innovators.",
        Placement::Top,
    ),
    TourStep {
        buttons: LAST_BUTTONS,
        ..step(
            "#footer",
            "Contact & Support",
            "Need help or have questions? Find all our contact information and support resources in the footer.",
            Placement::Top,
        )
    },
];

/// Result of feeding an action to the sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Moved { from: usize, to: usize },
    Stayed,
    Ended,
}

/// Cursor over a fixed step list. `None` means the overlay is down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tour {
    steps: &'static [TourStep],
    cursor: Option<usize>,
}

impl Default for Tour {
    fn default() -> Self {
        Self::new(&TOUR_STEPS)
    }
}

impl Tour {
    pub fn new(steps: &'static [TourStep]) -> Self {
        Self {
            steps,
            cursor: None,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&'static TourStep> {
        let steps = self.steps;
        self.cursor.and_then(|i| steps.get(i))
    }

    /// Show the first step. Restarts from the top if already running.
    pub fn start(&mut self) {
        self.cursor = if self.steps.is_empty() { None } else { Some(0) };
    }

    /// Take the overlay down without going through a button.
    pub fn stop(&mut self) {
        self.cursor = None;
    }

    pub fn apply(&mut self, action: TourAction) -> Transition {
        let Some(at) = self.cursor else {
            return Transition::Stayed;
        };
        let last = self.steps.len().saturating_sub(1);

        match action {
            TourAction::Next if at < last => {
                self.cursor = Some(at + 1);
                Transition::Moved { from: at, to: at + 1 }
            }
            TourAction::Back if at > 0 => {
                self.cursor = Some(at - 1);
                Transition::Moved { from: at, to: at - 1 }
            }
            TourAction::Back => Transition::Stayed,
            TourAction::Next | TourAction::Skip | TourAction::Complete => {
                self.stop();
                Transition::Ended
            }
        }
    }
}

/// Decide whether the tour should start on its own, and mark it seen if so.
///
/// The flag is written before the tour runs, so a visitor who closes the tab
/// mid-tour is not shown it again. A store that cannot be read counts as
/// "not seen"; a failed write is logged and the tour still runs.
pub fn claim_autostart(store: &impl FlagStore) -> bool {
    match store.is_set(TOUR_SEEN_KEY) {
        Ok(true) => return false,
        Ok(false) => {}
        Err(err) => tracing::warn!(%err, "tour flag unreadable, treating as unseen"),
    }
    if let Err(err) = store.set(TOUR_SEEN_KEY) {
        tracing::warn!(%err, "could not persist tour flag");
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LandingError, Result};
    use crate::storage::MemoryFlagStore;
    use pretty_assertions::assert_eq;

    fn running_at(i: usize) -> Tour {
        let mut tour = Tour::default();
        tour.start();
        for _ in 0..i {
            tour.apply(TourAction::Next);
        }
        tour
    }

    #[test]
    fn starts_idle() {
        let tour = Tour::default();
        assert!(!tour.is_running());
        assert_eq!(tour.current(), None);
    }

    #[test]
    fn start_shows_first_step() {
        let mut tour = Tour::default();
        tour.start();
        assert_eq!(tour.cursor(), Some(0));
        assert_eq!(tour.current().map(|s| s.target), Some("#nav"));
    }

    #[test]
    fn next_advances_by_one_everywhere_but_the_end() {
        let last = TOUR_STEPS.len() - 1;
        for i in 0..last {
            let mut tour = running_at(i);
            assert_eq!(
                tour.apply(TourAction::Next),
                Transition::Moved { from: i, to: i + 1 }
            );
            assert_eq!(tour.cursor(), Some(i + 1));
        }
    }

    #[test]
    fn next_on_last_step_completes() {
        let mut tour = running_at(TOUR_STEPS.len() - 1);
        assert_eq!(tour.apply(TourAction::Next), Transition::Ended);
        assert!(!tour.is_running());
    }

    #[test]
    fn back_retreats_by_one_and_stops_at_zero() {
        for i in 1..TOUR_STEPS.len() {
            let mut tour = running_at(i);
            assert_eq!(
                tour.apply(TourAction::Back),
                Transition::Moved { from: i, to: i - 1 }
            );
        }
        let mut tour = running_at(0);
        assert_eq!(tour.apply(TourAction::Back), Transition::Stayed);
        assert_eq!(tour.cursor(), Some(0));
    }

    #[test]
    fn skip_and_complete_tear_down_from_any_step() {
        for action in [TourAction::Skip, TourAction::Complete] {
            for i in 0..TOUR_STEPS.len() {
                let mut tour = running_at(i);
                assert_eq!(tour.apply(action), Transition::Ended);
                assert_eq!(tour.current(), None);
            }
        }
    }

    #[test]
    fn stop_mid_tour_goes_idle_and_start_begins_again() {
        let mut tour = running_at(5);
        tour.stop();
        assert!(!tour.is_running());
        assert_eq!(tour.apply(TourAction::Next), Transition::Stayed);
        tour.start();
        assert_eq!(tour.cursor(), Some(0));
    }

    #[test]
    fn actions_while_idle_do_nothing() {
        let mut tour = Tour::default();
        for action in [
            TourAction::Back,
            TourAction::Next,
            TourAction::Skip,
            TourAction::Complete,
        ] {
            assert_eq!(tour.apply(action), Transition::Stayed);
            assert!(!tour.is_running());
        }
    }

    #[test]
    fn restart_returns_to_first_step() {
        let mut tour = running_at(5);
        tour.start();
        assert_eq!(tour.cursor(), Some(0));
    }

    #[test]
    fn empty_tour_never_runs() {
        static NONE: [TourStep; 0] = [];
        let mut tour = Tour::new(&NONE);
        tour.start();
        assert!(!tour.is_running());
    }

    #[test]
    fn button_sets_follow_position() {
        let first: Vec<_> = TOUR_STEPS[0].buttons.iter().map(|b| b.action).collect();
        assert_eq!(first, vec![TourAction::Skip, TourAction::Next]);

        let last: Vec<_> = TOUR_STEPS[16].buttons.iter().map(|b| b.action).collect();
        assert_eq!(last, vec![TourAction::Back, TourAction::Complete]);

        for step in &TOUR_STEPS[1..16] {
            let actions: Vec<_> = step.buttons.iter().map(|b| b.action).collect();
            assert_eq!(actions, vec![TourAction::Back, TourAction::Next]);
        }
    }

    #[test]
    fn targets_cover_every_section_in_page_order() {
        let targets: Vec<_> = TOUR_STEPS.iter().map(|s| s.target).collect();
        assert_eq!(
            targets,
            vec![
                "#nav",
                "#tour-button",
                "#hero",
                "#about",
                "#features",
                "#feature-crop",
                "#feature-fertilizer",
                "#feature-diagnose",
                "#feature-schedule",
                "#feature-assistant",
                "#diagnose",
                "#screenshots",
                "#tech",
                "#how",
                "#get-started",
                "#contribute",
                "#footer",
            ]
        );
    }

    #[test]
    fn step_ids_are_slugged_titles() {
        assert_eq!(step_id("Welcome to KRISH-e!"), "welcome-to-krish-e!");
        assert_eq!(step_id("Navigation & Tour"), "navigation-&-tour");
        assert_eq!(step_id("How  It\tWorks"), "how-it-works");
        assert_eq!(TOUR_STEPS[10].id(), "live-plant-diagnosis-demo");
    }

    #[test]
    fn autostart_claims_once_per_store() {
        let store = MemoryFlagStore::new();
        assert!(claim_autostart(&store));
        assert!(store.is_set(TOUR_SEEN_KEY).unwrap());
        assert!(!claim_autostart(&store));
        assert!(!claim_autostart(&store));
    }

    #[test]
    fn seen_flag_never_blocks_explicit_start() {
        let store = MemoryFlagStore::new();
        store.set(TOUR_SEEN_KEY).unwrap();
        assert!(!claim_autostart(&store));

        let mut tour = Tour::default();
        tour.start();
        assert!(tour.is_running());
    }

    struct BrokenStore;

    impl FlagStore for BrokenStore {
        fn is_set(&self, _key: &str) -> Result<bool> {
            Err(LandingError::StorageUnavailable)
        }
        fn set(&self, _key: &str) -> Result<()> {
            Err(LandingError::StorageUnavailable)
        }
    }

    #[test]
    fn unavailable_storage_counts_as_unseen() {
        assert!(claim_autostart(&BrokenStore));
    }
}
