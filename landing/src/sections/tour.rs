use leptos::ev;
use leptos::prelude::*;

use crate::browser;
use crate::config::{START_TOUR_EVENT, TOUR_AUTOSTART_DELAY};
use crate::storage::LocalFlagStore;
use crate::tour::{Tour, TourAction, Transition, claim_autostart};

/// Click handler body for every "Take a Tour" button.
pub fn ask_for_tour() {
    if let Err(err) = browser::request_tour() {
        tracing::warn!(%err, "could not request tour");
    }
}

/// Onboarding overlay. Listens for the start-tour event and auto-runs once
/// per browser.
#[component]
pub fn GuidedTour() -> impl IntoView {
    let tour = RwSignal::new(Tour::default());
    // false when the current step's target is not on the page
    let anchored = RwSignal::new(true);

    Effect::new(move |prev: Option<Option<&'static str>>| {
        let target = tour.with(|t| t.current().map(|step| step.target));
        let prev = prev.flatten();
        if prev != target {
            if let Some(old) = prev {
                browser::clear_spotlight(old);
            }
            if let Some(new) = target {
                let found = browser::spotlight(new);
                if !found {
                    tracing::warn!(target = new, "tour target not found, centring popover");
                }
                anchored.set(found);
            }
        }
        target
    });

    let press = move |action: TourAction| {
        let moved = tour.try_update(|t| t.apply(action));
        match moved {
            Some(Transition::Moved { from, to }) => tracing::debug!(from, to, "tour step"),
            Some(Transition::Ended) => tracing::info!(?action, "tour ended"),
            _ => {}
        }
    };

    let start = move || {
        if tour.try_update(Tour::start).is_some() {
            tracing::info!("tour started");
        }
    };

    let on_request = window_event_listener_untyped(START_TOUR_EVENT, move |_| start());
    let on_key = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && tour.with_untracked(Tour::is_running) {
            press(TourAction::Skip);
        }
    });
    on_cleanup(move || {
        on_request.remove();
        on_key.remove();
        if let Some(Some(step)) = tour.try_with_untracked(Tour::current) {
            browser::clear_spotlight(step.target);
        }
    });

    if claim_autostart(&LocalFlagStore) {
        tracing::debug!(delay = ?TOUR_AUTOSTART_DELAY, "first visit, tour will start");
        set_timeout(start, TOUR_AUTOSTART_DELAY);
    }

    let popover = move || {
        let (step, index, total) = tour.with(|t| Some((t.current()?, t.cursor()?, t.len())))?;
        let class = if anchored.get() {
            format!("tour-popover tour-popover-{}", step.placement.as_str())
        } else {
            "tour-popover tour-popover-center".to_string()
        };
        let buttons = step
            .buttons
            .iter()
            .map(|button| {
                let action = button.action;
                let class = if button.primary {
                    "tour-btn tour-btn-primary"
                } else {
                    "tour-btn tour-btn-secondary"
                };
                view! {
                    <button class=class on:click=move |_| press(action)>
                        {button.label}
                    </button>
                }
            })
            .collect_view();

        Some(view! {
            <div class=class role="dialog" aria-modal="true" id=step.id()>
                <div class="tour-popover-header">
                    <h3 class="tour-popover-title">{step.title}</h3>
                    <button
                        class="tour-close"
                        aria-label="Close tour"
                        on:click=move |_| press(TourAction::Skip)
                    >
                        "×"
                    </button>
                </div>
                <p class="tour-popover-text">{step.text}</p>
                <div class="tour-popover-footer">
                    <span class="tour-progress">{format!("{} / {}", index + 1, total)}</span>
                    <div class="tour-buttons">{buttons}</div>
                </div>
            </div>
        })
    };

    view! {
        <Show when=move || tour.with(Tour::is_running)>
            <div class="tour-overlay"></div>
            {popover}
        </Show>
    }
}
