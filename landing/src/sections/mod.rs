// Landing page sections
// Built by the KRISH-e Team (c)2025

mod about;
mod contribute;
mod diagnose;
mod features;
mod footer;
mod get_started;
mod header;
mod hero;
mod how_it_works;
mod screenshots;
mod tech_stack;
mod tour;

pub use about::About;
pub use contribute::Contribute;
pub use diagnose::Diagnose;
pub use features::Features;
pub use footer::Footer;
pub use get_started::GetStarted;
pub use header::Header;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use screenshots::Screenshots;
pub use tech_stack::TechStack;
pub use tour::{GuidedTour, ask_for_tour};
