//! Landing page sections, in document order

pub mod contact;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod navbar;
pub mod pricing;
pub mod problem;
pub mod styles;
pub mod testimonial;

pub use contact::{Contact, LeadCapture};
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use navbar::Navbar;
pub use pricing::Pricing;
pub use problem::Problem;
pub use styles::LandingStyles;
pub use testimonial::Testimonial;

use leptos::prelude::*;

use crate::core::content::SectionIntro;
use crate::ui::common::AccentHeadline;

/// Eyebrow, heading and optional subtitle opening a section
#[component]
pub fn SectionHeader(intro: &'static SectionIntro) -> impl IntoView {
    view! {
        <p class="text-pink-400 font-mono text-sm uppercase tracking-wider mb-3">
            {intro.eyebrow.as_str()}
        </p>
        <h2 class="text-3xl md:text-5xl font-bold mb-4">
            <AccentHeadline headline=&intro.headline />
        </h2>
        {intro.subtitle.as_deref().map(|subtitle| view! {
            <p class="text-zinc-400 text-lg max-w-2xl mx-auto">{subtitle}</p>
        })}
    }
}
