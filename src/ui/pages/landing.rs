//! Landing page component
//!
//! A single template filled from the selected content variant:
//! - Navigation bar that frosts on scroll, with a mobile menu
//! - Hero that drifts and fades as the page scrolls
//! - Problem, features, how-it-works and testimonial sections
//! - Pricing tiers and an FAQ accordion
//! - Contact section with email capture, then the footer
//!
//! Sections reveal their content once, as they first scroll into view.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::core::content::PageContent;
use crate::core::registry;
use crate::core::settings::VARIANT_QUERY;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::provide_scroll_context;
use crate::ui::sections::{
    Contact, Faq, Features, Footer, Hero, HowItWorks, LandingStyles, Navbar, Pricing, Problem,
    Testimonial,
};
use crate::ui::site::use_site_settings;

/// Landing page for the variant picked by `?variant=` or the site default
#[component]
pub fn LandingPage() -> impl IntoView {
    let settings = use_site_settings();
    let query = use_query_map();

    // The variant is fixed for the life of the page
    let requested = query.with_untracked(|q| q.get(VARIANT_QUERY));

    match registry().resolve(requested.as_deref(), &settings.default_variant) {
        Some(content) => view! { <Landing content=content /> }.into_any(),
        None => view! { <ContentUnavailable /> }.into_any(),
    }
}

#[component]
fn Landing(content: &'static PageContent) -> impl IntoView {
    provide_context(content.choreography);
    provide_scroll_context();

    view! {
        <Title text=content.title.as_str() />
        <LandingStyles />

        <main class="relative min-h-screen bg-zinc-950 text-white overflow-x-hidden">
            <Navbar brand=&content.brand nav=&content.nav />
            <Hero hero=&content.hero />
            <Problem problem=&content.problem />
            <Features features=&content.features domain=content.brand.domain.as_str() />
            <HowItWorks steps=&content.steps />
            <Testimonial testimonial=&content.testimonial />
            <Pricing pricing=&content.pricing cta_href=content.nav.cta.href.as_str() />
            <Faq faq=&content.faq />
            <Contact contact=&content.contact variant=content.key.as_str() />
            <Footer brand=&content.brand footer=&content.footer />
        </main>
    }
}

/// Shown when no page content could be loaded
#[component]
fn ContentUnavailable() -> impl IntoView {
    view! {
        <Title text="Temporarily unavailable" />
        <div class="min-h-screen bg-zinc-950 text-white flex flex-col items-center justify-center p-4">
            <Icon name=icons::BOT class="w-16 h-16 mb-6" />
            <h1 class="text-3xl font-bold mb-2">"We'll be right back"</h1>
            <p class="text-zinc-400 max-w-md text-center">
                "This page is being updated. Please check again in a few minutes."
            </p>
        </div>
    }
}
