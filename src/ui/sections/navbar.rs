use leptos::prelude::*;

use crate::core::content::{Brand, NavContent};
use crate::core::{MobileMenu, NavTreatment};
use crate::ui::common::{CtaLink, CtaSize};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::use_choreography;
use crate::ui::scroll::use_scroll_context;

/// Fixed navigation bar with a mobile menu
#[component]
pub fn Navbar(brand: &'static Brand, nav: &'static NavContent) -> impl IntoView {
    let scroll = use_scroll_context();
    let threshold = use_choreography().nav_threshold_px;
    let treatment = Memo::new(move |_| NavTreatment::for_scroll(scroll.offset.get(), threshold));

    let menu = RwSignal::new(MobileMenu::default());
    let is_open = move || menu.get().is_open();
    let close_menu = Callback::new(move |_| menu.update(MobileMenu::follow_link));

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 nav-slide-in {}",
                treatment.get().class(),
            )
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <a href="#" class="flex items-center gap-2 group">
                        <div class="relative">
                            <Icon
                                name=icons::BOT
                                class="w-8 h-8 pink-glow transition-transform group-hover:scale-110"
                            />
                            <div class="absolute inset-0 bg-pink-500/20 blur-xl rounded-full"></div>
                        </div>
                        <span class="text-xl font-bold gradient-text">{brand.name.as_str()}</span>
                    </a>

                    // Desktop links
                    <div class="hidden md:flex items-center gap-8">
                        {nav
                            .links
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href.as_str()
                                        class="text-sm text-zinc-400 hover:text-pink-400 transition-colors"
                                    >
                                        {link.label.as_str()}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <CtaLink href=nav.cta.href.as_str()>{nav.cta.label.as_str()}</CtaLink>
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden text-zinc-400 hover:text-white"
                        on:click=move |_| menu.update(MobileMenu::toggle)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || is_open().to_string()
                    >
                        {move || {
                            if is_open() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            // Mobile menu
            <div
                class="md:hidden overflow-hidden transition-all duration-300 bg-zinc-950/95 backdrop-blur-xl"
                class:max-h-0=move || !is_open()
                class:opacity-0=move || !is_open()
                class:max-h-96=is_open
                class:border-b=is_open
                class:border-zinc-800=is_open
            >
                <div class="px-4 py-4 flex flex-col gap-3">
                    {nav
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.as_str()
                                    class="text-zinc-300 hover:text-pink-400 transition-colors py-2"
                                    on:click=move |_| close_menu.run(())
                                >
                                    {link.label.as_str()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <CtaLink
                        href=nav.cta.href.as_str()
                        size=CtaSize::Block
                        on_click=close_menu
                        class="mt-2"
                    >
                        {nav.cta.label.as_str()}
                    </CtaLink>
                </div>
            </div>
        </nav>
    }
}
