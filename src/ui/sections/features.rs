use leptos::prelude::*;

use crate::core::Motion;
use crate::core::content::FeaturesContent;
use crate::ui::icon::Icon;
use crate::ui::reveal::{Reveal, RevealSection};
use crate::ui::sections::SectionHeader;

/// Feature grid introduced by a mock of the command center dashboard
#[component]
pub fn Features(features: &'static FeaturesContent, domain: &'static str) -> impl IntoView {
    view! {
        <RevealSection id="features" class="relative py-24 md:py-32 px-4">
            <div class="absolute top-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-pink-500/30 to-transparent"></div>

            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <SectionHeader intro=&features.intro />
                </Reveal>

                <Reveal
                    index=1
                    class="relative mb-16 rounded-2xl overflow-hidden border border-zinc-800 bg-zinc-900/50"
                >
                    <DashboardMockup domain=domain />
                </Reveal>

                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {features
                        .items
                        .iter()
                        .enumerate()
                        .map(|(i, card)| {
                            view! {
                                <Reveal
                                    motion=Motion::ScaleIn
                                    index={i + 2}
                                    class="group relative bg-zinc-900/50 border border-zinc-800 rounded-2xl p-6 card-glow transition-colors duration-300 hover:border-pink-500/30"
                                >
                                    <div class="w-12 h-12 rounded-xl bg-pink-500/10 flex items-center justify-center mb-4 group-hover:bg-pink-500/20 transition-colors">
                                        <Icon name=card.icon.as_str() class="w-6 h-6" />
                                    </div>
                                    <h3 class="text-lg font-bold mb-2">{card.title.as_str()}</h3>
                                    <p class="text-zinc-400 text-sm leading-relaxed">
                                        {card.description.as_str()}
                                    </p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

/// Decorative browser window with placeholder dashboard columns
#[component]
fn DashboardMockup(domain: &'static str) -> impl IntoView {
    view! {
        <div class="aspect-video relative" aria-hidden="true">
            // Browser chrome
            <div class="h-10 bg-zinc-900 border-b border-zinc-800 flex items-center px-4 gap-2">
                <div class="w-3 h-3 rounded-full bg-red-500/70"></div>
                <div class="w-3 h-3 rounded-full bg-yellow-500/70"></div>
                <div class="w-3 h-3 rounded-full bg-green-500/70"></div>
                <div class="flex-1 mx-4">
                    <div class="bg-zinc-800 rounded-md h-6 max-w-md mx-auto flex items-center px-3">
                        <span class="text-xs text-zinc-500 font-mono">{domain}</span>
                    </div>
                </div>
            </div>

            <div class="p-6 grid grid-cols-12 gap-4 h-[calc(100%-40px)]">
                // Sidebar
                <div class="col-span-2 hidden md:flex flex-col gap-3">
                    {(0..6)
                        .map(|i| {
                            let class = if i == 0 {
                                "h-8 rounded-lg bg-pink-500/20 border border-pink-500/30"
                            } else {
                                "h-8 rounded-lg bg-zinc-800/50"
                            };
                            view! { <div class=class></div> }
                        })
                        .collect_view()}
                </div>

                // Board columns, each one card shorter than the last
                <div class="col-span-12 md:col-span-7 flex flex-col gap-3">
                    <div class="h-8 w-48 bg-zinc-800/50 rounded-lg"></div>
                    <div class="flex gap-3 flex-1">
                        {(0..3usize)
                            .map(|column| {
                                let card = if column == 0 {
                                    "h-16 rounded-lg border bg-pink-500/5 border-pink-500/20"
                                } else {
                                    "h-16 rounded-lg border bg-zinc-800/50 border-zinc-700/30"
                                };
                                view! {
                                    <div class="flex-1 bg-zinc-800/30 rounded-xl p-3 flex flex-col gap-2">
                                        <div class="h-4 w-20 bg-zinc-700/50 rounded"></div>
                                        {(0..3 - column)
                                            .map(|_| view! { <div class=card></div> })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                // Right panel
                <div class="col-span-3 hidden md:flex flex-col gap-3">
                    <div class="bg-gradient-to-br from-pink-500/10 to-purple-500/10 rounded-xl p-3 flex-1 border border-pink-500/10">
                        <div class="h-4 w-16 bg-pink-500/20 rounded mb-3"></div>
                        <div class="h-20 bg-zinc-800/30 rounded-lg mb-2"></div>
                        <div class="h-3 w-full bg-zinc-700/30 rounded"></div>
                        <div class="h-3 w-3/4 bg-zinc-700/20 rounded mt-1"></div>
                    </div>
                    <div class="bg-zinc-800/30 rounded-xl p-3 flex-1">
                        <div class="h-4 w-20 bg-zinc-700/50 rounded mb-3"></div>
                        {(0..4)
                            .map(|_| {
                                view! {
                                    <div class="flex items-center gap-2 mb-2">
                                        <div class="w-6 h-6 rounded-full bg-zinc-700/50"></div>
                                        <div class="h-3 flex-1 bg-zinc-700/30 rounded"></div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="absolute bottom-0 left-0 right-0 h-20 bg-gradient-to-t from-zinc-900/80 to-transparent"></div>
        </div>
    }
}
