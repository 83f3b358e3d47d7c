use leptos::prelude::*;

use crate::core::Motion;
use crate::core::content::ProblemContent;
use crate::ui::common::AccentHeadline;
use crate::ui::icon::Icon;
use crate::ui::reveal::{Reveal, RevealSection};

/// "Why the status quo hurts" section with three problem cards
#[component]
pub fn Problem(problem: &'static ProblemContent) -> impl IntoView {
    view! {
        <RevealSection class="relative py-24 md:py-32 px-4">
            <div class="max-w-6xl mx-auto text-center">
                <Reveal>
                    <h2 class="text-3xl md:text-5xl font-bold mb-4">
                        {problem.headline.lead.as_str()}
                        <span class="text-zinc-500">{problem.headline.accent.as_str()}</span>
                    </h2>
                </Reveal>

                <Reveal index=1>
                    <p class="text-zinc-500 text-lg mb-16 max-w-xl mx-auto">
                        {problem.subtitle.as_str()}
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-3 gap-6 md:gap-8 mb-16">
                    {problem
                        .cards
                        .iter()
                        .enumerate()
                        .map(|(i, card)| {
                            view! {
                                <Reveal
                                    motion=Motion::ScaleIn
                                    index=i
                                    class="group relative bg-zinc-900/50 border border-zinc-800 rounded-2xl p-8 card-glow transition-colors duration-300 hover:border-pink-500/30"
                                >
                                    <div class="w-14 h-14 rounded-xl bg-red-500/10 flex items-center justify-center mb-5 mx-auto group-hover:bg-red-500/20 transition-colors">
                                        <Icon name=card.icon.as_str() class="w-7 h-7" />
                                    </div>
                                    <h3 class="text-xl font-bold mb-3">{card.title.as_str()}</h3>
                                    <p class="text-zinc-400 leading-relaxed">{card.description.as_str()}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal index=4 class="relative">
                    <div class="absolute inset-0 bg-gradient-to-r from-transparent via-pink-500/5 to-transparent"></div>
                    <p class="text-2xl md:text-4xl font-bold py-8">
                        <AccentHeadline headline=&problem.closing />
                    </p>
                </Reveal>
            </div>
        </RevealSection>
    }
}
