use leptos::prelude::*;

use crate::core::content::StepsContent;
use crate::ui::icon::Icon;
use crate::ui::reveal::{Reveal, RevealSection};
use crate::ui::sections::SectionHeader;

/// Numbered onboarding steps joined by a connector line
#[component]
pub fn HowItWorks(steps: &'static StepsContent) -> impl IntoView {
    view! {
        <RevealSection id="how" class="relative py-24 md:py-32 px-4 overflow-hidden">
            <div class="absolute top-1/2 left-0 w-96 h-96 bg-purple-500/5 rounded-full blur-3xl -translate-y-1/2"></div>
            <div class="absolute top-1/2 right-0 w-96 h-96 bg-pink-500/5 rounded-full blur-3xl -translate-y-1/2"></div>

            <div class="max-w-5xl mx-auto relative z-10">
                <Reveal class="text-center mb-16">
                    <SectionHeader intro=&steps.intro />
                </Reveal>

                <div class="space-y-12 md:space-y-0 md:grid md:grid-cols-3 md:gap-8 relative">
                    <div class="hidden md:block absolute top-16 left-[16%] right-[16%] h-px bg-gradient-to-r from-pink-500/30 via-purple-500/30 to-pink-500/30"></div>

                    {steps
                        .items
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <Reveal index={i + 1} class="text-center relative">
                                    <div class="w-32 h-32 mx-auto mb-6 relative transition-transform hover:scale-110">
                                        <div class="absolute inset-0 rounded-full bg-gradient-to-br from-pink-500/20 to-purple-500/20 border border-pink-500/30"></div>
                                        <div class="absolute inset-2 rounded-full bg-zinc-950 flex items-center justify-center">
                                            <div class="text-center">
                                                <span class="text-3xl font-bold gradient-text">
                                                    {step.number.as_str()}
                                                </span>
                                                <Icon name=step.icon.as_str() class="w-6 h-6 mx-auto mt-1" />
                                            </div>
                                        </div>
                                    </div>

                                    <h3 class="text-xl font-bold mb-3">{step.title.as_str()}</h3>
                                    <p class="text-zinc-400 leading-relaxed max-w-sm mx-auto">
                                        {step.description.as_str()}
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
