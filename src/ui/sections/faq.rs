use leptos::prelude::*;

use crate::core::Disclosure;
use crate::core::content::{FaqContent, FaqEntry};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{Reveal, RevealSection};
use crate::ui::sections::SectionHeader;

/// Accordion of questions; every item opens and closes on its own
#[component]
pub fn Faq(faq: &'static FaqContent) -> impl IntoView {
    view! {
        <RevealSection id="faq" class="relative py-24 md:py-32 px-4">
            <div class="max-w-3xl mx-auto">
                <Reveal class="text-center mb-12">
                    <SectionHeader intro=&faq.intro />
                </Reveal>

                <div class="space-y-3">
                    {faq
                        .items
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| view! { <FaqItem entry=entry index={i + 1} /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(entry: &'static FaqEntry, index: usize) -> impl IntoView {
    let state = RwSignal::new(Disclosure::default());
    let expanded = move || state.get().is_expanded();

    view! {
        <Reveal
            index=index
            class="border border-zinc-800 rounded-xl overflow-hidden hover:border-pink-500/20 transition-colors"
        >
            <button
                class="w-full flex items-center justify-between p-5 text-left hover:bg-zinc-900/50 transition-colors"
                on:click=move |_| state.update(Disclosure::toggle)
                aria-expanded=move || expanded().to_string()
            >
                <span class="font-semibold pr-4">{entry.question.as_str()}</span>
                <div
                    class="shrink-0 transition-transform duration-300"
                    style=move || format!("transform: rotate({}deg);", state.get().indicator_rotation())
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <div
                class="grid transition-all duration-300"
                style=move || state.get().body_style()
                aria-hidden=move || (!expanded()).to_string()
            >
                <div class="overflow-hidden">
                    <p class="px-5 pb-5 text-zinc-400 leading-relaxed">{entry.answer.as_str()}</p>
                </div>
            </div>
        </Reveal>
    }
}
