use leptos::prelude::*;

use crate::core::content::Testimonial as TestimonialContent;
use crate::ui::common::AccentHeadline;
use crate::ui::reveal::{Reveal, RevealSection};

#[component]
pub fn Testimonial(testimonial: &'static TestimonialContent) -> impl IntoView {
    view! {
        <RevealSection class="relative py-24 md:py-32 px-4">
            <div class="absolute inset-0 bg-gradient-to-b from-transparent via-pink-500/[0.02] to-transparent"></div>

            <Reveal class="max-w-4xl mx-auto text-center relative z-10">
                <p class="text-pink-400 font-mono text-sm uppercase tracking-wider mb-8">
                    {testimonial.eyebrow.as_str()}
                </p>

                <div class="relative">
                    <div
                        class="absolute -top-8 left-4 text-8xl text-pink-500/10 font-serif select-none"
                        aria-hidden="true"
                    >
                        "\u{201C}"
                    </div>

                    <blockquote class="text-2xl md:text-4xl font-bold leading-tight mb-8 px-8">
                        <AccentHeadline headline=&testimonial.quote />
                    </blockquote>

                    <div class="flex items-center justify-center gap-4">
                        <div class="w-12 h-12 rounded-full bg-gradient-to-br from-pink-500 to-purple-600 flex items-center justify-center">
                            <span class="text-lg font-bold">{testimonial.initial()}</span>
                        </div>
                        <div class="text-left">
                            <p class="font-semibold">{testimonial.author.as_str()}</p>
                            <p class="text-sm text-zinc-500">{testimonial.role.as_str()}</p>
                        </div>
                    </div>
                </div>

                <Reveal index=2>
                    <p class="text-zinc-600 text-sm mt-8 italic">{testimonial.footnote.as_str()}</p>
                </Reveal>
            </Reveal>
        </RevealSection>
    }
}
