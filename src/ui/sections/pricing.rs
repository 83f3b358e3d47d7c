use leptos::prelude::*;

use crate::core::Motion;
use crate::core::content::{PricingContent, PricingTier};
use crate::ui::common::{CtaLink, CtaSize, CtaVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{Reveal, RevealSection};
use crate::ui::sections::SectionHeader;

/// One-time setup pricing with a highlighted tier
#[component]
pub fn Pricing(pricing: &'static PricingContent, cta_href: &'static str) -> impl IntoView {
    view! {
        <RevealSection id="pricing" class="relative py-24 md:py-32 px-4">
            <div class="absolute top-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-pink-500/30 to-transparent"></div>

            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <SectionHeader intro=&pricing.intro />
                </Reveal>

                <div class="grid md:grid-cols-3 gap-6 md:gap-8">
                    {pricing
                        .tiers
                        .iter()
                        .enumerate()
                        .map(|(i, tier)| {
                            view! {
                                <Reveal
                                    motion=Motion::ScaleIn
                                    index={i + 1}
                                    class=tier_class(tier)
                                >
                                    <PricingCard
                                        tier=tier
                                        price_suffix=pricing.price_suffix.as_str()
                                        cta_href=cta_href
                                    />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

fn tier_class(tier: &PricingTier) -> &'static str {
    if tier.highlighted {
        "relative group rounded-2xl p-8 transition-colors duration-300 bg-gradient-to-b from-pink-500/10 to-purple-500/5 border-2 border-pink-500/30 card-glow"
    } else {
        "relative group rounded-2xl p-8 transition-colors duration-300 bg-zinc-900/50 border border-zinc-800 hover:border-pink-500/20"
    }
}

/// Pricing card body
#[component]
fn PricingCard(
    tier: &'static PricingTier,
    price_suffix: &'static str,
    cta_href: &'static str,
) -> impl IntoView {
    let variant = if tier.highlighted {
        CtaVariant::Primary
    } else {
        CtaVariant::Muted
    };

    view! {
        {tier.highlighted.then(|| view! {
            <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 rounded-full bg-gradient-to-r from-pink-600 to-purple-600 text-xs font-bold uppercase tracking-wider">
                "Most Popular"
            </div>
        })}

        <h3 class="text-xl font-bold mb-2">{tier.name.as_str()}</h3>
        <div class="mb-4">
            <span class="text-4xl font-bold gradient-text">{tier.price.as_str()}</span>
            <span class="text-zinc-500 text-sm ml-2">{price_suffix}</span>
        </div>
        <p class="text-zinc-400 text-sm mb-6">{tier.description.as_str()}</p>

        <ul class="space-y-3 mb-8">
            {tier
                .features
                .iter()
                .map(|feature| {
                    view! {
                        <li class="flex items-start gap-3 text-sm">
                            <Icon name=icons::CHECK class="w-4 h-4 mt-0.5 shrink-0" />
                            <span class="text-zinc-300">{feature.as_str()}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>

        <CtaLink href=cta_href variant=variant size=CtaSize::Block>
            {tier.cta.as_str()}
        </CtaLink>
    }
}
