use leptos::prelude::*;

use crate::core::content::HeroContent;
use crate::ui::common::{AccentHeadline, CtaLink, CtaSize, CtaVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::use_choreography;
use crate::ui::scroll::use_scroll_context;

const PARTICLE_COUNT: usize = 20;

/// Floating dot placement, in percent of the hero box and seconds
#[derive(Clone, Copy, Debug, PartialEq)]
struct Particle {
    left: f64,
    top: f64,
    delay: f64,
    duration: f64,
}

impl Particle {
    fn css(&self) -> String {
        format!(
            "left: {:.1}%; top: {:.1}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left, self.top, self.delay, self.duration
        )
    }
}

/// Evenly scattered particles from an additive recurrence
///
/// Server and browser must produce the same markup, so nothing here is random.
fn particles(count: usize) -> Vec<Particle> {
    // Plastic number steps give a well spread 2D sequence
    const STEP_X: f64 = 0.754_877_666_246_692_7;
    const STEP_Y: f64 = 0.569_840_290_998_053_3;
    const STEP_T: f64 = 0.618_033_988_749_894_9;

    (1..=count)
        .map(|i| {
            let i = i as f64;
            let t = (0.5 + STEP_T * i).fract();
            Particle {
                left: (0.5 + STEP_X * i).fract() * 100.0,
                top: (0.5 + STEP_Y * i).fract() * 100.0,
                delay: t * 6.0,
                duration: 4.0 + (1.0 - t) * 4.0,
            }
        })
        .collect()
}

#[component]
fn Particles() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            {particles(PARTICLE_COUNT)
                .into_iter()
                .map(|p| {
                    view! {
                        <div
                            class="absolute w-1 h-1 bg-pink-500/30 rounded-full animate-float"
                            style=p.css()
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Full-height hero that drifts up and fades out as the page scrolls
#[component]
pub fn Hero(hero: &'static HeroContent) -> impl IntoView {
    let scroll = use_scroll_context();
    let parallax = use_choreography().parallax;
    let transform = move || parallax.at(scroll.progress.get()).css();

    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden">
            // Background blobs
            <div class="absolute inset-0" aria-hidden="true">
                <div class="absolute top-1/4 left-1/4 w-72 h-72 bg-pink-500/20 rounded-full blur-3xl animate-blob"></div>
                <div class="absolute top-1/3 right-1/4 w-96 h-96 bg-purple-500/15 rounded-full blur-3xl animate-blob animation-delay-2000"></div>
                <div class="absolute bottom-1/4 left-1/3 w-80 h-80 bg-pink-600/10 rounded-full blur-3xl animate-blob animation-delay-4000"></div>
            </div>

            <div class="absolute inset-0 grid-pattern" aria-hidden="true"></div>

            <Particles />

            <div class="relative z-10 text-center px-4 max-w-5xl mx-auto" style=transform>
                <div class="mb-8 inline-block hero-logo-in">
                    <div class="relative">
                        <Icon name=icons::BOT class="w-20 h-20 mx-auto" />
                        <div class="absolute inset-0 bg-pink-500/30 blur-2xl rounded-full"></div>
                        <div class="absolute -inset-4 bg-pink-500/10 blur-3xl rounded-full animate-pulse-glow"></div>
                    </div>
                </div>

                <p class="text-pink-400 text-sm md:text-base font-mono mb-4 tracking-wider uppercase hero-fade-in hero-delay-300">
                    {hero.tagline.as_str()}
                </p>

                <h1 class="text-4xl sm:text-5xl md:text-7xl font-bold mb-6 leading-tight hero-rise-in hero-delay-500">
                    <AccentHeadline headline=&hero.headline />
                </h1>

                <p class="text-lg md:text-xl text-zinc-400 max-w-3xl mx-auto mb-10 leading-relaxed hero-rise-in hero-delay-800">
                    {hero.subtitle.as_str()}
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 hero-rise-in hero-delay-1100">
                    <CtaLink href=hero.primary_cta.href.as_str() size=CtaSize::Large arrow=true>
                        {hero.primary_cta.label.as_str()}
                    </CtaLink>
                    <CtaLink
                        href=hero.secondary_cta.href.as_str()
                        variant=CtaVariant::Outline
                        size=CtaSize::Large
                    >
                        {hero.secondary_cta.label.as_str()}
                    </CtaLink>
                </div>

                // Scroll indicator
                <div class="absolute bottom-8 left-1/2 -translate-x-1/2 hero-fade-in hero-delay-2000" aria-hidden="true">
                    <div class="w-6 h-10 rounded-full border-2 border-zinc-600 flex items-start justify-center p-1.5 animate-scroll-hint">
                        <div class="w-1.5 h-3 rounded-full bg-pink-500"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particles_are_deterministic() {
        assert_eq!(particles(PARTICLE_COUNT), particles(PARTICLE_COUNT));
        assert_eq!(particles(PARTICLE_COUNT).len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_particles_stay_inside_the_hero() {
        for p in particles(PARTICLE_COUNT) {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.0..6.0).contains(&p.delay));
            assert!(p.duration > 4.0 && p.duration <= 8.0);
        }
    }

    #[test]
    fn test_particles_do_not_pile_up() {
        let dots = particles(PARTICLE_COUNT);
        for (i, a) in dots.iter().enumerate() {
            for b in &dots[i + 1..] {
                let distance = ((a.left - b.left).powi(2) + (a.top - b.top).powi(2)).sqrt();
                assert!(distance > 5.0, "{a:?} and {b:?} overlap");
            }
        }
    }

    #[test]
    fn test_particle_css() {
        let p = Particle {
            left: 12.34,
            top: 50.0,
            delay: 1.5,
            duration: 4.25,
        };
        assert_eq!(
            p.css(),
            "left: 12.3%; top: 50.0%; animation-delay: 1.50s; animation-duration: 4.25s;"
        );
    }
}
