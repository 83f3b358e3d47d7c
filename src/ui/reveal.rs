//! Scroll-triggered entrance animations
//!
//! `RevealSection` owns a one-shot latch armed by an IntersectionObserver.
//! `Reveal` children read the latch from context and move from their hidden
//! pose to the visible pose, staggered by their index.

use leptos::html;
use leptos::prelude::*;

use crate::core::{Choreography, Motion, RevealLatch};

#[derive(Clone, Copy)]
struct RevealContext {
    latch: RwSignal<RevealLatch>,
}

/// Animation parameters of the current page variant
pub fn use_choreography() -> Choreography {
    use_context::<Choreography>().unwrap_or_default()
}

/// Page section that reveals its `Reveal` children once it scrolls into view
#[component]
pub fn RevealSection(
    #[prop(optional)] id: Option<&'static str>,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let latch = RwSignal::new(RevealLatch::default());

    observe_once(node_ref, latch, use_choreography().root_margin());
    provide_context(RevealContext { latch });

    view! {
        <section id=id class=class node_ref=node_ref>
            {children()}
        </section>
    }
}

/// Child of a `RevealSection` animated with `motion` after `index` stagger steps
#[component]
pub fn Reveal(
    #[prop(default = Motion::Fade)] motion: Motion,
    #[prop(default = 0)] index: usize,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    // Outside a section there is nothing to wait for
    let latch: Signal<RevealLatch> = match use_context::<RevealContext>() {
        Some(ctx) => ctx.latch.into(),
        None => Signal::stored(RevealLatch::Static),
    };
    let spec = *use_choreography().motion(motion);

    view! {
        <div class=class data-reveal="" style=move || spec.style(index, latch.get())>
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn observe_once(node_ref: NodeRef<html::Section>, latch: RwSignal<RevealLatch>, root_margin: String) {
    Effect::new(move |armed: Option<bool>| {
        if armed == Some(true) {
            return true;
        }
        let Some(section) = node_ref.get() else {
            return false;
        };
        if let Err(reason) = observe(&section, latch, &root_margin) {
            leptos::logging::warn!("scroll reveal unavailable ({reason}), showing content");
            latch.update(|l| {
                l.degrade();
            });
        }
        true
    });
}

#[cfg(not(feature = "hydrate"))]
fn observe_once(_: NodeRef<html::Section>, _: RwSignal<RevealLatch>, _: String) {}

#[cfg(feature = "hydrate")]
fn observe(
    target: &web_sys::Element,
    latch: RwSignal<RevealLatch>,
    root_margin: &str,
) -> Result<(), String> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or("no window")?;
    let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false);
    if !supported {
        return Err("IntersectionObserver is not supported".to_string());
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let hit = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<web_sys::IntersectionObserverEntry>()
                    .is_intersecting()
            });
            latch.maybe_update(|l| l.observe(hit));
            if latch.get_untracked().is_visible() {
                observer.disconnect();
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    let observer =
        web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| format!("{err:?}"))?;
    observer.observe(target);

    // Kept for the lifetime of the page, like the observer it serves
    callback.forget();
    Ok(())
}
