//! Scroll context shared by the navigation bar and the hero
//!
//! Provides:
//! - ScrollContext with the window scroll offset and document scroll progress
//! - One passive window listener feeding both, installed after hydration

use leptos::prelude::*;

/// Reactive window scroll state
#[derive(Clone, Copy)]
pub struct ScrollContext {
    /// Vertical scroll offset in CSS pixels
    pub offset: RwSignal<f64>,
    /// Scrolled fraction of the scrollable height, `0.0..=1.0`
    pub progress: RwSignal<f64>,
}

impl ScrollContext {
    #[cfg(feature = "hydrate")]
    fn sample(&self) {
        use crate::core::scroll_progress;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(offset) = window.scroll_y() else {
            return;
        };
        let Some(root) = window.document().and_then(|d| d.document_element()) else {
            return;
        };
        let progress = scroll_progress(
            offset,
            root.scroll_height() as f64,
            root.client_height() as f64,
        );

        self.offset.set(offset);
        self.progress.set(progress);
    }
}

/// Provide scroll context to the page
pub fn provide_scroll_context() -> ScrollContext {
    let ctx = ScrollContext {
        offset: RwSignal::new(0.0),
        progress: RwSignal::new(0.0),
    };

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };

            let handler = Closure::<dyn Fn()>::new(move || ctx.sample());
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(true);

            for event in ["scroll", "resize"] {
                let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                    event,
                    handler.as_ref().unchecked_ref(),
                    &options,
                );
            }

            // Page may be restored mid-scroll
            ctx.sample();

            // The page lives as long as the tab
            handler.forget();
        });
    }

    provide_context(ctx);

    ctx
}

/// Use scroll context from anywhere below the landing page
pub fn use_scroll_context() -> ScrollContext {
    use_context::<ScrollContext>().unwrap_or_else(|| ScrollContext {
        offset: RwSignal::new(0.0),
        progress: RwSignal::new(0.0),
    })
}
