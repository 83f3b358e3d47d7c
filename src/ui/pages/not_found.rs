//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::registry;
use crate::ui::icon::{Icon, icons};
use crate::ui::site::use_site_settings;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let settings = use_site_settings();
    let company = registry()
        .resolve(None, &settings.default_variant)
        .map(|content| content.brand.company.as_str());

    // Let the server answer with a real 404
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found" />
        <div class="min-h-screen bg-zinc-950 text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                // 404 icon
                <div class="w-24 h-24 mx-auto mb-6 bg-zinc-900 border border-zinc-800 rounded-full flex items-center justify-center">
                    <Icon name=icons::FILE_QUESTION class="w-12 h-12" />
                </div>

                // Error code
                <h1 class="text-6xl font-bold gradient-text mb-4">"404"</h1>

                // Title
                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>

                // Description
                <p class="text-zinc-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 rounded-full bg-pink-600 hover:bg-pink-500 text-white font-medium transition-colors"
                >
                    "Go Home"
                </A>
            </div>

            // Footer
            {company.map(|company| view! {
                <div class="absolute bottom-8 text-center">
                    <p class="text-sm text-zinc-600">"Powered by " {company}</p>
                </div>
            })}
        </div>
    }
}
