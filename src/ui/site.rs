//! Site settings context
//!
//! The server provides `SiteSettings` from its configuration. In the browser the
//! same values are read back from the `<meta>` tag written by the shell.

use leptos::prelude::*;

use crate::core::SiteSettings;
use crate::core::settings::VARIANT_META;

/// Make the site settings available to the page
pub fn provide_site_settings() -> SiteSettings {
    let settings = match use_context::<SiteSettings>() {
        Some(settings) => settings,
        None => read_settings(),
    };
    provide_context(settings.clone());
    settings
}

/// Use site settings from anywhere below the app root
pub fn use_site_settings() -> SiteSettings {
    use_context::<SiteSettings>().unwrap_or_default()
}

/// `<meta>` tag handing the settings to the browser
#[component]
pub fn SiteSettingsMeta() -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();

    view! { <meta name=VARIANT_META content=settings.default_variant /> }
}

#[cfg(feature = "hydrate")]
fn read_settings() -> SiteSettings {
    let content = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| {
            d.query_selector(&format!("meta[name=\"{VARIANT_META}\"]"))
                .ok()
                .flatten()
        })
        .and_then(|meta| meta.get_attribute("content"));

    SiteSettings::from_meta(content.as_deref())
}

#[cfg(not(feature = "hydrate"))]
fn read_settings() -> SiteSettings {
    SiteSettings::default()
}
