use leptos::prelude::*;

/// Decorative line icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon name (file stem under /icons)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Icons used by the page chrome; section icons come from page content
pub mod icons {
    pub const BOT: &str = "bot";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const FILE_QUESTION: &str = "file-question";
}
