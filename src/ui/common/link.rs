use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Call-to-action link styles
#[derive(Clone, Copy, PartialEq)]
pub enum CtaVariant {
    Primary,
    Outline,
    Muted,
}

/// Call-to-action link sizes
#[derive(Clone, Copy, PartialEq)]
pub enum CtaSize {
    Small,
    Large,
    Block,
}

impl CtaVariant {
    fn class(&self) -> &'static str {
        match self {
            CtaVariant::Primary => {
                "bg-pink-600 hover:bg-pink-500 text-white hover:shadow-lg hover:shadow-pink-500/25"
            }
            CtaVariant::Outline => {
                "border border-zinc-700 hover:border-pink-500/50 text-zinc-300 hover:text-white"
            }
            CtaVariant::Muted => {
                "bg-zinc-800 hover:bg-zinc-700 text-zinc-200 border border-zinc-700 hover:border-pink-500/30"
            }
        }
    }
}

impl CtaSize {
    fn class(&self) -> &'static str {
        match self {
            CtaSize::Small => "px-4 py-2 text-sm font-medium",
            CtaSize::Large => "px-8 py-4 text-lg font-semibold",
            CtaSize::Block => "block w-full text-center py-3 text-sm font-semibold",
        }
    }
}

/// Rounded in-page call-to-action link
#[component]
pub fn CtaLink(
    /// Link target, usually a section anchor
    href: &'static str,
    /// Link style
    #[prop(default = CtaVariant::Primary)]
    variant: CtaVariant,
    /// Link size
    #[prop(default = CtaSize::Small)]
    size: CtaSize,
    /// Show a trailing arrow that nudges right on hover
    #[prop(default = false)]
    arrow: bool,
    /// Click handler, e.g. closing the mobile menu
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    /// Link content
    children: Children,
) -> impl IntoView {
    let full_classes = format!(
        "group rounded-full transition-all inline-flex items-center justify-center gap-2 {} {} {}",
        variant.class(),
        size.class(),
        class
    );

    view! {
        <a
            href=href
            class=full_classes
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(())
                }
            }
        >
            {children()}
            {arrow.then(|| view! {
                <Icon name=icons::ARROW_RIGHT class="w-5 h-5 transition-transform group-hover:translate-x-1" />
            })}
        </a>
    }
}

/// Heading text with a gradient accent phrase
#[component]
pub fn AccentHeadline(
    headline: &'static crate::core::content::Headline,
) -> impl IntoView {
    view! {
        {headline.lead.as_str()}
        <span class="gradient-text">{headline.accent.as_str()}</span>
    }
}
