use leptos::prelude::*;

use crate::core::content::{Brand, FooterContent};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Footer(brand: &'static Brand, footer: &'static FooterContent) -> impl IntoView {
    view! {
        <footer class="border-t border-zinc-800/50 py-8 px-4">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-4">
                <div class="flex items-center gap-2">
                    <Icon name=icons::BOT class="w-5 h-5" />
                    <span class="text-sm text-zinc-500">
                        "Powered by "
                        <a
                            href=brand.company_url.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-zinc-400 hover:text-pink-400 transition-colors"
                        >
                            {brand.company.as_str()}
                        </a>
                    </span>
                </div>

                <p class="text-sm text-zinc-600 italic">{footer.tagline.as_str()}</p>

                <div class="flex items-center gap-6 text-sm text-zinc-500">
                    {footer
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href.as_str() class="hover:text-pink-400 transition-colors">
                                    {link.label.as_str()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
