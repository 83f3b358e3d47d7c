use std::sync::Arc;

use leptos::prelude::*;

use crate::core::content::ContactContent;
use crate::core::lead::{LeadOutcome, LeadRequest, LeadSink, NoopLeadSink};
use crate::ui::common::AccentHeadline;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{Reveal, RevealSection};

/// Where the contact form sends email addresses
#[derive(Clone)]
pub struct LeadCapture {
    sink: Arc<dyn LeadSink>,
}

impl LeadCapture {
    pub fn new(sink: impl LeadSink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// Hand a submission to the sink, logging the outcome
    pub fn submit(&self, request: &LeadRequest) -> Option<LeadOutcome> {
        match self.sink.submit(request) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                leptos::logging::error!("Failed to submit lead: {}", e);
                None
            }
        }
    }
}

impl Default for LeadCapture {
    fn default() -> Self {
        Self::new(NoopLeadSink)
    }
}

/// Use the lead capture provided by the page, or drop submissions
pub fn use_lead_capture() -> LeadCapture {
    use_context::<LeadCapture>().unwrap_or_default()
}

/// Closing call to action with the email capture form
#[component]
pub fn Contact(contact: &'static ContactContent, variant: &'static str) -> impl IntoView {
    let capture = use_lead_capture();
    let email = RwSignal::new(String::new());

    let on_submit = move |_| {
        let request = LeadRequest {
            email: email.get_untracked(),
            variant: variant.to_string(),
        };
        capture.submit(&request);
    };

    view! {
        <RevealSection id="contact" class="relative py-24 md:py-32 px-4">
            <div class="absolute inset-0 bg-gradient-to-t from-pink-500/[0.03] to-transparent"></div>
            <div class="absolute top-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-pink-500/30 to-transparent"></div>

            <Reveal class="max-w-3xl mx-auto text-center relative z-10">
                <Icon name=icons::BOT class="w-16 h-16 mx-auto mb-6 pink-glow" />

                <h2 class="text-3xl md:text-5xl font-bold mb-4">
                    <AccentHeadline headline=&contact.headline />
                </h2>
                <p class="text-zinc-400 text-lg mb-10 max-w-xl mx-auto">{contact.body.as_str()}</p>

                <Reveal index=2 class="flex flex-col sm:flex-row gap-3 max-w-md mx-auto mb-6">
                    <input
                        type="email"
                        placeholder=contact.email_placeholder.as_str()
                        aria-label="Email address"
                        class="flex-1 px-5 py-3.5 rounded-full bg-zinc-900 border border-zinc-700 text-white placeholder-zinc-500 focus:outline-none focus:border-pink-500 focus:ring-1 focus:ring-pink-500/50 transition-all"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="px-8 py-3.5 rounded-full bg-pink-600 hover:bg-pink-500 text-white font-semibold transition-all hover:shadow-lg hover:shadow-pink-500/25 flex items-center justify-center gap-2"
                        on:click=on_submit
                    >
                        {contact.submit_label.as_str()}
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                    </button>
                </Reveal>

                <Reveal index=3>
                    <p class="text-zinc-500 text-sm mb-4">
                        {contact.booking_prefix.as_str()}
                        <a
                            href=contact.booking.href.as_str()
                            class="text-pink-400 hover:text-pink-300 underline underline-offset-2 transition-colors"
                        >
                            {contact.booking.label.as_str()}
                        </a>
                        {contact.booking_suffix.as_str()}
                    </p>
                </Reveal>
            </Reveal>
        </RevealSection>
    }
}
