// crates/mindgaps-app/src/components/contact.rs
// Contact form with client-side validation and simulated submission

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use mindgaps_core::effects::{REVEAL_TRANSITION, RevealStyle, field_group_class, submit_label};
use mindgaps_core::{ContactForm, ContactFormView, ContactSubmitter, SiteConfig, SubmitOutcome};

use super::notification::use_notifier;
use super::reveal::use_reveal;
use crate::content::SESSION_TYPES;
use crate::scheduler::BrowserScheduler;

#[derive(Clone, Copy)]
struct FormFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    session_type: RwSignal<String>,
    message: RwSignal<String>,
    sending: RwSignal<bool>,
}

impl FormFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            session_type: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
            sending: RwSignal::new(false),
        }
    }

    fn snapshot(&self) -> ContactForm {
        ContactForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            session_type: self.session_type.get_untracked(),
            message: self.message.get_untracked(),
        }
    }
}

impl ContactFormView for FormFields {
    fn set_sending(&self, sending: bool) {
        self.sending.set(sending);
    }

    fn reset(&self) {
        for field in [self.name, self.email, self.session_type, self.message] {
            field.set(String::new());
        }
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let latency = expect_context::<SiteConfig>().contact.submit_latency();
    let notifier = use_notifier().with_value(Clone::clone);
    let fields = FormFields::new();
    let submitter =
        StoredValue::new_local(ContactSubmitter::new(BrowserScheduler, notifier, latency, fields));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = fields.snapshot();
        submitter.with_value(|s| {
            if let Ok(SubmitOutcome::AlreadySending) = s.submit(&form) {
                log::debug!("Contact form already sending");
            }
        });
    };

    let content = NodeRef::<html::Div>::new();
    let revealed = use_reveal(content);
    let sending = fields.sending;

    view! {
        <div
            class="contact-content"
            node_ref=content
            style:opacity=move || RevealStyle::for_state(revealed.get()).opacity
            style:transform=move || RevealStyle::for_state(revealed.get()).transform
            style:transition=REVEAL_TRANSITION
        >
            <div class="contact-info">
                <h2 class="section-title">"Get in Touch"</h2>
                <p>
                    "Taking the first step is often the hardest. Send a message and "
                    "we will find a time that works for you."
                </p>
            </div>
            <form class="contact-form" id="contactForm" on:submit=on_submit>
                <FormGroup label="Name" field_id="name" value=fields.name>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        prop:value=move || fields.name.get()
                        on:input=move |ev| fields.name.set(event_target_value(&ev))
                    />
                </FormGroup>
                <FormGroup label="Email" field_id="email" value=fields.email>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        prop:value=move || fields.email.get()
                        on:input=move |ev| fields.email.set(event_target_value(&ev))
                    />
                </FormGroup>
                <FormGroup label="Session type" field_id="session-type" value=fields.session_type>
                    <select
                        id="session-type"
                        name="session-type"
                        prop:value=move || fields.session_type.get()
                        on:change=move |ev| fields.session_type.set(event_target_value(&ev))
                    >
                        <option value="">"Select a session type"</option>
                        {SESSION_TYPES
                            .iter()
                            .map(|&(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </FormGroup>
                <FormGroup label="Message" field_id="message" value=fields.message>
                    <textarea
                        id="message"
                        name="message"
                        rows="5"
                        prop:value=move || fields.message.get()
                        on:input=move |ev| fields.message.set(event_target_value(&ev))
                    ></textarea>
                </FormGroup>
                <button
                    type="submit"
                    class="btn btn-primary btn-submit"
                    prop:disabled=move || sending.get()
                >
                    {move || submit_label(sending.get())}
                </button>
            </form>
        </div>
    }
}

/// Field wrapper carrying the `focused` / `filled` classes
#[component]
fn FormGroup(
    label: &'static str,
    field_id: &'static str,
    value: RwSignal<String>,
    children: Children,
) -> impl IntoView {
    let (focused, set_focused) = signal(false);

    view! {
        <div
            class=move || field_group_class(focused.get(), !value.get().is_empty())
            on:focusin=move |_| set_focused.set(true)
            on:focusout=move |_| set_focused.set(false)
        >
            <label for=field_id>{label}</label>
            {children()}
        </div>
    }
}
