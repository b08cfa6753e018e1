//! Contact Form Component
//!
//! Controlled name/email/message form. Focus anywhere in the form makes the
//! fox walk; submitting hands off to the context.

use contact_flow::FormField;
use leptos::prelude::*;

use crate::context::use_contact;

#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = use_contact();

    let value_of = move |field: FormField| move || ctx.flow.with(|flow| flow.form().get(field).to_string());
    let on_focus = move |_: web_sys::FocusEvent| ctx.focus();
    let on_blur = move |_: web_sys::FocusEvent| ctx.blur();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };
    let sending = move || ctx.flow.with(|flow| flow.is_sending());
    let label = move || ctx.flow.with(|flow| flow.submit_label());

    view! {
        <form class="contact-form" on:submit=submit>
            <label class="contact-label">
                "Name"
                <input
                    type="text"
                    name=FormField::Name.name()
                    placeholder="John Doe"
                    class="input"
                    required
                    prop:value=value_of(FormField::Name)
                    on:input=move |ev| ctx.update_field(FormField::Name, event_target_value(&ev))
                    on:focus=on_focus
                    on:blur=on_blur
                />
            </label>
            <label class="contact-label">
                "Email"
                <input
                    type="email"
                    name=FormField::Email.name()
                    placeholder="john@gm.com"
                    class="input"
                    required
                    prop:value=value_of(FormField::Email)
                    on:input=move |ev| ctx.update_field(FormField::Email, event_target_value(&ev))
                    on:focus=on_focus
                    on:blur=on_blur
                />
            </label>
            <label class="contact-label">
                "Your message"
                <textarea
                    name=FormField::Message.name()
                    rows=4
                    placeholder="Let me know how I can help you"
                    class="textarea"
                    required
                    prop:value=value_of(FormField::Message)
                    on:input=move |ev| ctx.update_field(FormField::Message, event_target_value(&ev))
                    on:focus=on_focus
                    on:blur=on_blur
                />
            </label>
            <button
                type="submit"
                class="btn"
                disabled=sending
                on:focus=on_focus
                on:blur=on_blur
            >
                {label}
            </button>
        </form>
    }
}
