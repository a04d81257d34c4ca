//! Contact form bound to [`ContactForm`] state.
//!
//! Input events run through the form reducer; submit prevents the browser's
//! navigation, fires the acknowledgment callback once, and stores the reset
//! state. No request is ever made.
//!
//! Without an acknowledgment callback (the static export, where no script
//! runs) the form is rendered inert: a disabled fieldset and a `dialog`
//! method, so pressing "Send Message" can never navigate or hit the host.

use leptos::callback::{Callable, Callback};
use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;

use crate::form::{ContactForm, FormField};
use crate::types::Acknowledgment;

/// Note shown under an inert contact form.
pub const CONTACT_INACTIVE: &str = "This demo form is only active in the live page.";

/// The contact section.
#[component]
pub fn Contact(
    /// Form state, written on every keystroke
    form: RwSignal<ContactForm>,
    /// Invoked exactly once per submission. `None` renders an inert form.
    #[prop(optional_no_strip, into)]
    on_acknowledge: Option<Callback<Acknowledgment>>,
) -> impl IntoView {
    let inert = on_acknowledge.is_none();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(on_acknowledge) = on_acknowledge {
            submit_form(form, on_acknowledge);
        }
    };

    view! {
        <section id="contact" class="section section-narrow reveal">
            <h2 class="section-title">"Contact Me"</h2>
            <form
                class="contact-form"
                method=inert.then_some("dialog")
                on:submit=on_submit
            >
                <fieldset class="contact-fields" disabled=inert>
                    <FieldInput form=form field=FormField::Name input_type="text" />
                    <FieldInput form=form field=FormField::Email input_type="email" />
                    <FieldTextArea form=form field=FormField::Message />
                    <button type="submit" class="contact-submit">"Send Message"</button>
                </fieldset>
                {inert.then(|| view! { <p class="contact-note">{CONTACT_INACTIVE}</p> })}
            </form>
        </section>
    }
}

/// Take the current state through [`ContactForm::submit`]: one acknowledgment
/// out, then the cleared form back into the signal.
fn submit_form(form: RwSignal<ContactForm>, on_acknowledge: Callback<Acknowledgment>) {
    let submission = form.with_untracked(ContactForm::submit);
    on_acknowledge.run(submission.acknowledgment);
    form.set(submission.next);
}

fn edit(form: RwSignal<ContactForm>, field: FormField) -> impl Fn(Event) + 'static {
    move |ev: Event| {
        let value = event_target_value(&ev);
        form.update(|state| *state = std::mem::take(state).with_field(field, value));
    }
}

#[component]
fn FieldInput(
    /// Shared form state
    form: RwSignal<ContactForm>,
    /// Field this input edits
    field: FormField,
    /// HTML `type` attribute
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="contact-input"
            type=input_type
            name=field.as_str()
            placeholder=field.placeholder()
            required=true
            prop:value=move || form.with(|state| state.get(field).to_string())
            on:input=edit(form, field)
        />
    }
}

#[component]
fn FieldTextArea(
    /// Shared form state
    form: RwSignal<ContactForm>,
    /// Field this textarea edits
    field: FormField,
) -> impl IntoView {
    view! {
        <textarea
            class="contact-input"
            name=field.as_str()
            placeholder=field.placeholder()
            rows="5"
            required=true
            prop:value=move || form.with(|state| state.get(field).to_string())
            on:input=edit(form, field)
        ></textarea>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::types::ACKNOWLEDGMENT_TEXT;

    #[test]
    fn submit_acknowledges_once_then_resets() {
        let owner = Owner::new();
        owner.with(|| {
            let filled = ContactForm::default()
                .with_field(FormField::Name, "Alice")
                .with_field(FormField::Email, "a@b.com")
                .with_field(FormField::Message, "Hi");
            let form = RwSignal::new(filled);

            let calls = Arc::new(AtomicUsize::new(0));
            let seen = Arc::clone(&calls);
            let on_acknowledge = Callback::new(move |ack: Acknowledgment| {
                assert_eq!(ack.message(), ACKNOWLEDGMENT_TEXT);
                seen.fetch_add(1, Ordering::SeqCst);
            });

            submit_form(form, on_acknowledge);

            assert_eq!(calls.load(Ordering::SeqCst), 1);
            assert_eq!(form.get_untracked(), ContactForm::default());
        });
    }

    #[test]
    fn submitting_an_empty_form_still_acknowledges() {
        let owner = Owner::new();
        owner.with(|| {
            let form = RwSignal::new(ContactForm::default());
            let calls = Arc::new(AtomicUsize::new(0));
            let seen = Arc::clone(&calls);

            submit_form(
                form,
                Callback::new(move |_: Acknowledgment| {
                    seen.fetch_add(1, Ordering::SeqCst);
                }),
            );
            submit_form(
                form,
                Callback::new({
                    let seen = Arc::clone(&calls);
                    move |_: Acknowledgment| {
                        seen.fetch_add(1, Ordering::SeqCst);
                    }
                }),
            );

            assert_eq!(calls.load(Ordering::SeqCst), 2);
            assert!(form.get_untracked().is_empty());
        });
    }
}
