//! Layout pieces shared by the login, signup and password reset pages.

use dioxus::prelude::*;
use store::FlowError;

use crate::components::{Button, ButtonVariant, Input, Label};

/// Centered card with a heading.
#[component]
pub fn AuthCard(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            class: "page-center",
            div {
                class: "card auth-card",
                div {
                    class: "card__header",
                    h1 { class: "card__title", "{title}" }
                    p { class: "card__subtitle", "{subtitle}" }
                }
                div { class: "card__body", {children} }
            }
        }
    }
}

/// Inline error under a form. Offers the reset link when the error suggests it.
#[component]
pub fn FlowErrorBanner(error: FlowError, on_reset: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "form-error",
            role: "alert",
            "{error}"
            if error.suggests_reset() {
                if let Some(handler) = on_reset {
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| handler.call(()),
                        "Reset password"
                    }
                }
            }
        }
    }
}

/// The second step of every verification: one code field, verify and back.
///
/// `children` renders above the code field for steps that collect more input.
#[component]
pub fn CodeStep(
    code: String,
    pending: bool,
    /// Shown under the field, e.g. where the code was sent.
    hint: String,
    #[props(default = "Verify".to_string())] submit_label: String,
    on_code: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_back: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        form {
            class: "form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            {children}
            div {
                class: "form__field",
                Label { html_for: "otp", required: true, "Verification code" }
                Input {
                    id: "otp",
                    placeholder: "Enter 6-digit code",
                    value: code,
                    maxlength: 6,
                    disabled: pending,
                    oninput: move |evt: FormEvent| on_code.call(evt.value()),
                }
                p { class: "form__hint", "{hint}" }
            }
            Button {
                r#type: "submit",
                class: "btn--block",
                disabled: pending,
                if pending { "Verifying..." } else { "{submit_label}" }
            }
            Button {
                variant: ButtonVariant::Ghost,
                class: "btn--block",
                disabled: pending,
                onclick: move |_| on_back.call(()),
                "Back"
            }
        }
    }
}
