use std::str::FromStr;

use dioxus::prelude::*;
use store::{Category, Priority, TicketDraft};

use crate::components::{use_toast, Button, ButtonVariant, Input, Label, Textarea, ToastOptions};
use crate::timing::simulate_latency;
use crate::{make_ticket_store, use_config};

/// Form for submitting a new ticket.
///
/// On success the form is cleared and `on_created` fires after the configured
/// redirect delay. A failed write keeps everything the user entered.
#[component]
pub fn NewTicketView(on_created: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let config = use_config();
    let submit_ms = config.tickets.submit_latency_ms;
    let redirect_ms = config.tickets.redirect_delay_ms;
    let mut draft = use_signal(TicketDraft::default);
    let mut submitting = use_signal(|| false);
    let toast_api = use_toast();

    let _seed = use_resource(move || async move {
        match make_ticket_store().seed_if_empty().await {
            Ok(true) => tracing::info!("seeded ticket store with a sample ticket"),
            Ok(false) => {}
            Err(e) => tracing::warn!("Failed to seed ticket store: {e}"),
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let current = draft();
        if let Err(e) = current.validate() {
            tracing::debug!("ticket form incomplete: {e}");
            toast_api.error(
                "Missing Information. Please fill in all required fields.".to_string(),
                ToastOptions::new(),
            );
            return;
        }

        submitting.set(true);
        spawn(async move {
            simulate_latency(submit_ms).await;
            match make_ticket_store().create_ticket(current).await {
                Ok(ticket) => {
                    toast_api.success(
                        format!("Ticket \"{}\" has been created and is now being processed.", ticket.title),
                        ToastOptions::new(),
                    );
                    draft.set(TicketDraft::default());
                    submitting.set(false);
                    simulate_latency(redirect_ms).await;
                    on_created.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to create ticket: {e}");
                    toast_api.error(
                        "Failed to create ticket. Please try again.".to_string(),
                        ToastOptions::new(),
                    );
                    submitting.set(false);
                }
            }
        });
    };

    let form = draft();
    let busy = submitting();
    let category_value = form.category.map(|c| c.slug()).unwrap_or_default();
    let attachment_names = form.attachments.join(", ");

    rsx! {
        div {
            class: "page-center",
            div {
                class: "card new-ticket",
                div {
                    class: "card__header",
                    h1 { class: "card__title", "Submit a ticket" }
                    p { class: "card__subtitle", "Describe the problem and we will get back to you." }
                }
                form {
                    class: "form card__body",
                    onsubmit: handle_submit,
                    div {
                        class: "form__field",
                        Label { html_for: "title", required: true, "Title" }
                        Input {
                            id: "title",
                            placeholder: "Short summary of the issue",
                            value: form.title.clone(),
                            disabled: busy,
                            oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                        }
                    }
                    div {
                        class: "form__field",
                        Label { html_for: "url", "URL" }
                        Input {
                            id: "url",
                            r#type: "url",
                            placeholder: "https://",
                            value: form.url.clone(),
                            disabled: busy,
                            oninput: move |evt: FormEvent| draft.write().url = evt.value(),
                        }
                    }
                    div {
                        class: "form__field",
                        Label { html_for: "description", required: true, "Description" }
                        Textarea {
                            id: "description",
                            placeholder: "What happened? What did you expect?",
                            value: form.description.clone(),
                            disabled: busy,
                            oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                        }
                    }
                    div {
                        class: "form__row",
                        div {
                            class: "form__field",
                            Label { html_for: "category", required: true, "Category" }
                            select {
                                id: "category",
                                class: "input",
                                value: category_value,
                                disabled: busy,
                                onchange: move |evt: FormEvent| {
                                    draft.write().category = Category::from_str(&evt.value()).ok();
                                },
                                option { value: "", disabled: true, selected: form.category.is_none(), "Select a category" }
                                for category in Category::ALL {
                                    option {
                                        key: "{category.slug()}",
                                        value: category.slug(),
                                        selected: form.category == Some(category),
                                        "{category.label()}"
                                    }
                                }
                            }
                        }
                        div {
                            class: "form__field",
                            Label { html_for: "priority", "Priority" }
                            select {
                                id: "priority",
                                class: "input",
                                value: form.priority.as_str(),
                                disabled: busy,
                                onchange: move |evt: FormEvent| {
                                    if let Ok(priority) = Priority::from_str(&evt.value()) {
                                        draft.write().priority = priority;
                                    }
                                },
                                for priority in Priority::ALL {
                                    option {
                                        key: "{priority.as_str()}",
                                        value: priority.as_str(),
                                        selected: form.priority == priority,
                                        "{priority.label()}"
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "form__row",
                        div {
                            class: "form__field",
                            Label { html_for: "customer", "Contact name" }
                            Input {
                                id: "customer",
                                value: form.customer.clone(),
                                disabled: busy,
                                oninput: move |evt: FormEvent| draft.write().customer = evt.value(),
                            }
                        }
                        div {
                            class: "form__field",
                            Label { html_for: "email", "Contact email" }
                            Input {
                                id: "email",
                                r#type: "email",
                                value: form.email.clone(),
                                disabled: busy,
                                oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                            }
                        }
                    }
                    div {
                        class: "form__field",
                        Label { html_for: "attachments", "Attachments" }
                        input {
                            id: "attachments",
                            class: "input",
                            r#type: "file",
                            multiple: true,
                            disabled: busy,
                            onchange: move |evt: FormEvent| {
                                draft.write().attachments = evt.files().iter().map(|f| f.name()).collect();
                            },
                        }
                        if !form.attachments.is_empty() {
                            p { class: "form__hint", "{attachment_names}" }
                        }
                    }
                    div {
                        class: "form__actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            disabled: busy,
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                        Button {
                            r#type: "submit",
                            disabled: busy,
                            if busy { "Submitting..." } else { "Submit ticket" }
                        }
                    }
                }
            }
        }
    }
}
