use dioxus::prelude::*;
use store::{Ticket, TicketStatus};

use super::ModalOverlay;
use crate::components::{Badge, BadgeVariant, Button, ButtonVariant};

fn transition_label(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::New => "Mark as New",
        TicketStatus::Ongoing => "Mark as Ongoing",
        TicketStatus::Closed => "Mark as Closed",
    }
}

fn transition_variant(status: TicketStatus) -> ButtonVariant {
    match status {
        TicketStatus::Closed => ButtonVariant::Outline,
        _ => ButtonVariant::Secondary,
    }
}

/// Read-only ticket details with one button per other status.
#[component]
pub fn TicketDetailModal(
    ticket: Ticket,
    on_close: EventHandler<()>,
    /// Receives the ticket id and the chosen status.
    on_status_change: EventHandler<(String, TicketStatus)>,
) -> Element {
    let targets: Vec<TicketStatus> = TicketStatus::ALL
        .into_iter()
        .filter(|s| *s != ticket.status)
        .collect();
    let created = ticket.created_at.format("%b %-d, %Y %H:%M").to_string();
    let updated = ticket.updated_at.format("%b %-d, %Y %H:%M").to_string();

    rsx! {
        ModalOverlay {
            title: ticket.title.clone(),
            on_close,
            div {
                class: "modal__body",
                div {
                    class: "ticket-meta",
                    Badge { variant: BadgeVariant::from(ticket.status), "{ticket.status.label()}" }
                    Badge { variant: BadgeVariant::from(ticket.priority), "{ticket.priority.label()} priority" }
                    span { class: "ticket-meta__id", "#{ticket.id}" }
                }
                dl {
                    class: "ticket-fields",
                    dt { "Customer" }
                    dd { "{ticket.customer}" }
                    dt { "Email" }
                    dd { "{ticket.email}" }
                    if let Some(category) = ticket.category {
                        dt { "Category" }
                        dd { "{category.label()}" }
                    }
                    if let Some(assignee) = &ticket.assigned_to {
                        dt { "Assigned to" }
                        dd { "{assignee}" }
                    }
                    if let Some(url) = &ticket.url {
                        dt { "URL" }
                        dd {
                            a { href: "{url}", target: "_blank", rel: "noopener", "{url}" }
                        }
                    }
                    dt { "Created" }
                    dd { "{created}" }
                    dt { "Updated" }
                    dd { "{updated}" }
                }
                p { class: "ticket-description", "{ticket.description}" }
                if !ticket.attachments.is_empty() {
                    ul {
                        class: "ticket-attachments",
                        for name in ticket.attachments.iter() {
                            li { key: "{name}", "{name}" }
                        }
                    }
                }
            }
            div {
                class: "modal__footer",
                for status in targets {
                    Button {
                        key: "{status}",
                        variant: transition_variant(status),
                        onclick: {
                            let id = ticket.id.clone();
                            move |_| on_status_change.call((id.clone(), status))
                        },
                        "{transition_label(status)}"
                    }
                }
            }
        }
    }
}
