//! Ticket dashboard: search, per-status tabs, sortable table and pagination.
//!
//! The list is the demo dataset followed by the tickets in the platform store.
//! Everything shown is recomputed from [`DashboardQuery::view`] on each render.

use chrono::Utc;
use dioxus::prelude::*;
use store::{
    BucketView, DashboardQuery, SortConfig, SortKey, StoreError, Ticket, TicketStatus,
};

use super::TicketDetailModal;
use crate::components::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Input, Spinner, ToastOptions,
};
use crate::icons::{FaMagnifyingGlass, FaPlus};
use crate::{make_ticket_store, use_config, Icon, LogoutButton};

const COLUMNS: [SortKey; 4] = [SortKey::Title, SortKey::Customer, SortKey::Priority, SortKey::CreatedAt];

fn short_date(ticket: &Ticket) -> String {
    ticket.created_at.format("%Y-%m-%d").to_string()
}

async fn load_tickets() -> Result<Vec<Ticket>, StoreError> {
    let repo = make_ticket_store();
    repo.seed_if_empty().await?;
    let mut all = store::seed::mock_tickets(Utc::now());
    all.extend(repo.list_tickets().await?);
    Ok(all)
}

#[component]
pub fn DashboardView(on_new_ticket: EventHandler<()>, on_logged_out: EventHandler<()>) -> Element {
    let page_size = use_config().dashboard.page_size;
    let mut tickets = use_signal(Vec::<Ticket>::new);
    let mut loaded = use_signal(|| false);
    let mut query = use_signal(DashboardQuery::default);
    let mut active = use_signal(|| TicketStatus::New);
    let mut selected = use_signal(|| Option::<String>::None);
    let toast_api = use_toast();

    let _loader = use_resource(move || async move {
        match load_tickets().await {
            Ok(all) => {
                tracing::debug!("loaded {} tickets", all.len());
                tickets.set(all);
            }
            Err(e) => {
                tracing::error!("Failed to load tickets: {e}");
                toast_api.error(format!("Failed to load tickets: {e}"), ToastOptions::new());
                tickets.set(store::seed::mock_tickets(Utc::now()));
            }
        }
        loaded.set(true);
    });

    let handle_status_change = move |(id, status): (String, TicketStatus)| {
        if let Some(ticket) = tickets.write().iter_mut().find(|t| t.id == id) {
            ticket.set_status(status, Utc::now());
        }
        tracing::info!(%id, %status, "ticket status changed");
        spawn(async move {
            match make_ticket_store().set_status(&id, status).await {
                Ok(Some(_)) => {}
                Ok(None) => tracing::debug!("{id} is not stored; change kept in memory"),
                Err(e) => {
                    tracing::error!("Failed to save status of {id}: {e}");
                    toast_api.error(format!("Failed to update ticket: {e}"), ToastOptions::new());
                }
            }
        });
    };

    let buckets = query.read().view(&tickets.read(), page_size);
    let sort = query.read().sort();
    let search = query.read().search().to_string();
    let current = active();
    let bucket = buckets[current.index()].clone();
    let detail = selected().and_then(|id| tickets.read().iter().find(|t| t.id == id).cloned());

    rsx! {
        div {
            class: "dashboard",
            header {
                class: "dashboard__header",
                h1 { "Support tickets" }
                div {
                    class: "dashboard__actions",
                    Button {
                        onclick: move |_| on_new_ticket.call(()),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        " New Ticket"
                    }
                    LogoutButton { class: "btn btn--outline", on_logged_out }
                }
            }
            div {
                class: "dashboard__search",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                Input {
                    r#type: "search",
                    placeholder: "Search tickets...",
                    value: search,
                    oninput: move |evt: FormEvent| query.write().set_search(evt.value()),
                }
            }
            nav {
                class: "tabs",
                for view in buckets.iter() {
                    button {
                        key: "{view.status}",
                        class: if view.status == current { "tabs__tab tabs__tab--active" } else { "tabs__tab" },
                        onclick: {
                            let status = view.status;
                            move |_| active.set(status)
                        },
                        "{view.status.label()} "
                        Badge { variant: BadgeVariant::from(view.status), "{view.page.total_items}" }
                    }
                }
            }
            if !loaded() {
                div { class: "page-center", Spinner { label: "Loading tickets..." } }
            } else {
                StatusTable {
                    bucket,
                    sort,
                    on_sort: move |key: SortKey| query.write().sort_by(key),
                    on_select: move |id: String| selected.set(Some(id)),
                    on_previous: move |_| query.write().previous_page(current),
                    on_next: move |total_pages: usize| query.write().next_page(current, total_pages),
                }
            }
            if let Some(ticket) = detail {
                TicketDetailModal {
                    ticket,
                    on_close: move |_| selected.set(None),
                    on_status_change: handle_status_change,
                }
            }
        }
    }
}

/// One status bucket as a table, or the empty state.
#[component]
fn StatusTable(
    bucket: BucketView,
    sort: Option<SortConfig>,
    on_sort: EventHandler<SortKey>,
    on_select: EventHandler<String>,
    on_previous: EventHandler<()>,
    /// Receives the bucket's page count.
    on_next: EventHandler<usize>,
) -> Element {
    if bucket.is_empty() {
        return rsx! {
            div { class: "empty-state", "No tickets found" }
        };
    }

    let page = bucket.page;
    let first = page.first_item();
    let last = page.last_item();
    let total_pages = page.total_pages;

    rsx! {
        table {
            class: "ticket-table",
            thead {
                tr {
                    for key in COLUMNS {
                        th {
                            key: "{key.label()}",
                            class: "ticket-table__sortable",
                            onclick: move |_| on_sort.call(key),
                            "{key.label()}"
                            if let Some(config) = sort.filter(|c| c.key == key) {
                                span { class: "ticket-table__arrow", " {config.direction.arrow()}" }
                            }
                        }
                    }
                    th { "Status" }
                }
            }
            tbody {
                for ticket in page.items.iter() {
                    tr {
                        key: "{ticket.id}",
                        class: "ticket-table__row",
                        onclick: {
                            let id = ticket.id.clone();
                            move |_| on_select.call(id.clone())
                        },
                        td { "{ticket.title}" }
                        td { "{ticket.customer}" }
                        td { Badge { variant: BadgeVariant::from(ticket.priority), "{ticket.priority.label()}" } }
                        td { {short_date(ticket)} }
                        td { Badge { variant: BadgeVariant::from(ticket.status), "{ticket.status.label()}" } }
                    }
                }
            }
        }
        div {
            class: "pagination",
            span { "Showing {first} to {last} of {page.total_items} entries" }
            div {
                class: "pagination__buttons",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: !page.has_previous(),
                    onclick: move |_| on_previous.call(()),
                    "Previous"
                }
                span { class: "pagination__page", "Page {page.number} of {total_pages}" }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: !page.has_next(),
                    onclick: move |_| on_next.call(total_pages),
                    "Next"
                }
            }
        }
    }
}
