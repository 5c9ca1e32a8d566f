use dioxus::prelude::*;

use store::{Priority, TicketStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "badge badge--neutral",
            BadgeVariant::Info => "badge badge--info",
            BadgeVariant::Success => "badge badge--success",
            BadgeVariant::Warning => "badge badge--warning",
            BadgeVariant::Danger => "badge badge--danger",
        }
    }
}

impl From<Priority> for BadgeVariant {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => BadgeVariant::Success,
            Priority::Medium => BadgeVariant::Warning,
            Priority::High => BadgeVariant::Danger,
        }
    }
}

impl From<TicketStatus> for BadgeVariant {
    fn from(status: TicketStatus) -> Self {
        match status {
            TicketStatus::New => BadgeVariant::Info,
            TicketStatus::Ongoing => BadgeVariant::Warning,
            TicketStatus::Closed => BadgeVariant::Neutral,
        }
    }
}

#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    rsx! {
        span { class: variant.class(), {children} }
    }
}
