//! Built-in ticket data.
//!
//! [`sample_ticket`] is the single record written to an empty store.
//! [`mock_tickets`] is the in-memory demo dataset the dashboard shows next to
//! the stored tickets. Mock ids use a `TCK-` prefix so they never collide with
//! the numeric ids of stored tickets.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Category, Priority, Ticket, TicketStatus};

pub fn sample_ticket(now: DateTime<Utc>) -> Ticket {
    Ticket {
        id: "1".to_string(),
        title: "Sample Bug Report".to_string(),
        url: Some("https://example.com/bug".to_string()),
        description: "The page crashes on submit".to_string(),
        category: Some(Category::BugReport),
        priority: Priority::High,
        attachments: Vec::new(),
        status: TicketStatus::New,
        customer: String::new(),
        email: String::new(),
        assigned_to: None,
        created_at: now,
        updated_at: now,
    }
}

// (title, description, status, priority, customer, email, assignee, days ago created, hours since update)
type MockRow = (
    &'static str,
    &'static str,
    TicketStatus,
    Priority,
    &'static str,
    &'static str,
    Option<&'static str>,
    i64,
    i64,
);

const MOCK_ROWS: &[MockRow] = &[
    ("Login page not loading", "The login page shows a blank screen after the latest deploy.", TicketStatus::New, Priority::High, "John Smith", "john.smith@acme.com", None, 1, 2),
    ("Payment declined at checkout", "Card payments are declined although the bank approves them.", TicketStatus::New, Priority::High, "Maria Garcia", "maria@shopfront.io", Some("Alex Chen"), 2, 5),
    ("Export to CSV missing columns", "The monthly export no longer includes the region column.", TicketStatus::New, Priority::Medium, "Liam Johnson", "liam.j@datacorp.com", None, 3, 1),
    ("Request: dark mode", "Several of our staff would like a dark theme for the portal.", TicketStatus::New, Priority::Low, "Emma Wilson", "emma.wilson@brightside.org", None, 4, 30),
    ("Password reset email never arrives", "Reset emails are not delivered to our company domain.", TicketStatus::New, Priority::Medium, "Noah Brown", "noah@northwind.com", None, 5, 12),
    ("Invoice shows wrong VAT rate", "Invoices for EU customers use the domestic VAT rate.", TicketStatus::New, Priority::Medium, "Olivia Davis", "olivia.davis@finhub.eu", None, 6, 48),
    ("Mobile app crashes on launch", "The iOS app closes immediately after the splash screen.", TicketStatus::Ongoing, Priority::High, "James Miller", "j.miller@mobileco.com", Some("Priya Patel"), 2, 3),
    ("Slow dashboard loading", "The analytics dashboard takes over a minute to load.", TicketStatus::Ongoing, Priority::Medium, "Sophia Martinez", "sophia@retailplus.com", Some("Alex Chen"), 7, 20),
    ("SSO integration with Okta", "We need help configuring single sign-on with Okta.", TicketStatus::Ongoing, Priority::Medium, "Benjamin Lee", "ben.lee@enterprise.net", Some("Priya Patel"), 10, 36),
    ("Webhook retries flooding endpoint", "Failed webhooks are retried every second without backoff.", TicketStatus::Ongoing, Priority::High, "Charlotte Taylor", "charlotte@hookly.dev", Some("Sam Rivera"), 3, 6),
    ("Update billing address", "Please change our billing address to the new office.", TicketStatus::Closed, Priority::Low, "Lucas Anderson", "lucas@anderson-design.com", Some("Sam Rivera"), 14, 200),
    ("Duplicate charge refund", "We were charged twice for the March subscription.", TicketStatus::Closed, Priority::High, "Amelia Thomas", "amelia.t@greenleaf.co", Some("Alex Chen"), 20, 300),
    ("How to add team members", "Where can admins invite new team members?", TicketStatus::Closed, Priority::Low, "Henry Jackson", "henry@jacksonlaw.com", None, 12, 250),
    ("API rate limit increase", "Our integration needs a higher API rate limit.", TicketStatus::Closed, Priority::Medium, "Mia White", "mia.white@apiworks.io", Some("Priya Patel"), 25, 400),
];

/// Demo tickets shown on the dashboard, dated relative to `now`.
pub fn mock_tickets(now: DateTime<Utc>) -> Vec<Ticket> {
    MOCK_ROWS
        .iter()
        .enumerate()
        .map(
            |(i, &(title, description, status, priority, customer, email, assignee, days, hours))| {
                let created_at = now - Duration::days(days);
                let updated_at = (created_at + Duration::hours(hours)).min(now).max(created_at);
                Ticket {
                    id: format!("TCK-{}", 1001 + i),
                    title: title.to_string(),
                    url: None,
                    description: description.to_string(),
                    category: None,
                    priority,
                    attachments: Vec::new(),
                    status,
                    customer: customer.to_string(),
                    email: email.to_string(),
                    assigned_to: assignee.map(str::to_string),
                    created_at,
                    updated_at,
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_tickets_are_consistent() {
        let now = Utc::now();
        let tickets = mock_tickets(now);

        assert_eq!(tickets.len(), MOCK_ROWS.len());
        for t in &tickets {
            assert!(t.updated_at >= t.created_at, "{} updated before created", t.id);
            assert!(t.updated_at <= now);
            assert!(t.id.starts_with("TCK-"));
        }
        for status in TicketStatus::ALL {
            assert!(tickets.iter().any(|t| t.status == status));
        }
    }
}
