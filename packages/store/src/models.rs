//! # Domain models for support tickets
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Ticket`] | A customer support request as stored under the `tickets` key. Serialised in camelCase with ISO-8601 timestamps. |
//! | [`TicketStatus`] | The closed `new` / `ongoing` / `closed` enumeration that drives the dashboard buckets. |
//! | [`Priority`] | `low` / `medium` / `high`. Sorts by severity. |
//! | [`Category`] | The six categories offered by the creation form, stored as kebab-case slugs. |
//! | [`TicketDraft`] | Unvalidated contents of the creation form. |
//!
//! `updated_at` never precedes `created_at`: it starts equal to it and
//! [`Ticket::set_status`] only ever moves it forward.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DraftError, ParseError};

/// Lifecycle status of a ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    New,
    Ongoing,
    Closed,
}

impl TicketStatus {
    /// Bucket order on the dashboard.
    pub const ALL: [TicketStatus; 3] = [TicketStatus::New, TicketStatus::Ongoing, TicketStatus::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::New => "new",
            TicketStatus::Ongoing => "ongoing",
            TicketStatus::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::New => "New",
            TicketStatus::Ongoing => "Ongoing",
            TicketStatus::Closed => "Closed",
        }
    }

    /// Position in [`TicketStatus::ALL`].
    pub fn index(&self) -> usize {
        match self {
            TicketStatus::New => 0,
            TicketStatus::Ongoing => 1,
            TicketStatus::Closed => 2,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(TicketStatus::New),
            "ongoing" => Ok(TicketStatus::Ongoing),
            "closed" => Ok(TicketStatus::Closed),
            other => Err(ParseError {
                kind: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// Accepts the legacy `"open"` status written by older builds of the
/// creation form and reads it as [`TicketStatus::New`], logging each occurrence.
fn deserialize_status<'de, D>(deserializer: D) -> Result<TicketStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw == "open" {
        tracing::warn!("stored ticket has legacy status \"open\"; reading it as \"new\"");
        return Ok(TicketStatus::New);
    }
    raw.parse().map_err(serde::de::Error::custom)
}

/// Ticket priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Severity rank used when sorting: low < medium < high.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(ParseError {
                kind: "priority",
                value: other.to_string(),
            }),
        }
    }
}

/// Ticket category chosen on the creation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    BugReport,
    FeatureRequest,
    TechnicalIssue,
    AccountProblem,
    BillingInquiry,
    GeneralQuestion,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::BugReport,
        Category::FeatureRequest,
        Category::TechnicalIssue,
        Category::AccountProblem,
        Category::BillingInquiry,
        Category::GeneralQuestion,
    ];

    /// Stored form, e.g. `"bug-report"`.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::BugReport => "bug-report",
            Category::FeatureRequest => "feature-request",
            Category::TechnicalIssue => "technical-issue",
            Category::AccountProblem => "account-problem",
            Category::BillingInquiry => "billing-inquiry",
            Category::GeneralQuestion => "general-question",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::BugReport => "Bug Report",
            Category::FeatureRequest => "Feature Request",
            Category::TechnicalIssue => "Technical Issue",
            Category::AccountProblem => "Account Problem",
            Category::BillingInquiry => "Billing Inquiry",
            Category::GeneralQuestion => "General Question",
        }
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| ParseError {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// A support ticket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub priority: Priority,
    /// File names only; contents are never stored.
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(deserialize_with = "deserialize_status")]
    pub status: TicketStatus,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Move the ticket to `status`, stamping `updated_at`.
    ///
    /// `updated_at` never goes backwards, even if `now` lags behind it.
    pub fn set_status(&mut self, status: TicketStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now.max(self.updated_at);
    }

    /// Every field value in string form, as matched by the dashboard search.
    pub fn field_values(&self) -> Vec<String> {
        let mut values = vec![
            self.id.clone(),
            self.title.clone(),
            self.description.clone(),
            self.priority.to_string(),
            self.status.to_string(),
            self.customer.clone(),
            self.email.clone(),
            self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        ];
        if let Some(url) = &self.url {
            values.push(url.clone());
        }
        if let Some(category) = &self.category {
            values.push(category.slug().to_string());
        }
        if !self.attachments.is_empty() {
            values.push(self.attachments.join(","));
        }
        if let Some(assignee) = &self.assigned_to {
            values.push(assignee.clone());
        }
        values
    }

    /// Case-insensitive substring match against any field value.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.field_values()
            .iter()
            .any(|value| value.to_lowercase().contains(&needle))
    }
}

/// Contents of the new-ticket form before validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketDraft {
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: Option<Category>,
    pub priority: Priority,
    pub customer: String,
    pub email: String,
    pub attachments: Vec<String>,
}

impl TicketDraft {
    /// Check the required fields: title, description and category.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingField("Title"));
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::MissingField("Description"));
        }
        if self.category.is_none() {
            return Err(DraftError::MissingField("Category"));
        }
        Ok(())
    }

    /// Build the stored record. Both timestamps are `now` and the status is `new`.
    pub fn into_ticket(self, id: String, now: DateTime<Utc>) -> Ticket {
        let url = self.url.trim().to_string();
        Ticket {
            id,
            title: self.title.trim().to_string(),
            url: (!url.is_empty()).then_some(url),
            description: self.description.trim().to_string(),
            category: self.category,
            priority: self.priority,
            attachments: self.attachments,
            status: TicketStatus::New,
            customer: self.customer.trim().to_string(),
            email: self.email.trim().to_string(),
            assigned_to: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn ticket() -> Ticket {
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        Ticket {
            id: "T-1".to_string(),
            title: "Login page broken".to_string(),
            url: None,
            description: "Users cannot sign in".to_string(),
            category: Some(Category::BugReport),
            priority: Priority::High,
            attachments: vec![],
            status: TicketStatus::New,
            customer: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            assigned_to: None,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_set_status_stamps_updated_at() {
        let mut t = ticket();
        let before = t.clone();
        let later = t.updated_at + Duration::minutes(5);

        t.set_status(TicketStatus::Ongoing, later);

        assert_eq!(t.status, TicketStatus::Ongoing);
        assert_eq!(t.updated_at, later);
        assert_eq!(t.title, before.title);
        assert_eq!(t.created_at, before.created_at);
    }

    #[test]
    fn test_set_status_never_moves_updated_at_backwards() {
        let mut t = ticket();
        let earlier = t.updated_at - Duration::hours(1);

        t.set_status(TicketStatus::Closed, earlier);

        assert_eq!(t.status, TicketStatus::Closed);
        assert_eq!(t.updated_at, t.created_at);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let t = ticket();
        assert!(t.matches("LOGIN"));
        assert!(t.matches("ada@EXAMPLE"));
        assert!(t.matches("high"));
        assert!(t.matches(""));
        assert!(!t.matches("billing"));
    }

    #[test]
    fn test_serializes_camel_case_iso_dates() {
        let json = serde_json::to_value(ticket()).unwrap();
        assert_eq!(json["createdAt"], "2024-01-15T10:30:00Z");
        assert_eq!(json["category"], "bug-report");
        assert_eq!(json["status"], "new");
        assert!(json.get("assignedTo").is_none());
    }

    #[test]
    fn test_reads_legacy_open_status_as_new() {
        let raw = r#"{
            "id": "1",
            "title": "Sample Bug Report",
            "url": "https://example.com/bug",
            "description": "The page crashes on submit",
            "category": "bug-report",
            "priority": "high",
            "attachments": [],
            "status": "open",
            "createdAt": "2024-03-01T12:00:00.000Z",
            "updatedAt": "2024-03-01T12:00:00.000Z"
        }"#;
        let t: Ticket = serde_json::from_str(raw).unwrap();
        assert_eq!(t.status, TicketStatus::New);
        assert_eq!(t.customer, "");
        assert_eq!(t.url.as_deref(), Some("https://example.com/bug"));
    }

    #[test]
    fn test_rejects_unknown_status() {
        let raw = r#"{"id":"1","title":"t","description":"d","status":"pending",
            "createdAt":"2024-03-01T12:00:00Z","updatedAt":"2024-03-01T12:00:00Z"}"#;
        assert!(serde_json::from_str::<Ticket>(raw).is_err());
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = TicketDraft {
            title: "Crash".to_string(),
            description: "On submit".to_string(),
            category: Some(Category::TechnicalIssue),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());

        draft.category = None;
        assert_eq!(draft.validate(), Err(DraftError::MissingField("Category")));

        draft.title = "   ".to_string();
        assert_eq!(draft.validate(), Err(DraftError::MissingField("Title")));
    }

    #[test]
    fn test_category_slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>(), Ok(category));
        }
        assert!("bug report".parse::<Category>().is_err());
    }
}
