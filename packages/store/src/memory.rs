use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::repo::KeyValueStore;

/// In-memory KeyValueStore for native builds and tests.
///
/// Clones share the same map, so a store handed to a [`crate::TicketStore`]
/// can still be inspected afterwards.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, like a full `localStorage` quota.
    pub fn rejecting_writes() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.reject_writes {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Priority, TicketDraft, TicketStatus};
    use crate::repo::{TicketStore, TICKETS_KEY};
    use chrono::{Duration, TimeZone, Utc};

    fn draft(title: &str) -> TicketDraft {
        TicketDraft {
            title: title.to_string(),
            description: "Something went wrong".to_string(),
            category: Some(Category::BugReport),
            priority: Priority::High,
            attachments: vec!["screenshot.png".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let repo = TicketStore::new(MemoryStore::new());
        assert!(repo.list_tickets().await.unwrap().is_empty());
        assert!(repo.get_ticket("1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_ticket() {
        let store = MemoryStore::new();
        let repo = TicketStore::new(store.clone());

        let ticket = repo.create_ticket(draft("Checkout fails")).await.unwrap();

        assert_eq!(ticket.status, TicketStatus::New);
        assert_eq!(ticket.created_at, ticket.updated_at);
        assert_eq!(ticket.attachments, vec!["screenshot.png".to_string()]);
        assert!(ticket.id.parse::<i64>().is_ok());

        let tickets = repo.list_tickets().await.unwrap();
        assert_eq!(tickets, vec![ticket]);

        // Persisted as a JSON array under the tickets key
        let raw = store.get(TICKETS_KEY).await.unwrap().unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"status\":\"new\""));
    }

    #[tokio::test]
    async fn test_create_appends_in_order_with_unique_ids() {
        let repo = TicketStore::new(MemoryStore::new());
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();

        let first = repo.create_ticket_at(draft("First"), now).await.unwrap();
        let second = repo.create_ticket_at(draft("Second"), now).await.unwrap();

        assert_ne!(first.id, second.id);
        let titles: Vec<_> = repo
            .list_tickets()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_invalid_draft_never_writes() {
        let store = MemoryStore::new();
        let repo = TicketStore::new(store.clone());

        let err = repo.create_ticket(draft("")).await.unwrap_err();

        assert!(matches!(err, StoreError::Invalid(_)));
        assert!(store.get(TICKETS_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_failure_is_reported() {
        let repo = TicketStore::new(MemoryStore::rejecting_writes());

        let err = repo.create_ticket(draft("Lost")).await.unwrap_err();

        assert!(matches!(err, StoreError::Write { .. }));
        assert!(repo.list_tickets().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_if_empty() {
        let repo = TicketStore::new(MemoryStore::new());

        assert!(repo.seed_if_empty().await.unwrap());
        assert!(!repo.seed_if_empty().await.unwrap());

        let tickets = repo.list_tickets().await.unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id, "1");
        assert_eq!(tickets[0].status, TicketStatus::New);
    }

    #[tokio::test]
    async fn test_seed_replaces_empty_array() {
        let store = MemoryStore::new();
        store.set(TICKETS_KEY, "[]").await.unwrap();
        let repo = TicketStore::new(store);

        assert!(repo.seed_if_empty().await.unwrap());
        assert_eq!(repo.list_tickets().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_set_status() {
        let repo = TicketStore::new(MemoryStore::new());
        let past = Utc::now() - Duration::days(1);
        let created = repo.create_ticket_at(draft("Slow page"), past).await.unwrap();

        let updated = repo
            .set_status(&created.id, TicketStatus::Closed)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.status, TicketStatus::Closed);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.created_at, created.created_at);

        let stored = repo.get_ticket(&created.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_set_status_unknown_id() {
        let repo = TicketStore::new(MemoryStore::new());
        repo.create_ticket(draft("Known")).await.unwrap();

        let result = repo.set_status("missing", TicketStatus::Ongoing).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_malformed_data_is_an_error() {
        let store = MemoryStore::new();
        store.set(TICKETS_KEY, "{not json").await.unwrap();
        let repo = TicketStore::new(store);

        assert!(matches!(
            repo.list_tickets().await,
            Err(StoreError::Serialization(_))
        ));
    }
}
