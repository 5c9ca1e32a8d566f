//! # Ticket repository on an abstract key-value store
//!
//! [`TicketStore`] keeps every ticket the user created as one JSON array under
//! the [`TICKETS_KEY`] entry of a [`KeyValueStore`]. The same logic runs against
//! the browser's `localStorage` ([`crate::LocalStorageStore`]) and against an
//! in-memory map ([`crate::MemoryStore`]) for native builds and tests.
//!
//! ## [`KeyValueStore`] trait
//!
//! Async `get`, `set` and `remove` over string keys and values. A failed
//! write is returned as [`StoreError::Write`].
//!
//! ## Operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`list_tickets`](TicketStore::list_tickets) | All stored tickets in insertion order. A missing key is an empty list. |
//! | [`get_ticket`](TicketStore::get_ticket) | Look one ticket up by id. |
//! | [`seed_if_empty`](TicketStore::seed_if_empty) | Write the sample record when nothing is stored yet. |
//! | [`create_ticket`](TicketStore::create_ticket) | Validate a [`TicketDraft`], assign a time-based id and append it. |
//! | [`set_status`](TicketStore::set_status) | Move a stored ticket to another status. Unknown ids are left alone. |
//!
//! There is no locking: the last write wins.

use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::models::{Ticket, TicketDraft, TicketStatus};
use crate::seed;

/// Storage key holding the JSON array of tickets.
pub const TICKETS_KEY: &str = "tickets";

/// Async string key-value storage.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>>;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}

/// Ticket persistence backed by a [`KeyValueStore`].
pub struct TicketStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> TicketStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// List all stored tickets in insertion order.
    pub async fn list_tickets(&self) -> Result<Vec<Ticket>, StoreError> {
        match self.kv.get(TICKETS_KEY).await? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    pub async fn get_ticket(&self, id: &str) -> Result<Option<Ticket>, StoreError> {
        Ok(self.list_tickets().await?.into_iter().find(|t| t.id == id))
    }

    async fn save(&self, tickets: &[Ticket]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(tickets)?;
        self.kv.set(TICKETS_KEY, &raw).await
    }

    /// Store the sample ticket if no tickets exist. Returns whether it wrote.
    pub async fn seed_if_empty(&self) -> Result<bool, StoreError> {
        if !self.list_tickets().await?.is_empty() {
            return Ok(false);
        }
        self.save(&[seed::sample_ticket(Utc::now())]).await?;
        tracing::debug!("seeded ticket store with sample record");
        Ok(true)
    }

    /// Validate and append a new ticket.
    ///
    /// Validation runs before any storage access, so an invalid draft never
    /// touches the store.
    pub async fn create_ticket(&self, draft: TicketDraft) -> Result<Ticket, StoreError> {
        self.create_ticket_at(draft, Utc::now()).await
    }

    pub(crate) async fn create_ticket_at(
        &self,
        draft: TicketDraft,
        now: DateTime<Utc>,
    ) -> Result<Ticket, StoreError> {
        draft.validate()?;

        let mut tickets = self.list_tickets().await?;
        let id = next_id(&tickets, now);
        let ticket = draft.into_ticket(id, now);
        tickets.push(ticket.clone());
        self.save(&tickets).await?;

        tracing::info!(id = %ticket.id, title = %ticket.title, "created ticket");
        Ok(ticket)
    }

    /// Change the status of a stored ticket.
    ///
    /// Returns the updated ticket, or `None` if no stored ticket has this id.
    pub async fn set_status(
        &self,
        id: &str,
        status: TicketStatus,
    ) -> Result<Option<Ticket>, StoreError> {
        let mut tickets = self.list_tickets().await?;
        let Some(ticket) = tickets.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        ticket.set_status(status, Utc::now());
        let updated = ticket.clone();
        self.save(&tickets).await?;

        tracing::info!(id, status = %status, "changed ticket status");
        Ok(Some(updated))
    }
}

/// Millisecond timestamp id, bumped past any id already taken.
fn next_id(existing: &[Ticket], now: DateTime<Utc>) -> String {
    let mut candidate = now.timestamp_millis();
    while existing.iter().any(|t| t.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
