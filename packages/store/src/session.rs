//! The client-side authenticated marker.
//!
//! A [`Session`] is either anonymous or authenticated. It is issued once a
//! login verification succeeds and revoked on logout. The marker is persisted
//! as the value `"true"` under [`AUTH_KEY`]; there is no token and no expiry.

use crate::error::StoreError;
use crate::repo::KeyValueStore;

/// Storage key of the authenticated marker.
pub const AUTH_KEY: &str = "isAuthenticated";

const AUTH_VALUE: &str = "true";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated)
    }
}

/// Reads and writes the [`Session`] marker.
pub struct SessionStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// The persisted session. Any value other than `"true"` counts as anonymous.
    pub async fn current(&self) -> Result<Session, StoreError> {
        Ok(match self.kv.get(AUTH_KEY).await?.as_deref() {
            Some(AUTH_VALUE) => Session::Authenticated,
            _ => Session::Anonymous,
        })
    }

    pub async fn issue(&self) -> Result<Session, StoreError> {
        self.kv.set(AUTH_KEY, AUTH_VALUE).await?;
        tracing::info!("session issued");
        Ok(Session::Authenticated)
    }

    pub async fn revoke(&self) -> Result<Session, StoreError> {
        self.kv.remove(AUTH_KEY).await?;
        tracing::info!("session revoked");
        Ok(Session::Anonymous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[tokio::test]
    async fn test_session_lifecycle() {
        let kv = MemoryStore::new();
        let sessions = SessionStore::new(kv.clone());

        assert_eq!(sessions.current().await.unwrap(), Session::Anonymous);

        assert_eq!(sessions.issue().await.unwrap(), Session::Authenticated);
        assert_eq!(kv.get(AUTH_KEY).await.unwrap().as_deref(), Some("true"));
        assert!(sessions.current().await.unwrap().is_authenticated());

        assert_eq!(sessions.revoke().await.unwrap(), Session::Anonymous);
        assert!(kv.get(AUTH_KEY).await.unwrap().is_none());
        assert!(!sessions.current().await.unwrap().is_authenticated());
    }

    #[tokio::test]
    async fn test_unexpected_marker_is_anonymous() {
        let kv = MemoryStore::new();
        kv.set(AUTH_KEY, "yes").await.unwrap();

        let sessions = SessionStore::new(kv);
        assert_eq!(sessions.current().await.unwrap(), Session::Anonymous);
    }
}
