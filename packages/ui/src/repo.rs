//! Shared store constructors for all platforms.
//!
//! Returns stores backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Native** (desktop builds and tests): one process-wide [`store::MemoryStore`]

use store::{SessionStore, TicketStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn platform_store() -> store::LocalStorageStore {
    store::LocalStorageStore::new()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn platform_store() -> store::MemoryStore {
    use std::sync::OnceLock;

    // Clones share their map, so every caller sees the same data.
    static STORE: OnceLock<store::MemoryStore> = OnceLock::new();
    STORE.get_or_init(store::MemoryStore::new).clone()
}

/// Create a platform-appropriate ticket store.
pub fn make_ticket_store() -> TicketStore<impl store::KeyValueStore> {
    TicketStore::new(platform_store())
}

/// Create a platform-appropriate session store.
pub fn make_session_store() -> SessionStore<impl store::KeyValueStore> {
    SessionStore::new(platform_store())
}
