//! # `localStorage` key-value store: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! It reads and writes the window's `localStorage` through `web_sys::Storage`,
//! so tickets and the authenticated marker survive page reloads in the same
//! browser profile and are isolated per origin.
//!
//! ## Connection management
//!
//! The store is a zero-size handle; every call looks up `window.localStorage`
//! afresh.
//!
//! ## Error handling
//!
//! Failures are surfaced rather than swallowed: a missing window or a
//! storage access denied by browser privacy settings is
//! [`StoreError::Unavailable`], and a rejected `setItem` (usually the quota) is
//! [`StoreError::Write`].

use wasm_bindgen::JsValue;

use crate::error::StoreError;
use crate::repo::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_error(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

impl KeyValueStore for LocalStorageStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: js_error(&e),
        })
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: js_error(&e),
        })
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?.remove_item(key).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: js_error(&e),
        })
    }
}
