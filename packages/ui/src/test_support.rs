//! Helpers for tests that mount components or share the platform store.

use std::sync::OnceLock;
use std::time::Duration;

use dioxus::prelude::*;
use tokio::sync::{Mutex, MutexGuard};

/// Tests that read or write the session marker hold this, since every
/// native store handle shares one map.
pub(crate) async fn lock_session() -> MutexGuard<'static, ()> {
    static SESSION_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    SESSION_LOCK.get_or_init(|| Mutex::new(())).lock().await
}

/// Mount `dom` and keep running its tasks and renders until `done` holds.
pub(crate) async fn settle(dom: &mut VirtualDom, limit: Duration, mut done: impl FnMut() -> bool) {
    dom.rebuild_in_place();
    let drive = async {
        while !done() {
            dom.wait_for_work().await;
            dom.render_immediate_to_vec();
        }
    };
    tokio::time::timeout(limit, drive)
        .await
        .expect("virtual dom did not settle in time");
}
