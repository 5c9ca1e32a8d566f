use dioxus::prelude::*;
use store::HelpdeskConfig;

/// The configuration the app was launched with.
///
/// Falls back to the defaults when no launcher provided one.
pub fn use_config() -> HelpdeskConfig {
    use_hook(|| try_consume_context::<HelpdeskConfig>().unwrap_or_default())
}
