//! Transient notifications, styled for the helpdesk.
//!
//! [`ToastProvider`] sits above the router, so a toast raised right before a
//! navigation stays visible on the next page.

use dioxus::prelude::*;
use dioxus_primitives::toast::{self, ToastProviderProps};

pub use dioxus_primitives::toast::{use_toast, ToastOptions};

#[component]
pub fn ToastProvider(props: ToastProviderProps) -> Element {
    rsx! {
        toast::ToastProvider {
            default_duration: props.default_duration,
            max_toasts: props.max_toasts,
            render_toast: props.render_toast,
            children: props.children,
        }
    }
}
