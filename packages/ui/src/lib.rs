//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod repo;
pub use repo::{make_session_store, make_ticket_store};

mod config;
pub use config::use_config;

pub mod flow;
pub mod timing;

pub mod views;

pub const HELPDESK_CSS: Asset = asset!("/assets/helpdesk.css");

mod auth;
pub use auth::{
    sign_in, sign_out, use_auth, AuthProvider, AuthState, GuardDecision, LogoutButton, RouteGuard,
};

#[cfg(test)]
mod test_support;
