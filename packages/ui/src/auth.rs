//! Authentication context and hooks for the UI.
//!
//! The session is a single marker in the platform store. It is read once on
//! mount; every sign-in or sign-out afterwards updates the store and the
//! context signal together.

use dioxus::prelude::*;
use store::{Session, StoreError};

use crate::components::Spinner;
use crate::make_session_store;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Session,
    /// The stored session has not been read yet.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: Session::Anonymous,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.session.is_authenticated()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Read the stored session on mount
    let _ = use_resource(move || async move {
        let session = match make_session_store().current().await {
            Ok(session) => session,
            Err(e) => {
                tracing::error!("Failed to read session: {e}");
                Session::Anonymous
            }
        };
        tracing::debug!(?session, "session loaded");
        auth_state.set(AuthState {
            session,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Persist an authenticated session and publish it to the context.
pub async fn sign_in(mut auth_state: Signal<AuthState>) -> Result<(), StoreError> {
    let session = make_session_store().issue().await?;
    tracing::info!("signed in");
    auth_state.set(AuthState {
        session,
        loading: false,
    });
    Ok(())
}

/// Remove the session marker and publish the anonymous state.
pub async fn sign_out(mut auth_state: Signal<AuthState>) -> Result<(), StoreError> {
    let session = make_session_store().revoke().await?;
    tracing::info!("signed out");
    auth_state.set(AuthState {
        session,
        loading: false,
    });
    Ok(())
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    /// Called once the session is gone. Navigate to the login page here.
    on_logged_out: EventHandler<()>,
) -> Element {
    let auth_state = use_auth();

    let onclick = move |_| async move {
        match sign_out(auth_state).await {
            Ok(()) => on_logged_out.call(()),
            Err(e) => tracing::error!("Failed to log out: {e}"),
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// What [`RouteGuard`] does for a given [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The session is still being read.
    Wait,
    Render,
    Redirect,
}

impl GuardDecision {
    pub fn for_state(state: &AuthState) -> Self {
        if state.loading {
            GuardDecision::Wait
        } else if state.session.is_authenticated() {
            GuardDecision::Render
        } else {
            GuardDecision::Redirect
        }
    }
}

/// Renders `children` only for an authenticated session.
///
/// While the session is still loading a spinner is shown. Anonymous visitors
/// are redirected to `login_path`, replacing the history entry so the back
/// button does not return to the guarded page.
#[component]
pub fn RouteGuard(login_path: String, children: Element) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let redirect_to = login_path.clone();
    use_effect(move || {
        if GuardDecision::for_state(&auth()) == GuardDecision::Redirect {
            tracing::debug!("no session, redirecting to {redirect_to}");
            navigator.replace(redirect_to.clone());
        }
    });

    if GuardDecision::for_state(&auth()) == GuardDecision::Render {
        rsx! { {children} }
    } else {
        rsx! {
            div {
                class: "page-center",
                Spinner {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::test_support::{lock_session, settle};

    #[derive(Clone, Default)]
    struct Decisions(Rc<RefCell<Vec<GuardDecision>>>);

    impl Decisions {
        fn last(&self) -> Option<GuardDecision> {
            self.0.borrow().last().copied()
        }
    }

    #[component]
    fn DecisionRecorder() -> Element {
        let auth = use_auth();
        let decisions = use_context::<Decisions>();
        decisions.0.borrow_mut().push(GuardDecision::for_state(&auth()));
        rsx! {}
    }

    #[component]
    fn GuardedApp() -> Element {
        rsx! {
            AuthProvider { DecisionRecorder {} }
        }
    }

    async fn decide_after_load() -> Vec<GuardDecision> {
        let decisions = Decisions::default();
        let mut dom = VirtualDom::new(GuardedApp).with_root_context(decisions.clone());
        settle(&mut dom, Duration::from_secs(5), || {
            decisions.last().is_some_and(|d| d != GuardDecision::Wait)
        })
        .await;
        let seen = decisions.0.borrow().clone();
        seen
    }

    #[test]
    fn test_guard_decision_per_state() {
        assert_eq!(GuardDecision::for_state(&AuthState::default()), GuardDecision::Wait);
        let anonymous = AuthState {
            session: Session::Anonymous,
            loading: false,
        };
        assert_eq!(GuardDecision::for_state(&anonymous), GuardDecision::Redirect);
        let signed_in = AuthState {
            session: Session::Authenticated,
            loading: false,
        };
        assert_eq!(GuardDecision::for_state(&signed_in), GuardDecision::Render);
    }

    #[tokio::test]
    async fn test_guard_redirects_without_stored_flag() {
        let _guard = lock_session().await;
        make_session_store().revoke().await.unwrap();

        let seen = decide_after_load().await;

        assert_eq!(seen.first(), Some(&GuardDecision::Wait));
        assert_eq!(seen.last(), Some(&GuardDecision::Redirect));
        assert!(!seen.contains(&GuardDecision::Render));
    }

    #[tokio::test]
    async fn test_guard_renders_with_stored_flag() {
        let _guard = lock_session().await;
        make_session_store().issue().await.unwrap();

        let seen = decide_after_load().await;

        assert_eq!(seen.last(), Some(&GuardDecision::Render));
        assert!(!seen.contains(&GuardDecision::Redirect));
        make_session_store().revoke().await.unwrap();
    }

    #[test]
    fn test_loading_state_is_not_authenticated() {
        let loading = AuthState {
            session: Session::Authenticated,
            loading: true,
        };
        assert!(!loading.is_authenticated());
        assert!(!AuthState::default().is_authenticated());
    }

    #[tokio::test]
    async fn test_session_round_trip_through_platform_store() {
        let _guard = lock_session().await;
        let sessions = make_session_store();
        sessions.issue().await.unwrap();
        assert_eq!(sessions.current().await.unwrap(), Session::Authenticated);
        // A second handle sees the same marker.
        assert!(make_session_store().current().await.unwrap().is_authenticated());

        sessions.revoke().await.unwrap();
        assert_eq!(make_session_store().current().await.unwrap(), Session::Anonymous);
    }
}
